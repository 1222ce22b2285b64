// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod nyan_cat_reporter;
pub mod reporting_collaborator;
pub mod test_event_reporter;

// Re-export.
pub use nyan_cat_reporter::*;
pub use reporting_collaborator::*;
pub use test_event_reporter::*;
