// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod outcome_types;
pub mod run_state;

// Re-export.
pub use outcome_types::*;
pub use run_state::*;
