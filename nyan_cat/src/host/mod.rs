// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod host_driver;
pub mod libtest_event;

// Re-export.
pub use host_driver::*;
pub use libtest_event::*;
