// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod term;
pub mod window_calc;

// Re-export.
pub use term::*;
pub use window_calc::*;
