// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ansi_escape_codes;
pub mod ansi_value;

// Re-export.
pub use ansi_escape_codes::*;
pub use ansi_value::*;
