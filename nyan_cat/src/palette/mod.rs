// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module provides the rainbow used to paint the trail and the summary trailer.
//!
//! ## Organization:
//! - `palette_types` - [`Palette`] generation and the [`PaletteCursor`].
//! - `rainbow` - [`Rainbow`], which pairs the two and colorizes text.

// Attach sources.
pub mod palette_types;
pub mod rainbow;

// Re-export.
pub use palette_types::*;
pub use rainbow::*;
