// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod frame_renderer;
pub mod nyan_art;
pub mod summary_renderer;

// Re-export.
pub use frame_renderer::*;
pub use nyan_art::*;
pub use summary_renderer::*;
