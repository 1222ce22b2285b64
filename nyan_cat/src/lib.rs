// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_nyan_cat
//!
//! A progress reporter for test runs, in all Nyan Cat glory. Every test outcome is
//! appended to a rainbow trail, and a four line ASCII cat is redrawn in place (using
//! cursor repositioning escape sequences) at the head of that trail:
//!
//! ```text
//!                                       ╭ ━━━━━━ ╮
//!   ¯¯·.¸¸.·¯¯·.¸¸.·¯¯·.¸¸.·¯¯·.¸¸.·¯¯·.  ┃.  〮.  〮⟑   ⟑
//!   36/40:¯¯·.¸¸.·¯¯·.¸¸.·¯¯·.¸¸.·¯¯·.╭ ┃ ᐧ .（｡°‿‿°｡）
//!         ¯¯·.¸¸.·¯¯·.¸¸.·¯¯·.¸¸.·¯¯·.  ╰ ━⊍━⊍━━ ⊍ ⊍
//! ```
//!
//! When the run ends, a colorized trailer ("Nyan Cat flew for 1.23 seconds") and a
//! counts line are printed, followed by the commands needed to re-run failed tests.
//!
//! # Architecture
//!
//! Leaves first:
//! - [`palette`]: A fixed 42 entry, sine wave derived, 256-color palette and the
//!   [`Rainbow`] cursor that walks it.
//! - [`outcome`]: [`Outcome`] marks and the [`RunState`] that records them.
//! - [`geometry`]: Terminal width probing (done exactly once per run) and the
//!   [`WindowCalculator`] that sizes the visible trail.
//! - [`render`]: Frame composition for each tick, and the post run summary.
//! - [`reporter`]: The [`TestEventReporter`] callback surface and its one conforming
//!   type, [`NyanCatReporter`].
//! - [`host`]: Turns `cargo test` (libtest) output into reporter callbacks. This is what
//!   the `nyan` binary uses.
//! - [`config`] and [`mod@log`]: The `nyan` command line, and file based [`tracing`]
//!   output (disabled by default).
//!
//! Everything here is synchronous and single threaded. Rendering is purely cosmetic,
//! so errors at the reporter boundary are logged and swallowed; they never change the
//! outcome of the test run.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide a flat public API).
pub mod ansi;
pub mod config;
pub mod error;
pub mod geometry;
pub mod host;
pub mod log;
pub mod outcome;
pub mod output;
pub mod palette;
pub mod render;
pub mod reporter;

// Re-export.
pub use ansi::*;
pub use config::*;
pub use error::*;
pub use geometry::*;
pub use host::*;
pub use log::*;
pub use outcome::*;
pub use output::*;
pub use palette::*;
pub use render::*;
pub use reporter::*;
