// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Composes the four line frame that is redrawn on every tick:
//!
//! ```text
//! <blank title>  <trail>  <back>
//! <blank title>  <trail>  <ears>
//! <title>        <trail>  <face>
//! <blank title>  <trail>  <feet>
//! ```
//!
//! The frame ends with a carriage return and a "cursor up 3 lines" sequence, so the next
//! tick draws over exactly the same region.

use std::io::Write;

use crate::{CsiSequence, Face, NYAN_CAT_BACK, NYAN_CAT_EARS, Outcome, Rainbow, RunState,
            SgrCode, WindowCalculator, feet_art, paint_char};

/// Number of lines in a [`Frame`].
pub const FRAME_HEIGHT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub lines: [String; FRAME_HEIGHT],
}

impl Frame {
    /// All the lines, separated by newlines, with the redraw sequence at the end. Only
    /// the first three newlines move the cursor down, and the trailing cursor up brings
    /// it back to the first line.
    #[must_use]
    pub fn render_to_string(&self) -> String {
        let [back, ears, face, feet] = &self.lines;
        #[allow(clippy::cast_possible_truncation)]
        let cursor_up = CsiSequence::CursorUp((FRAME_HEIGHT - 1) as u16);
        format!("{back}\n{ears}\n{face}\n{feet}\r{cursor_up}")
    }

    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to(&self, out: &mut dyn Write) -> std::io::Result<()> {
        out.write_all(self.render_to_string().as_bytes())?;
        out.flush()
    }
}

/// Colorizes the trail. Pass glyphs take consecutive colors from the rainbow, fail glyphs
/// are red, error glyphs are yellow, and pending glyphs are left alone. Only pass glyphs
/// move the palette cursor.
pub fn colorize_trail(trail: &[Outcome], rainbow: &mut Rainbow) -> String {
    let mut acc = String::new();
    for outcome in trail {
        let glyph = outcome.glyph();
        match outcome {
            Outcome::Pass(_) => rainbow.rainbowify_char(glyph, &mut acc),
            Outcome::Fail => paint_char(&mut acc, SgrCode::ForegroundRed, glyph),
            Outcome::Error => paint_char(&mut acc, SgrCode::ForegroundYellow, glyph),
            Outcome::Pending => acc.push(glyph),
        }
    }
    acc
}

/// Builds the frame for the current tick.
///
/// Before painting, the palette cursor is rewound by `min(window, current_index) - 1`
/// (never below zero). Since the previous tick left the cursor one past the last color it
/// used, this makes the visible trail start one color later than it did last time, so the
/// rainbow appears to fly along with the cat no matter how far into the run the window
/// has scrolled.
pub fn compose_frame(
    run_state: &RunState,
    window: &WindowCalculator,
    rainbow: &mut Rainbow,
) -> Frame {
    let title = window.format_title(run_state.current_index, run_state.total_count);
    let blank = " ".repeat(title.len());

    let window_width = window.window_width();
    let visible = run_state.trailing(window_width);

    rainbow.rewind(window_width.min(run_state.current_index).saturating_sub(1));
    let trail = colorize_trail(visible, rainbow);

    let face = Face::select(run_state).art();
    let feet = feet_art(run_state.current_index);

    Frame {
        lines: [
            format!("{blank}{trail}{NYAN_CAT_BACK}"),
            format!("{blank}{trail}{NYAN_CAT_EARS}"),
            format!("{title}{trail}{face}"),
            format!("{blank}{trail}{feet}"),
        ],
    }
}
