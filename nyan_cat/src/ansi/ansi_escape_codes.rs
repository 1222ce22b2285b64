// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI escape code generation for the handful of sequences the reporter emits:
//! - SGR foreground colors (basic red, green, yellow, cyan, and 256-color indices).
//! - SGR reset.
//! - CSI cursor up, used to redraw the frame in place.
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use super::AnsiValue;

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";
pub const CUU: &str = "A";

/// SGR Reset sequence. Resets all text attributes (color, bold, italic, etc.) to default.
pub const SGR_RESET: &str = "\x1b[0m";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    ForegroundRed,
    ForegroundGreen,
    ForegroundYellow,
    ForegroundCyan,
    ForegroundAnsi256(AnsiValue),
}

impl SgrCode {
    pub fn write_to_buf(&self, buf: &mut String) {
        buf.push_str(CSI);
        match *self {
            SgrCode::Reset => buf.push('0'),
            SgrCode::ForegroundRed => buf.push_str("31"),
            SgrCode::ForegroundGreen => buf.push_str("32"),
            SgrCode::ForegroundYellow => buf.push_str("33"),
            SgrCode::ForegroundCyan => buf.push_str("36"),
            SgrCode::ForegroundAnsi256(ansi_value) => {
                buf.push_str("38;5;");
                buf.push_str(&ansi_value.index.to_string());
            }
        }
        buf.push_str(SGR);
    }
}

impl Display for SgrCode {
    /// SGR: set graphics mode command.
    /// More info:
    /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
    /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut acc = String::new();
        self.write_to_buf(&mut acc);
        f.write_str(&acc)
    }
}

/// CSI sequences that move the cursor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CsiSequence {
    /// Move the cursor up by the given number of lines (`CSI n A`).
    CursorUp(u16),
}

impl Display for CsiSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            CsiSequence::CursorUp(lines) => write!(f, "{CSI}{lines}{CUU}"),
        }
    }
}

/// Appends `text` to `acc`, wrapped in the given color and a trailing reset.
pub fn paint(acc: &mut String, sgr_code: SgrCode, text: &str) {
    sgr_code.write_to_buf(acc);
    acc.push_str(text);
    SgrCode::Reset.write_to_buf(acc);
}

/// Same as [`paint`] but for a single character, which is how trail glyphs and the
/// summary trailer are colorized.
pub fn paint_char(acc: &mut String, sgr_code: SgrCode, ch: char) {
    sgr_code.write_to_buf(acc);
    acc.push(ch);
    SgrCode::Reset.write_to_buf(acc);
}

/// Returns `text` wrapped in the given color and a trailing reset.
#[must_use]
pub fn painted(sgr_code: SgrCode, text: &str) -> String {
    let mut acc = String::with_capacity(text.len() + 16);
    paint(&mut acc, sgr_code, text);
    acc
}
