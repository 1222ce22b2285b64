// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnsiValue, Palette, PaletteCursor, SgrCode, paint_char};

/// Pairs the (generate once) [`Palette`] with the [`PaletteCursor`] that walks it. This is
/// the "lolcat" of the reporter: every call to [`Rainbow::rainbowify_char`] paints one
/// character with the current color and moves on to the next one.
///
/// The cursor is shared by the trail (rewound on every tick, so the visible window always
/// shows a contiguous, increasing run of colors) and the summary trailer (which just keeps
/// going from wherever the trail left it).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rainbow {
    palette: Palette,
    cursor: PaletteCursor,
}

impl Rainbow {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn palette(&self) -> &Palette { &self.palette }

    #[must_use]
    pub fn cursor(&self) -> PaletteCursor { self.cursor }

    /// Color under the cursor, without advancing.
    #[must_use]
    pub fn current_color(&self) -> AnsiValue { self.palette.get(self.cursor) }

    /// Returns the color under the cursor and advances it.
    pub fn next_color(&mut self) -> AnsiValue {
        let it = self.current_color();
        self.cursor.advance();
        it
    }

    pub fn rainbowify_char(&mut self, ch: char, acc: &mut String) {
        let color = self.next_color();
        paint_char(acc, SgrCode::ForegroundAnsi256(color), ch);
    }

    /// Colorizes each character of `text` with consecutive palette colors.
    pub fn rainbowify(&mut self, text: &str, acc: &mut String) {
        for ch in text.chars() {
            self.rainbowify_char(ch, acc);
        }
    }

    pub fn rewind(&mut self, positions: usize) { self.cursor.rewind(positions); }

    pub fn reset(&mut self) { self.cursor.reset(); }
}
