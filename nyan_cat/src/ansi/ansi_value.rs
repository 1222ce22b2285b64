// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI 256-color palette index.

/// Number of steps along each axis of the 6x6x6 color cube.
pub const COLOR_CUBE_STEPS: u8 = 6;

/// First index of the color cube in the 256-color palette (0-15 are the system colors).
pub const COLOR_CUBE_OFFSET: u8 = 16;

/// Represents a color in the ANSI 256-color palette format. Each index (0-255) maps to a
/// specific color in the palette.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl AnsiValue {
    #[must_use]
    pub fn new(index: u8) -> Self { Self { index } }

    /// Packs red, green, and blue cube coordinates into a palette index:
    /// `16 + 36·r + 6·g + b`. Each coordinate is clamped to `0..=5`.
    #[must_use]
    pub fn from_color_cube(red: u8, green: u8, blue: u8) -> Self {
        let max = COLOR_CUBE_STEPS - 1;
        let (red, green, blue) = (red.min(max), green.min(max), blue.min(max));
        let index = COLOR_CUBE_OFFSET
            + red * COLOR_CUBE_STEPS * COLOR_CUBE_STEPS
            + green * COLOR_CUBE_STEPS
            + blue;
        Self { index }
    }
}
