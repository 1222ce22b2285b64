// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core data types for the rainbow palette:
//! - [`Palette`] - the fixed, cyclic sequence of 256-color codes.
//! - [`PaletteCursor`] - the rolling index into it.

use std::{f64::consts::PI,
          ops::{Deref, DerefMut}};

use crate::AnsiValue;

/// Samples taken per unit of phase. The wave is sampled at `n / 6`.
pub const PALETTE_STEPS: usize = 6;

/// Number of repeating bands of [`PALETTE_STEPS`] samples.
pub const PALETTE_BANDS: usize = 7;

/// Total number of colors in the [`Palette`].
pub const PALETTE_LEN: usize = PALETTE_STEPS * PALETTE_BANDS;

// ================================================================================================
// Palette
// ================================================================================================

/// The rainbow. Three sine waves, phase shifted by 0°, 120°, and 240°, drive the red,
/// green, and blue channels. Each channel is scaled into `0..=5` and the triple is packed
/// into the 6x6x6 color cube of the 256-color palette.
///
/// This is generated once (see [`Palette::generate`]) and is immutable after that. Index
/// into it with a [`PaletteCursor`], which is always read modulo [`PALETTE_LEN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [AnsiValue; PALETTE_LEN],
}

impl Default for Palette {
    fn default() -> Self { Self::generate() }
}

impl Palette {
    #[must_use]
    pub fn generate() -> Self {
        let mut colors = [AnsiValue::new(0); PALETTE_LEN];
        for (n, color) in colors.iter_mut().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let phase = n as f64 / PALETTE_STEPS as f64;
            let red = sample_channel(phase);
            let green = sample_channel(phase + 2.0 * PI / 3.0);
            let blue = sample_channel(phase + 4.0 * PI / 3.0);
            *color = AnsiValue::from_color_cube(red, green, blue);
        }
        Self { colors }
    }

    #[must_use]
    pub fn get(&self, cursor: PaletteCursor) -> AnsiValue {
        self.colors[*cursor % PALETTE_LEN]
    }

    #[must_use]
    pub fn len(&self) -> usize { self.colors.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &AnsiValue> { self.colors.iter() }
}

/// Maps `sin(phase)` from `[-1, 1]` into `0..=5`, truncating toward zero.
fn sample_channel(phase: f64) -> u8 {
    let value = 3.0 * phase.sin() + 3.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let it = value.max(0.0) as u8;
    it.min(5)
}

// ================================================================================================
// PaletteCursor
// ================================================================================================

/// Rolling index into the [`Palette`]. It advances by one for every colorized character,
/// and may be rewound (never below zero) so that a redrawn trail starts where the
/// previous one started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaletteCursor(pub usize);

mod palette_cursor {
    use super::{Deref, DerefMut, PaletteCursor};

    impl Deref for PaletteCursor {
        type Target = usize;

        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for PaletteCursor {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }

    impl From<usize> for PaletteCursor {
        fn from(it: usize) -> Self { Self(it) }
    }
}

impl PaletteCursor {
    pub fn advance(&mut self) { self.0 = self.0.wrapping_add(1); }

    /// Moves back by `positions`, clamped at zero.
    pub fn rewind(&mut self, positions: usize) { self.0 = self.0.saturating_sub(positions); }

    pub fn reset(&mut self) { self.0 = 0; }
}
