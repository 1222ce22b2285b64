// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{TerminalWidthProbe, get_terminal_width};

/// Columns taken up by the cat itself (the widest art line), plus some breathing room.
pub const NYAN_CAT_ART_WIDTH: usize = 18;

/// Number of decimal digits needed to print `count`. Zero takes one digit.
#[must_use]
pub fn digit_width(count: usize) -> usize {
    let mut width = 1;
    let mut it = count / 10;
    while it > 0 {
        width += 1;
        it /= 10;
    }
    width
}

/// Width of the `"  {current}/{total}:"` title, where both numbers are right justified to
/// the width of `total`.
#[must_use]
pub fn title_width(total_count: usize) -> usize { digit_width(total_count) * 2 + 4 }

/// Terminal geometry, snapshotted once when a run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub terminal_columns: u16,
}

impl Geometry {
    #[must_use]
    pub fn snapshot(probe: &dyn TerminalWidthProbe) -> Self {
        Self {
            terminal_columns: get_terminal_width(probe),
        }
    }
}

/// Sizes the title and the visible trail for one run. The title width is fixed for the
/// run. The window width is derived from the (unchanging) [`Geometry`] snapshot on every
/// tick, and is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCalculator {
    geometry: Geometry,
    title_width: usize,
    count_width: usize,
}

impl WindowCalculator {
    #[must_use]
    pub fn new(geometry: Geometry, total_count: usize) -> Self {
        Self {
            geometry,
            title_width: title_width(total_count),
            count_width: digit_width(total_count),
        }
    }

    #[must_use]
    pub fn title_width(&self) -> usize { self.title_width }

    /// `max(0, terminal_columns - title_width - 18)`.
    #[must_use]
    pub fn window_width(&self) -> usize {
        usize::from(self.geometry.terminal_columns)
            .saturating_sub(self.title_width)
            .saturating_sub(NYAN_CAT_ART_WIDTH)
    }

    /// Eg: `"   7/120:"`.
    #[must_use]
    pub fn format_title(&self, current_index: usize, total_count: usize) -> String {
        let width = self.count_width;
        format!("  {current_index:>width$}/{total_count:>width$}:")
    }
}
