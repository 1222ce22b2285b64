// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// The glyphs a passing test leaves in the trail, indexed by [`PassPhase`]. Drawn in
/// sequence they make the wavy `¯¯·.¸¸.·` rainbow.
pub const TRAIL_CHARS: [char; 8] = ['¯', '¯', '·', '.', '¸', '¸', '.', '·'];

pub const PENDING_CHAR: char = '·';
pub const FAIL_CHAR: char = '*';
pub const ERROR_CHAR: char = '!';

/// What the host test runner reported for one test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Passed,
    Pending,
    Failed,
}

/// Index (`0..8`) into [`TRAIL_CHARS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PassPhase(u8);

impl PassPhase {
    /// The phase of a pass is taken from the number of outcomes seen before it.
    #[must_use]
    pub fn from_index(current_index: usize) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let it = (current_index % TRAIL_CHARS.len()) as u8;
        Self(it)
    }

    #[must_use]
    pub fn as_usize(self) -> usize { usize::from(self.0) }
}

/// One mark in the trail.
///
/// [`Outcome::Error`] is never produced by any [`OutcomeKind`] today, but it keeps its
/// glyph and its (yellow) color, so a host that can tell errors apart from failures has
/// somewhere to put them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Pass(PassPhase),
    Pending,
    Fail,
    Error,
}

impl Outcome {
    #[must_use]
    pub fn from_kind(kind: OutcomeKind, current_index: usize) -> Self {
        match kind {
            OutcomeKind::Passed => Outcome::Pass(PassPhase::from_index(current_index)),
            OutcomeKind::Pending => Outcome::Pending,
            OutcomeKind::Failed => Outcome::Fail,
        }
    }

    #[must_use]
    pub fn glyph(&self) -> char {
        match self {
            Outcome::Pass(phase) => TRAIL_CHARS[phase.as_usize()],
            Outcome::Pending => PENDING_CHAR,
            Outcome::Fail => FAIL_CHAR,
            Outcome::Error => ERROR_CHAR,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.glyph()) }
}
