// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Ascii Nyan Cat, one string per line of the frame. If tests are complete, Nyan Cat goes
//! to sleep. If there are failing or pending examples, Nyan Cat is concerned.

use crate::RunState;

pub const NYAN_CAT_BACK: &str = "  ╭ ━━━━━━ ╮";
pub const NYAN_CAT_EARS: &str = "  ┃.  〮.  〮⟑   ⟑";
pub const NYAN_CAT_FACE_CONCERNED: &str = "╭ ┃ . ᐧ（｡ˣ⌢ ˣ｡）";
pub const NYAN_CAT_FACE_SLEEPING: &str = "╰ ┃ . ᐧ（｡ᐢ‿‿ᐢ｡）";
pub const NYAN_CAT_FACE_RUNNING_TAIL_UP: &str = "╭ ┃ ᐧ .（｡°‿‿°｡）";
pub const NYAN_CAT_FACE_RUNNING_TAIL_DOWN: &str = "╰ ┃ ᐧ .（｡°‿‿°｡）";
pub const NYAN_CAT_FEET_A: &str = "  ╰ ━⊍━⊍━━ ⊍ ⊍";
pub const NYAN_CAT_FEET_B: &str = "  ╰ ⊍━⊍━━━⊍ ⊍ ";

/// Two phase animation cycle, keyed on `current_index mod 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gait {
    First,
    Second,
}

impl Gait {
    #[must_use]
    pub fn from_index(current_index: usize) -> Self {
        if current_index % 4 < 2 {
            Gait::First
        } else {
            Gait::Second
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Concerned,
    Sleeping,
    Running(Gait),
}

impl Face {
    /// Problems win over completion: a finished run with a failure is still concerning.
    #[must_use]
    pub fn select(run_state: &RunState) -> Self {
        if run_state.has_failures_or_pending() {
            Face::Concerned
        } else if run_state.is_complete() {
            Face::Sleeping
        } else {
            Face::Running(Gait::from_index(run_state.current_index))
        }
    }

    #[must_use]
    pub fn art(self) -> &'static str {
        match self {
            Face::Concerned => NYAN_CAT_FACE_CONCERNED,
            Face::Sleeping => NYAN_CAT_FACE_SLEEPING,
            Face::Running(Gait::First) => NYAN_CAT_FACE_RUNNING_TAIL_UP,
            Face::Running(Gait::Second) => NYAN_CAT_FACE_RUNNING_TAIL_DOWN,
        }
    }
}

/// The feet keep walking regardless of which face is showing.
#[must_use]
pub fn feet_art(current_index: usize) -> &'static str {
    match Gait::from_index(current_index) {
        Gait::First => NYAN_CAT_FEET_A,
        Gait::Second => NYAN_CAT_FEET_B,
    }
}
