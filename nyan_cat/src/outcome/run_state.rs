// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Outcome, OutcomeKind};

/// Everything the reporter knows about the run in progress.
///
/// - `history` is append only. It grows without bound, but only its trailing slice (see
///   [`RunState::trailing`]) is ever read.
/// - `0 <= current_index <= total_count` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunState {
    pub total_count: usize,
    pub current_index: usize,
    pub pending_count: usize,
    pub failure_count: usize,
    history: Vec<Outcome>,
}

impl RunState {
    #[must_use]
    pub fn new(total_count: usize) -> Self {
        Self {
            total_count,
            ..Default::default()
        }
    }

    /// Records one outcome: appends its mark, bumps the matching counter, and advances
    /// `current_index` (clamped to `total_count`). Returns the mark that was appended.
    pub fn record(&mut self, kind: OutcomeKind) -> Outcome {
        let outcome = Outcome::from_kind(kind, self.current_index);
        self.history.push(outcome);

        match kind {
            OutcomeKind::Pending => self.pending_count += 1,
            OutcomeKind::Failed => self.failure_count += 1,
            OutcomeKind::Passed => {}
        }

        self.current_index = (self.current_index + 1).min(self.total_count);
        outcome
    }

    /// The run is over: show 100%, whether or not every outcome was reported.
    pub fn finish(&mut self) { self.current_index = self.total_count; }

    /// The last `max_len` marks (or all of them, if there are fewer), oldest first.
    #[must_use]
    pub fn trailing(&self, max_len: usize) -> &[Outcome] {
        let start = self.history.len().saturating_sub(max_len);
        &self.history[start..]
    }

    #[must_use]
    pub fn history(&self) -> &[Outcome] { &self.history }

    #[must_use]
    pub fn has_failures_or_pending(&self) -> bool {
        self.failure_count > 0 || self.pending_count > 0
    }

    #[must_use]
    pub fn is_complete(&self) -> bool { self.current_index == self.total_count }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PassPhase;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(5, 0)]
    #[test_case(5, 3)]
    #[test_case(5, 5)]
    #[test_case(1, 1)]
    fn test_current_index_counts_outcomes(total_count: usize, fed: usize) {
        let mut run_state = RunState::new(total_count);
        for _ in 0..fed {
            run_state.record(OutcomeKind::Passed);
        }
        assert_eq!(run_state.current_index, fed);
        assert_eq!(run_state.history().len(), fed);
    }

    #[test]
    fn test_current_index_is_clamped_to_total() {
        let mut run_state = RunState::new(2);
        for _ in 0..4 {
            run_state.record(OutcomeKind::Passed);
        }
        assert_eq!(run_state.current_index, 2);
        // History still grows.
        assert_eq!(run_state.history().len(), 4);
    }

    #[test]
    fn test_counters() {
        let mut run_state = RunState::new(5);
        run_state.record(OutcomeKind::Pending);
        run_state.record(OutcomeKind::Failed);
        run_state.record(OutcomeKind::Pending);
        run_state.record(OutcomeKind::Failed);
        run_state.record(OutcomeKind::Passed);
        assert_eq!(run_state.pending_count, 2);
        assert_eq!(run_state.failure_count, 2);
        assert!(run_state.has_failures_or_pending());
    }

    #[test]
    fn test_pass_phase_taken_before_advance() {
        let mut run_state = RunState::new(10);
        let first = run_state.record(OutcomeKind::Passed);
        let second = run_state.record(OutcomeKind::Passed);
        assert_eq!(first, Outcome::Pass(PassPhase::from_index(0)));
        assert_eq!(second, Outcome::Pass(PassPhase::from_index(1)));
    }

    #[test]
    fn test_finish_forces_complete() {
        let mut run_state = RunState::new(7);
        run_state.record(OutcomeKind::Passed);
        assert!(!run_state.is_complete());
        run_state.finish();
        assert_eq!(run_state.current_index, 7);
        assert!(run_state.is_complete());
        assert_eq!(run_state.history().len(), 1);
    }

    #[test]
    fn test_trailing() {
        let mut run_state = RunState::new(4);
        run_state.record(OutcomeKind::Passed);
        run_state.record(OutcomeKind::Failed);
        run_state.record(OutcomeKind::Pending);

        assert_eq!(run_state.trailing(2), &[Outcome::Fail, Outcome::Pending]);
        assert_eq!(run_state.trailing(10).len(), 3);
        assert!(run_state.trailing(0).is_empty());
    }

    #[test]
    fn test_zero_tests() {
        let mut run_state = RunState::new(0);
        assert!(run_state.is_complete());
        run_state.record(OutcomeKind::Passed);
        assert_eq!(run_state.current_index, 0);
    }
}
