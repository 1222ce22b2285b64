// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          time::Duration};

use miette::IntoDiagnostic;

use crate::{CargoTestCollaborator, CommonResult, CrosstermWidthProbe, Example, Geometry,
            NyanError, OutcomeKind, OutputDevice, Rainbow, ReportingCollaborator,
            RunState, TerminalWidthProbe, TestEventReporter, WindowCalculator,
            compose_frame, lock_output_device_as_mut, render_summary};

/// Lifecycle of a run: `Idle → Running → Finished → SummaryDone`. A new run may start from
/// `SummaryDone` (eg: the next test binary in a `cargo test` invocation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Running,
    Finished,
    SummaryDone,
}

impl RunPhase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RunPhase::Idle => "idle",
            RunPhase::Running => "running",
            RunPhase::Finished => "finished",
            RunPhase::SummaryDone => "done",
        }
    }
}

impl Display for RunPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Nyan Cat flies across the terminal, trailing a rainbow of test outcomes.
///
/// Owns the [`RunState`] for the run in progress, the [`Rainbow`] (palette generated once,
/// when this reporter is created), and the [`WindowCalculator`] built from the terminal
/// width that is probed once per run.
///
/// Every [`TestEventReporter`] callback fails open: errors (invalid transitions, write
/// failures) are logged with [`tracing`] and otherwise ignored.
#[allow(missing_debug_implementations)]
pub struct NyanCatReporter<C: ReportingCollaborator = CargoTestCollaborator> {
    output_device: OutputDevice,
    width_probe: Box<dyn TerminalWidthProbe + Send>,
    collaborator: C,
    rainbow: Rainbow,
    run_state: RunState,
    window: WindowCalculator,
    phase: RunPhase,
}

impl NyanCatReporter<CargoTestCollaborator> {
    /// Draws on stdout, sized to the real terminal.
    #[must_use]
    pub fn new_stdout() -> Self {
        Self::new(
            OutputDevice::new_stdout(),
            Box::new(CrosstermWidthProbe),
            CargoTestCollaborator::default(),
        )
    }
}

impl<C: ReportingCollaborator> NyanCatReporter<C> {
    pub fn new(
        output_device: OutputDevice,
        width_probe: Box<dyn TerminalWidthProbe + Send>,
        collaborator: C,
    ) -> Self {
        Self {
            output_device,
            width_probe,
            collaborator,
            rainbow: Rainbow::new(),
            run_state: RunState::default(),
            window: WindowCalculator::new(Geometry { terminal_columns: 0 }, 0),
            phase: RunPhase::Idle,
        }
    }

    #[must_use]
    pub fn phase(&self) -> RunPhase { self.phase }

    #[must_use]
    pub fn run_state(&self) -> &RunState { &self.run_state }

    #[must_use]
    pub fn rainbow(&self) -> &Rainbow { &self.rainbow }

    #[must_use]
    pub fn window(&self) -> &WindowCalculator { &self.window }

    #[must_use]
    pub fn collaborator(&self) -> &C { &self.collaborator }

    fn expect_phase(
        &self,
        allowed: &[RunPhase],
        event: &'static str,
    ) -> Result<(), NyanError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(NyanError::InvalidTransition {
                phase: self.phase.as_str(),
                event,
            })
        }
    }

    /// Starts a run. The terminal width is probed here, and only here.
    ///
    /// # Errors
    ///
    /// Returns an error if a run is already in progress.
    pub fn try_start(&mut self, example_count: usize) -> CommonResult<()> {
        self.expect_phase(&[RunPhase::Idle, RunPhase::SummaryDone], "start")?;

        let geometry = Geometry::snapshot(self.width_probe.as_ref());
        self.run_state = RunState::new(example_count);
        self.window = WindowCalculator::new(geometry, example_count);
        self.rainbow.reset();
        self.collaborator.reset();
        self.phase = RunPhase::Running;

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Nyan Cat run started",
            example_count = example_count,
            terminal_columns = geometry.terminal_columns,
            window_width = self.window.window_width()
        );
        Ok(())
    }

    /// Records one outcome and redraws the frame.
    ///
    /// # Errors
    ///
    /// Returns an error if no run is in progress, or the frame can't be written.
    pub fn try_tick(&mut self, kind: OutcomeKind) -> CommonResult<()> {
        self.expect_phase(&[RunPhase::Running], "outcome")?;

        let outcome = self.run_state.record(kind);
        tracing::trace!(
            message = "tick",
            outcome = ?outcome,
            current_index = self.run_state.current_index
        );

        let frame = compose_frame(&self.run_state, &self.window, &mut self.rainbow);
        let out = lock_output_device_as_mut!(self.output_device);
        frame.write_to(out).into_diagnostic()
    }

    /// # Errors
    ///
    /// Returns an error if no run is in progress.
    pub fn try_finish(&mut self) -> CommonResult<()> {
        self.expect_phase(&[RunPhase::Running], "finish")?;
        self.run_state.finish();
        self.phase = RunPhase::Finished;
        tracing::debug!(message = "Nyan Cat run finished", run_state = ?self.run_state);
        Ok(())
    }

    /// Prints the trailer, the counts line, and the commands to re-run failed tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the run hasn't finished (or the summary was already printed),
    /// or writing fails.
    pub fn try_summarize(
        &mut self,
        duration: Duration,
        example_count: usize,
        failure_count: usize,
        pending_count: usize,
    ) -> CommonResult<()> {
        self.expect_phase(&[RunPhase::Finished], "summarize")?;
        self.phase = RunPhase::SummaryDone;

        let summary_line =
            self.collaborator
                .summary_line(example_count, failure_count, pending_count);
        let summary = render_summary(
            duration,
            &summary_line,
            failure_count,
            pending_count,
            &mut self.rainbow,
        );

        let out = lock_output_device_as_mut!(self.output_device);
        out.write_all(summary.as_bytes()).into_diagnostic()?;
        self.collaborator
            .dump_commands_to_rerun_failed_examples(&mut *out)
            .into_diagnostic()?;
        out.flush().into_diagnostic()?;

        tracing::debug!(
            message = "Nyan Cat summary printed",
            duration = ?duration,
            summary_line = %summary_line
        );
        Ok(())
    }
}

/// Logs and swallows the error. The reporter never fails the test run.
fn fail_open(event: &'static str, result: CommonResult<()>) {
    if let Err(report) = result {
        // % is Display, ? is Debug.
        tracing::warn!(
            message = "Nyan Cat ignored a reporter error",
            event = event,
            error = %report
        );
    }
}

impl<C: ReportingCollaborator> TestEventReporter for NyanCatReporter<C> {
    fn start(&mut self, example_count: usize) {
        fail_open("start", self.try_start(example_count));
    }

    fn example_passed(&mut self, _example: &Example) {
        fail_open("example_passed", self.try_tick(OutcomeKind::Passed));
    }

    fn example_pending(&mut self, _example: &Example) {
        fail_open("example_pending", self.try_tick(OutcomeKind::Pending));
    }

    fn example_failed(&mut self, example: &Example) {
        if self.phase == RunPhase::Running {
            self.collaborator.record_failure(example);
        }
        fail_open("example_failed", self.try_tick(OutcomeKind::Failed));
    }

    fn start_dump(&mut self) { fail_open("start_dump", self.try_finish()); }

    /// Failures are not dumped. Nyan Cat has better things to do.
    fn dump_failures(&mut self) {}

    fn dump_summary(
        &mut self,
        duration: Duration,
        example_count: usize,
        failure_count: usize,
        pending_count: usize,
    ) {
        fail_open(
            "dump_summary",
            self.try_summarize(duration, example_count, failure_count, pending_count),
        );
    }
}
