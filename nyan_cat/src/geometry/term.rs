// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;

use crate::{CommonResult, NyanError};

/// Used when the terminal width can't be determined (eg: stdout is piped, or there is no
/// controlling terminal at all).
pub const DEFAULT_WIDTH: u16 = 80;

/// The one question the reporter asks the terminal. It is asked exactly once, when a run
/// starts; the answer is not refreshed if the terminal is resized mid-run.
pub trait TerminalWidthProbe: std::fmt::Debug {
    /// # Errors
    ///
    /// Returns an error if the width can't be determined, eg: not a TTY.
    fn columns(&self) -> CommonResult<u16>;
}

/// Asks the real terminal, using [`crossterm::terminal::size`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermWidthProbe;

impl TerminalWidthProbe for CrosstermWidthProbe {
    fn columns(&self) -> CommonResult<u16> {
        let (columns, _rows) = crossterm::terminal::size().into_diagnostic()?;
        if columns == 0 {
            return Err(NyanError::TerminalWidthUnavailable.into());
        }
        Ok(columns)
    }
}

/// Always answers with the same width. Used for `--columns` and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthProbe(pub u16);

impl TerminalWidthProbe for FixedWidthProbe {
    fn columns(&self) -> CommonResult<u16> { Ok(self.0) }
}

/// Always fails. Useful to exercise the [`DEFAULT_WIDTH`] fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableWidthProbe;

impl TerminalWidthProbe for UnavailableWidthProbe {
    fn columns(&self) -> CommonResult<u16> {
        Err(NyanError::TerminalWidthUnavailable.into())
    }
}

/// Get the terminal width. If there is a problem, return the default width.
#[must_use]
pub fn get_terminal_width(probe: &dyn TerminalWidthProbe) -> u16 {
    match probe.columns() {
        Ok(columns) => columns,
        Err(report) => {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Could not get terminal width, using default",
                default_width = DEFAULT_WIDTH,
                error = %report
            );
            DEFAULT_WIDTH
        }
    }
}
