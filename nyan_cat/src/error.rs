// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types. Fallible functions return [`CommonResult`] ([`miette::Result`]); domain
//! failures are [`NyanError`] variants, each with a [diagnostic code] and help text.
//!
//! None of these ever reach the host test runner: the [`crate::TestEventReporter`]
//! callbacks log them and carry on.
//!
//! [diagnostic code]: miette::Diagnostic::code

/// Type alias to make it easy to work with [`miette::Result`].
pub type CommonResult<T> = miette::Result<T>;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum NyanError {
    /// An event arrived in a phase that doesn't accept it, eg: an outcome before `start`.
    #[error("Event `{event}` is not valid while the reporter is {phase}")]
    #[diagnostic(
        code(r3bl_nyan_cat::reporter::invalid_transition),
        help("The host must call start, then outcomes, then finish, then summarize")
    )]
    InvalidTransition {
        phase: &'static str,
        event: &'static str,
    },

    #[error("Could not determine the terminal width")]
    #[diagnostic(
        code(r3bl_nyan_cat::geometry::terminal_width_unavailable),
        help("Pass `--columns` to set the width explicitly")
    )]
    TerminalWidthUnavailable,

    #[error("Could not parse test event: {line}")]
    #[diagnostic(
        code(r3bl_nyan_cat::host::malformed_event),
        help("Only libtest pretty and JSON output formats are understood")
    )]
    MalformedEvent { line: String },

    #[error("Could not read the test event stream")]
    #[diagnostic(code(r3bl_nyan_cat::host::read_event_stream))]
    ReadEventStream(#[source] std::io::Error),

    #[error("Could not run test command `{command}`")]
    #[diagnostic(
        code(r3bl_nyan_cat::host::spawn_test_command),
        help("Check that the command exists and is on your PATH")
    )]
    SpawnTestCommand {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
