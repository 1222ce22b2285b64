// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

use crate::{CLIArg, CargoTestCollaborator, CrosstermWidthProbe, DEFAULT_RERUN_COMMAND,
            EventFormat, FixedWidthProbe, NyanCatReporter, OutputDevice,
            TerminalWidthProbe, TracingConfig};

/// Everything needed to set up a run, independent of how it was specified.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NyanCatConfig {
    /// Overrides the terminal width probe. Still read once per run.
    pub columns: Option<u16>,
    pub event_format: EventFormat,
    pub tracing_config: TracingConfig,
    /// Test command to spawn. Empty means read events from stdin.
    pub command: Vec<String>,
}

impl From<&CLIArg> for NyanCatConfig {
    fn from(cli_arg: &CLIArg) -> Self {
        let options = &cli_arg.global_options;
        let should_log = options.enable_logging || options.log_file.is_some();
        let level_filter = if should_log {
            LevelFilter::DEBUG
        } else {
            LevelFilter::OFF
        };
        Self {
            columns: options.columns,
            event_format: options.format,
            tracing_config: TracingConfig::new_file(options.log_file.clone(), level_filter),
            command: cli_arg.command.clone(),
        }
    }
}

impl NyanCatConfig {
    #[must_use]
    pub fn width_probe(&self) -> Box<dyn TerminalWidthProbe + Send> {
        match self.columns {
            Some(columns) => Box::new(FixedWidthProbe(columns)),
            None => Box::new(CrosstermWidthProbe),
        }
    }

    /// The spawned command, if it is a cargo command, otherwise `cargo test`. Arguments
    /// that switch libtest to JSON output are dropped, so the rerun prints plain text.
    #[must_use]
    pub fn rerun_command(&self) -> String {
        match self.command.first() {
            Some(program) if program == "cargo" => {
                strip_json_output_args(&self.command).join(" ")
            }
            _ => DEFAULT_RERUN_COMMAND.to_string(),
        }
    }

    pub fn create_reporter(&self, output_device: OutputDevice) -> NyanCatReporter {
        NyanCatReporter::new(
            output_device,
            self.width_probe(),
            CargoTestCollaborator::new(self.rerun_command()),
        )
    }
}

/// Removes `-Z unstable-options` and `--format json` from the test binary arguments
/// (the ones after `--`). A `--` left with nothing after it is removed too.
fn strip_json_output_args(command: &[String]) -> Vec<&str> {
    let Some(separator) = command.iter().position(|arg| arg == "--") else {
        return command.iter().map(String::as_str).collect();
    };

    let (cargo_args, test_binary_args) = command.split_at(separator + 1);
    let mut kept: Vec<&str> = cargo_args.iter().map(String::as_str).collect();
    let mut it = test_binary_args.iter().map(String::as_str).peekable();
    while let Some(arg) = it.next() {
        match (arg, it.peek().copied()) {
            ("-Z", Some("unstable-options")) | ("--format", Some("json")) => {
                it.next();
            }
            ("-Zunstable-options" | "--format=json", _) => {}
            _ => kept.push(arg),
        }
    }

    if kept.last() == Some(&"--") {
        kept.pop();
    }
    kept
}
