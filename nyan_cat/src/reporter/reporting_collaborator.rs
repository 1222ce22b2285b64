// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Result, Write};

use crate::{Example, SgrCode, painted};

pub const DEFAULT_RERUN_COMMAND: &str = "cargo test";

/// The reporting capabilities the reporter delegates instead of implementing itself: the
/// plain text of the counts line, and the list of commands to re-run failed tests.
pub trait ReportingCollaborator: std::fmt::Debug {
    /// Bookkeeping for a failed test, called before it is drawn.
    fn record_failure(&mut self, example: &Example);

    /// Eg: `"3 examples, 1 failure, 1 pending"`.
    fn summary_line(
        &self,
        example_count: usize,
        failure_count: usize,
        pending_count: usize,
    ) -> String;

    /// Writes nothing if there were no failures.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    fn dump_commands_to_rerun_failed_examples(&self, out: &mut dyn Write) -> Result<()>;

    /// Forget everything recorded, before the next run starts.
    fn reset(&mut self);
}

/// `count` followed by `word`, pluralized with an "s" unless `count` is 1.
#[must_use]
pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Knows how to re-run a single libtest test: `cargo test -- --exact <name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoTestCollaborator {
    /// The command that ran the tests, eg: `cargo test -p r3bl_nyan_cat`.
    pub rerun_command: String,
    failed_examples: Vec<Example>,
}

impl Default for CargoTestCollaborator {
    fn default() -> Self { Self::new(DEFAULT_RERUN_COMMAND) }
}

impl CargoTestCollaborator {
    pub fn new(rerun_command: impl Into<String>) -> Self {
        Self {
            rerun_command: rerun_command.into(),
            failed_examples: vec![],
        }
    }

    #[must_use]
    pub fn failed_examples(&self) -> &[Example] { &self.failed_examples }

    /// If the command already passes arguments to the test binary (after `--`), the
    /// filter is appended to those instead of starting a second `--` list.
    #[must_use]
    pub fn rerun_command_for(&self, example: &Example) -> String {
        let has_test_binary_args = self
            .rerun_command
            .split_whitespace()
            .any(|arg| arg == "--");
        let separator = if has_test_binary_args { "" } else { " --" };
        format!(
            "{}{separator} --exact {}",
            self.rerun_command.trim_end(),
            example.name
        )
    }
}

impl ReportingCollaborator for CargoTestCollaborator {
    fn record_failure(&mut self, example: &Example) {
        self.failed_examples.push(example.clone());
    }

    fn summary_line(
        &self,
        example_count: usize,
        failure_count: usize,
        pending_count: usize,
    ) -> String {
        let mut it = format!(
            "{}, {}",
            pluralize(example_count, "example"),
            pluralize(failure_count, "failure")
        );
        if pending_count > 0 {
            it.push_str(&format!(", {pending_count} pending"));
        }
        it
    }

    fn dump_commands_to_rerun_failed_examples(&self, out: &mut dyn Write) -> Result<()> {
        if self.failed_examples.is_empty() {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "Failed examples:")?;
        writeln!(out)?;
        for example in &self.failed_examples {
            let command = painted(SgrCode::ForegroundRed, &self.rerun_command_for(example));
            let detail = painted(SgrCode::ForegroundCyan, &format!("# {}", example.name));
            writeln!(out, "{command} {detail}")?;
        }
        out.flush()
    }

    fn reset(&mut self) { self.failed_examples.clear(); }
}
