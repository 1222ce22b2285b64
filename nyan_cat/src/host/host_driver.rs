// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{process::Stdio,
          time::{Duration, Instant}};

use miette::IntoDiagnostic;
use tokio::{io::{AsyncBufRead, AsyncBufReadExt, BufReader},
            process::Command};

use crate::{CommonResult, EventFormat, Example, HostEvent, NyanError, TestEventReporter,
            parse_line};

/// Counts for the suite (one test binary) that is currently running.
#[derive(Debug, Clone, Copy)]
struct SuiteTally {
    started_at: Instant,
    example_count: usize,
    failure_count: usize,
    pending_count: usize,
}

impl SuiteTally {
    fn new() -> Self {
        Self {
            started_at: Instant::now(),
            example_count: 0,
            failure_count: 0,
            pending_count: 0,
        }
    }
}

/// Plays the role of the host test runner: turns [`HostEvent`]s into
/// [`TestEventReporter`] callbacks, in the order the reporter expects them.
///
/// A `cargo test` invocation runs several test binaries (unit tests, integration tests,
/// doc tests). Each one is a separate suite, and gets its own run of the reporter.
/// Suites with no tests are skipped.
#[derive(Debug)]
pub struct HostDriver<R: TestEventReporter> {
    reporter: R,
    tally: Option<SuiteTally>,
    any_failed: bool,
}

impl<R: TestEventReporter> HostDriver<R> {
    pub fn new(reporter: R) -> Self {
        Self {
            reporter,
            tally: None,
            any_failed: false,
        }
    }

    pub fn reporter(&self) -> &R { &self.reporter }

    pub fn into_reporter(self) -> R { self.reporter }

    /// True if any test in any suite failed so far.
    pub fn any_failed(&self) -> bool { self.any_failed }

    pub fn handle(&mut self, event: HostEvent) {
        match event {
            HostEvent::SuiteStarted { test_count } => {
                // A suite that never reported its result (eg: the test binary crashed).
                self.finish_suite(None);
                if test_count == 0 {
                    tracing::trace!(message = "Skipping suite with no tests");
                    return;
                }
                self.tally = Some(SuiteTally::new());
                self.reporter.start(test_count);
            }
            HostEvent::TestPassed { name } => {
                if self.count(|_| {}) {
                    self.reporter.example_passed(&Example::new(name));
                }
            }
            HostEvent::TestIgnored { name } => {
                if self.count(|tally| tally.pending_count += 1) {
                    self.reporter.example_pending(&Example::new(name));
                }
            }
            HostEvent::TestFailed { name } => {
                if self.count(|tally| tally.failure_count += 1) {
                    self.any_failed = true;
                    self.reporter.example_failed(&Example::new(name));
                }
            }
            HostEvent::SuiteFinished { duration } => self.finish_suite(duration),
        }
    }

    /// Finishes a suite left open when the stream ends.
    pub fn finish_stream(&mut self) { self.finish_suite(None); }

    /// Reads events line by line until the end of `reader`, then calls
    /// [`Self::finish_stream`]. Lines that can't be parsed are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from `reader` fails.
    pub async fn drive_lines<Reader>(
        &mut self,
        format: EventFormat,
        reader: Reader,
    ) -> CommonResult<()>
    where
        Reader: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await.map_err(NyanError::ReadEventStream)? {
            match parse_line(format, &line) {
                Ok(Some(event)) => self.handle(event),
                Ok(None) => {}
                Err(report) => {
                    // % is Display, ? is Debug.
                    tracing::warn!(message = "Skipping line", error = %report);
                }
            }
        }
        self.finish_stream();
        Ok(())
    }

    /// Spawns the test command, and reads events from its stdout (its stderr is passed
    /// through). Returns whether the command exited successfully.
    ///
    /// # Errors
    ///
    /// Returns an error if the command can't be spawned, or its output can't be read.
    pub async fn drive_command(
        &mut self,
        format: EventFormat,
        command: &[String],
    ) -> CommonResult<bool> {
        let command_line = command.join(" ");
        let Some((program, args)) = command.split_first() else {
            return Err(miette::miette!("No test command to run"));
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| NyanError::SpawnTestCommand {
                command: command_line.clone(),
                source,
            })?;

        // % is Display, ? is Debug.
        tracing::debug!(message = "Spawned test command", command = %command_line);

        if let Some(stdout) = child.stdout.take() {
            self.drive_lines(format, BufReader::new(stdout)).await?;
        }

        let status = child.wait().await.into_diagnostic()?;
        tracing::debug!(message = "Test command exited", status = %status);
        Ok(status.success())
    }

    /// Returns false (and logs) if no suite is running.
    fn count(&mut self, update: impl FnOnce(&mut SuiteTally)) -> bool {
        match self.tally.as_mut() {
            Some(tally) => {
                tally.example_count += 1;
                update(tally);
                true
            }
            None => {
                tracing::warn!(message = "Ignoring test event outside of a suite");
                false
            }
        }
    }

    fn finish_suite(&mut self, duration: Option<Duration>) {
        let Some(tally) = self.tally.take() else {
            return;
        };
        let duration = duration.unwrap_or_else(|| tally.started_at.elapsed());

        self.reporter.start_dump();
        self.reporter.dump_failures();
        self.reporter.dump_summary(
            duration,
            tally.example_count,
            tally.failure_count,
            tally.pending_count,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Records every callback as a string.
    #[derive(Debug, Default)]
    struct RecordingReporter {
        calls: Vec<String>,
    }

    impl TestEventReporter for RecordingReporter {
        fn start(&mut self, example_count: usize) {
            self.calls.push(format!("start {example_count}"));
        }

        fn example_passed(&mut self, example: &Example) {
            self.calls.push(format!("passed {}", example.name));
        }

        fn example_pending(&mut self, example: &Example) {
            self.calls.push(format!("pending {}", example.name));
        }

        fn example_failed(&mut self, example: &Example) {
            self.calls.push(format!("failed {}", example.name));
        }

        fn start_dump(&mut self) { self.calls.push("start_dump".into()); }

        fn dump_failures(&mut self) { self.calls.push("dump_failures".into()); }

        fn dump_summary(
            &mut self,
            duration: Duration,
            example_count: usize,
            failure_count: usize,
            pending_count: usize,
        ) {
            self.calls.push(format!(
                "dump_summary {}ms {example_count} {failure_count} {pending_count}",
                duration.as_millis()
            ));
        }
    }

    fn new_driver() -> HostDriver<RecordingReporter> {
        HostDriver::new(RecordingReporter::default())
    }

    #[test]
    fn test_callback_order() {
        let mut driver = new_driver();
        driver.handle(HostEvent::SuiteStarted { test_count: 3 });
        driver.handle(HostEvent::TestPassed { name: "a".into() });
        driver.handle(HostEvent::TestIgnored { name: "b".into() });
        driver.handle(HostEvent::TestFailed { name: "c".into() });
        driver.handle(HostEvent::SuiteFinished {
            duration: Some(Duration::from_millis(20)),
        });

        assert_eq!(
            driver.reporter().calls,
            vec![
                "start 3",
                "passed a",
                "pending b",
                "failed c",
                "start_dump",
                "dump_failures",
                "dump_summary 20ms 3 1 1",
            ]
        );
        assert!(driver.any_failed());
    }

    #[test]
    fn test_empty_suite_is_skipped() {
        let mut driver = new_driver();
        driver.handle(HostEvent::SuiteStarted { test_count: 0 });
        driver.handle(HostEvent::SuiteFinished { duration: None });
        assert!(driver.reporter().calls.is_empty());
        assert!(!driver.any_failed());
    }

    #[test]
    fn test_events_outside_a_suite_are_ignored() {
        let mut driver = new_driver();
        driver.handle(HostEvent::TestFailed { name: "a".into() });
        assert!(driver.reporter().calls.is_empty());
        assert!(!driver.any_failed());
    }

    #[test]
    fn test_unfinished_suite_is_closed_by_the_next_one() {
        let mut driver = new_driver();
        driver.handle(HostEvent::SuiteStarted { test_count: 2 });
        driver.handle(HostEvent::TestPassed { name: "a".into() });
        driver.handle(HostEvent::SuiteStarted { test_count: 1 });

        let calls = &driver.reporter().calls;
        assert_eq!(
            &calls[..4],
            &["start 2", "passed a", "start_dump", "dump_failures"]
        );
        assert!(calls[4].starts_with("dump_summary"));
        assert!(calls[4].ends_with(" 1 0 0"));
        assert_eq!(calls[5], "start 1");
    }

    #[test]
    fn test_finish_stream_closes_open_suite() {
        let mut driver = new_driver();
        driver.handle(HostEvent::SuiteStarted { test_count: 1 });
        driver.finish_stream();
        driver.finish_stream();
        assert_eq!(driver.reporter().calls.len(), 4);
        assert_eq!(driver.reporter().calls[2], "dump_failures");
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_drive_lines_with_two_suites() {
        let input = "\
running 2 tests
test tests::a ... ok
test tests::b ... FAILED

failures:

---- tests::b stdout ----
boom

test result: FAILED. 1 passed; 1 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.50s

running 0 tests

test result: ok. 0 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.00s

running 1 test
test c ... ignored
test result: ok. 0 passed; 0 failed; 1 ignored; 0 measured; 0 filtered out; finished in 0.01s
";
        let mut driver = new_driver();
        driver
            .drive_lines(EventFormat::Auto, input.as_bytes())
            .await
            .unwrap();

        assert_eq!(
            driver.into_reporter().calls,
            vec![
                "start 2",
                "passed tests::a",
                "failed tests::b",
                "start_dump",
                "dump_failures",
                "dump_summary 500ms 2 1 0",
                "start 1",
                "pending c",
                "start_dump",
                "dump_failures",
                "dump_summary 10ms 1 0 1",
            ]
        );
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_drive_lines_skips_malformed_json() {
        let input = "\
{ \"type\": \"suite\", \"event\": \"started\", \"test_count\": 1 }
not json
{ \"type\": \"test\", \"event\": \"ok\", \"name\": \"a\" }
";
        let mut driver = new_driver();
        driver
            .drive_lines(EventFormat::Json, input.as_bytes())
            .await
            .unwrap();

        let calls = driver.into_reporter().calls;
        assert_eq!(&calls[..2], &["start 1", "passed a"]);
        // Closed by the end of the stream.
        assert_eq!(calls.len(), 5);
    }

    #[cfg(unix)]
    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_drive_command() {
        let script = "printf 'running 1 test\\ntest a ... FAILED\\n'; exit 101";
        let command = ["sh", "-c", script].map(String::from);
        let mut driver = new_driver();
        let succeeded = driver
            .drive_command(EventFormat::Pretty, &command)
            .await
            .unwrap();

        assert!(!succeeded);
        assert!(driver.any_failed());
        assert_eq!(&driver.reporter().calls[..2], &["start 1", "failed a"]);
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_drive_command_not_found() {
        let command = ["r3bl_nyan_cat_no_such_command".to_string()];
        let report = new_driver()
            .drive_command(EventFormat::Pretty, &command)
            .await
            .unwrap_err();
        assert!(matches!(
            report.downcast_ref::<NyanError>(),
            Some(NyanError::SpawnTestCommand { .. })
        ));
    }
}
