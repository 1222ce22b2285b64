// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parses the output of a libtest test binary (what `cargo test` runs) into
//! [`HostEvent`]s. Two formats are understood:
//!
//! 1. Pretty (the default):
//!    ```text
//!    running 2 tests
//!    test tests::one ... ok
//!    test tests::two ... FAILED
//!    test result: FAILED. 1 passed; 1 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.01s
//!    ```
//! 2. JSON (`cargo test -- -Z unstable-options --format json`), one object per line:
//!    ```text
//!    { "type": "suite", "event": "started", "test_count": 2 }
//!    { "type": "test", "event": "ok", "name": "tests::one" }
//!    { "type": "suite", "event": "failed", "passed": 1, "failed": 1, "exec_time": 0.01 }
//!    ```

use std::time::Duration;

use clap::ValueEnum;
use serde::Deserialize;

use crate::{CommonResult, NyanError};

/// Which libtest output format to expect on each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EventFormat {
    /// Lines starting with `{` are JSON, everything else is pretty.
    #[default]
    Auto,
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    SuiteStarted { test_count: usize },
    TestPassed { name: String },
    /// An ignored test is reported as pending.
    TestIgnored { name: String },
    TestFailed { name: String },
    /// `None` when the stream doesn't say how long the suite took.
    SuiteFinished { duration: Option<Duration> },
}

/// Returns `Ok(None)` for lines that aren't test events (compiler output, captured
/// stdout of failed tests, etc).
///
/// # Errors
///
/// In [`EventFormat::Json`] mode, returns [`NyanError::MalformedEvent`] if the line is
/// not a libtest JSON object.
pub fn parse_line(format: EventFormat, line: &str) -> CommonResult<Option<HostEvent>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    match format {
        EventFormat::Pretty => Ok(parse_pretty_line(line)),
        EventFormat::Json => parse_json_line(line),
        EventFormat::Auto => {
            if line.starts_with('{') {
                parse_json_line(line)
            } else {
                Ok(parse_pretty_line(line))
            }
        }
    }
}

mod pretty {
    pub const RUNNING_PREFIX: &str = "running ";
    pub const TEST_PREFIX: &str = "test ";
    pub const RESULT_PREFIX: &str = "test result: ";
    pub const STATUS_SEPARATOR: &str = " ... ";
    pub const FINISHED_IN: &str = "finished in ";
    pub const SHOULD_PANIC_SUFFIX: &str = " - should panic";
}

fn parse_pretty_line(line: &str) -> Option<HostEvent> {
    if let Some(rest) = line.strip_prefix(pretty::RUNNING_PREFIX) {
        // "running 1 test" or "running 12 tests".
        let (count, unit) = rest.split_once(' ')?;
        if unit != "test" && unit != "tests" {
            return None;
        }
        let test_count = count.parse().ok()?;
        return Some(HostEvent::SuiteStarted { test_count });
    }

    if let Some(rest) = line.strip_prefix(pretty::RESULT_PREFIX) {
        let duration = rest
            .rsplit_once(pretty::FINISHED_IN)
            .and_then(|(_, secs)| parse_seconds(secs.trim_end_matches('s')));
        return Some(HostEvent::SuiteFinished { duration });
    }

    let rest = line.strip_prefix(pretty::TEST_PREFIX)?;
    let (name, status) = rest.rsplit_once(pretty::STATUS_SEPARATOR)?;
    let name = name
        .strip_suffix(pretty::SHOULD_PANIC_SUFFIX)
        .unwrap_or(name)
        .to_string();

    match status {
        "ok" => Some(HostEvent::TestPassed { name }),
        "FAILED" => Some(HostEvent::TestFailed { name }),
        // "ignored" or "ignored, <reason>".
        it if it.starts_with("ignored") => Some(HostEvent::TestIgnored { name }),
        _ => None,
    }
}

fn parse_seconds(secs: &str) -> Option<Duration> {
    let secs: f64 = secs.trim().parse().ok()?;
    Duration::try_from_secs_f64(secs).ok()
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsonLine {
    Suite(JsonSuiteEvent),
    Test(JsonTestEvent),
    /// Eg: `bench`.
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum JsonSuiteEvent {
    Started { test_count: usize },
    Ok { exec_time: Option<f64> },
    Failed { exec_time: Option<f64> },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum JsonTestEvent {
    Ok { name: String },
    Failed { name: String },
    Ignored { name: String },
    /// Eg: `started`, `timeout`.
    #[serde(other)]
    Other,
}

fn parse_json_line(line: &str) -> CommonResult<Option<HostEvent>> {
    let json_line: JsonLine =
        serde_json::from_str(line).map_err(|_| NyanError::MalformedEvent {
            line: line.to_string(),
        })?;

    Ok(match json_line {
        JsonLine::Suite(JsonSuiteEvent::Started { test_count }) => {
            Some(HostEvent::SuiteStarted { test_count })
        }
        JsonLine::Suite(
            JsonSuiteEvent::Ok { exec_time } | JsonSuiteEvent::Failed { exec_time },
        ) => Some(HostEvent::SuiteFinished {
            duration: exec_time.and_then(|it| Duration::try_from_secs_f64(it).ok()),
        }),
        JsonLine::Test(JsonTestEvent::Ok { name }) => Some(HostEvent::TestPassed { name }),
        JsonLine::Test(JsonTestEvent::Failed { name }) => {
            Some(HostEvent::TestFailed { name })
        }
        JsonLine::Test(JsonTestEvent::Ignored { name }) => {
            Some(HostEvent::TestIgnored { name })
        }
        JsonLine::Test(JsonTestEvent::Other) | JsonLine::Other => None,
    })
}
