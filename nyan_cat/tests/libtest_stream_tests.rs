// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drives a [`NyanCatReporter`] with captured `cargo test` output, the way the `nyan`
//! binary does, and checks what ends up on the (mock) terminal.

use pretty_assertions::assert_eq;
use r3bl_nyan_cat::{CargoTestCollaborator, EventFormat, FixedWidthProbe, HostDriver,
                    NYAN_CAT_FACE_CONCERNED, NYAN_CAT_FACE_SLEEPING, NyanCatReporter,
                    OutputDevice, RunPhase, StdoutMock};

const FRAME_REDRAW: &str = "\r\x1b[3A";

const ALL_PASS: &str = "\
running 3 tests
test tests::a ... ok
test tests::b ... ok
test tests::c ... ok

test result: ok. 3 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.01s
";

const SOME_FAIL: &str = "\
running 3 tests
test tests::a ... ok
test tests::b ... FAILED
test tests::c ... ignored

failures:

---- tests::b stdout ----

thread 'tests::b' panicked at src/lib.rs:10:9:
assertion failed: false

failures:
    tests::b

test result: FAILED. 1 passed; 1 failed; 1 ignored; 0 measured; 0 filtered out; finished in 1.234s
";

fn new_driver(columns: u16) -> (HostDriver<NyanCatReporter>, StdoutMock) {
    let (output_device, stdout_mock) = OutputDevice::new_mock();
    let reporter = NyanCatReporter::new(
        output_device,
        Box::new(FixedWidthProbe(columns)),
        CargoTestCollaborator::new("cargo test -p my_crate"),
    );
    (HostDriver::new(reporter), stdout_mock)
}

async fn drive(
    columns: u16,
    format: EventFormat,
    input: &str,
) -> (HostDriver<NyanCatReporter>, StdoutMock) {
    let (mut driver, stdout_mock) = new_driver(columns);
    driver.drive_lines(format, input.as_bytes()).await.unwrap();
    (driver, stdout_mock)
}

#[tokio::test]
#[allow(clippy::needless_return)]
async fn test_all_pass() {
    let (driver, stdout_mock) = drive(40, EventFormat::Pretty, ALL_PASS).await;
    let output = stdout_mock.get_copy_of_buffer_as_string();

    assert!(!driver.any_failed());
    assert_eq!(output.matches(FRAME_REDRAW).count(), 3);

    let (frames, summary) = output.rsplit_once(FRAME_REDRAW).unwrap();
    let last_frame = frames.rsplit(FRAME_REDRAW).next().unwrap();
    assert!(last_frame.contains("  3/3:"));
    assert!(last_frame.contains(NYAN_CAT_FACE_SLEEPING));

    assert!(summary.ends_with("\x1b[32m3 examples, 0 failures\x1b[0m\n"));
    assert!(!summary.contains("Failed examples"));

    let summary = String::from_utf8_lossy(&strip_ansi_escapes::strip(summary)).into_owned();
    assert_eq!(
        summary,
        "\n\n\n\n\nNyan Cat flew for 0.01 seconds\n3 examples, 0 failures\n"
    );

    let reporter = driver.reporter();
    assert_eq!(reporter.phase(), RunPhase::SummaryDone);
    assert_eq!(reporter.run_state().current_index, 3);
}

#[tokio::test]
#[allow(clippy::needless_return)]
async fn test_some_fail() {
    let (driver, stdout_mock) = drive(40, EventFormat::Auto, SOME_FAIL).await;
    let output = stdout_mock.get_copy_of_buffer_as_string();

    assert!(driver.any_failed());
    assert_eq!(output.matches(FRAME_REDRAW).count(), 3);
    // Captured test output is not echoed.
    assert!(!output.contains("panicked"));

    let (frames, summary) = output.rsplit_once(FRAME_REDRAW).unwrap();
    assert!(frames.contains(NYAN_CAT_FACE_CONCERNED));
    assert!(frames.contains("\x1b[31m*\x1b[0m"));

    assert!(summary.contains("\x1b[31m3 examples, 1 failure, 1 pending\x1b[0m\n"));
    let summary = String::from_utf8_lossy(&strip_ansi_escapes::strip(summary)).into_owned();
    assert_eq!(
        summary,
        "\n\n\n\n\nNyan Cat flew for 1.23 seconds\n\
         3 examples, 1 failure, 1 pending\n\
         \n\
         Failed examples:\n\
         \n\
         cargo test -p my_crate -- --exact tests::b # tests::b\n"
    );

    let run_state = driver.reporter().run_state();
    assert_eq!(run_state.failure_count, 1);
    assert_eq!(run_state.pending_count, 1);
}

#[tokio::test]
#[allow(clippy::needless_return)]
async fn test_one_summary_per_suite() {
    let input = format!("{ALL_PASS}\nrunning 0 tests\n\n{SOME_FAIL}");
    let (driver, stdout_mock) = drive(40, EventFormat::Pretty, &input).await;
    let output = stdout_mock.get_copy_of_buffer_as_string_strip_ansi();

    assert_eq!(output.matches("Nyan Cat flew for").count(), 2);
    assert!(output.contains("3 examples, 0 failures\n"));
    assert!(output.contains("3 examples, 1 failure, 1 pending\n"));
    assert!(driver.any_failed());
}

#[tokio::test]
#[allow(clippy::needless_return)]
async fn test_narrow_terminal_draws_no_trail() {
    let (driver, stdout_mock) = drive(10, EventFormat::Pretty, ALL_PASS).await;
    let output = stdout_mock.get_copy_of_buffer_as_string();

    assert_eq!(driver.reporter().window().window_width(), 0);
    assert_eq!(output.matches(FRAME_REDRAW).count(), 3);
    // The title runs straight into the face.
    assert!(output.contains("  3/3:╰ ┃ . ᐧ（｡ᐢ‿‿ᐢ｡）"));
}

#[tokio::test]
#[allow(clippy::needless_return)]
async fn test_json_stream() {
    let input = r#"
{ "type": "suite", "event": "started", "test_count": 2 }
{ "type": "test", "event": "started", "name": "tests::a" }
{ "type": "test", "name": "tests::a", "event": "ok" }
{ "type": "test", "event": "started", "name": "tests::b" }
{ "type": "test", "name": "tests::b", "event": "ok" }
{ "type": "suite", "event": "ok", "passed": 2, "failed": 0, "ignored": 0, "measured": 0, "filtered_out": 0, "exec_time": 2.5 }
"#;
    let (driver, stdout_mock) = drive(80, EventFormat::Json, input).await;
    let output = stdout_mock.get_copy_of_buffer_as_string_strip_ansi();

    assert!(!driver.any_failed());
    assert!(output.contains("Nyan Cat flew for 2.5 seconds\n2 examples, 0 failures\n"));
}
