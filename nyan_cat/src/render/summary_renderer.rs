// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{Rainbow, SgrCode, paint};

/// Blank lines printed before the trailer, to clear the four line frame (plus one).
pub const SUMMARY_LEADING_NEWLINES: &str = "\n\n\n\n\n";

/// Seconds with 2 decimals (5 when under one second), without trailing zeros.
///
/// | duration | output    |
/// | :------- | :-------- |
/// | 1.234s   | `1.23`    |
/// | 10s      | `10`      |
/// | 0.0125s  | `0.0125`  |
/// | 0s       | `0`       |
#[must_use]
pub fn format_seconds(duration: Duration) -> String {
    let seconds = duration.as_secs_f64();
    let precision = if seconds < 1.0 { 5 } else { 2 };
    let formatted = format!("{seconds:.precision$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Green when everything passed, red when anything failed, otherwise (pending only)
/// yellow.
#[must_use]
pub fn summary_color(failure_count: usize, pending_count: usize) -> SgrCode {
    if failure_count > 0 {
        SgrCode::ForegroundRed
    } else if pending_count > 0 {
        SgrCode::ForegroundYellow
    } else {
        SgrCode::ForegroundGreen
    }
}

/// The post run trailer: "Nyan Cat flew for N seconds" painted one character at a time
/// (continuing from wherever the trail left the palette cursor), then the counts line
/// painted as a whole.
pub fn render_summary(
    duration: Duration,
    summary_line: &str,
    failure_count: usize,
    pending_count: usize,
    rainbow: &mut Rainbow,
) -> String {
    let trailer = format!(
        "{SUMMARY_LEADING_NEWLINES}Nyan Cat flew for {} seconds",
        format_seconds(duration)
    );

    let mut acc = String::new();
    rainbow.rainbowify(&trailer, &mut acc);
    acc.push('\n');

    paint(&mut acc, summary_color(failure_count, pending_count), summary_line);
    acc.push('\n');

    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PaletteCursor;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(1_234, "1.23")]
    #[test_case(10_000, "10")]
    #[test_case(1_500, "1.5")]
    #[test_case(12, "0.012")]
    #[test_case(0, "0")]
    #[test_case(999, "0.999")]
    fn test_format_seconds(millis: u64, expected: &str) {
        assert_eq!(format_seconds(Duration::from_millis(millis)), expected);
    }

    #[test_case(0, 0, SgrCode::ForegroundGreen)]
    #[test_case(1, 0, SgrCode::ForegroundRed)]
    #[test_case(1, 1, SgrCode::ForegroundRed)]
    #[test_case(0, 3, SgrCode::ForegroundYellow)]
    fn test_summary_color(failure_count: usize, pending_count: usize, expected: SgrCode) {
        assert_eq!(summary_color(failure_count, pending_count), expected);
    }

    #[test]
    fn test_render_summary() {
        let mut rainbow = Rainbow::new();
        let output = render_summary(
            Duration::from_secs_f64(1.234),
            "2 examples, 0 failures",
            0,
            0,
            &mut rainbow,
        );

        let stripped =
            String::from_utf8_lossy(&strip_ansi_escapes::strip(&output)).into_owned();
        assert_eq!(
            stripped,
            "\n\n\n\n\nNyan Cat flew for 1.23 seconds\n2 examples, 0 failures\n"
        );
        assert!(output.ends_with("\x1b[32m2 examples, 0 failures\x1b[0m\n"));

        // Every character of the trailer took one color.
        let trailer_len = "\n\n\n\n\nNyan Cat flew for 1.23 seconds".chars().count();
        assert_eq!(rainbow.cursor(), PaletteCursor(trailer_len));
    }

    #[test]
    fn test_render_summary_continues_the_cursor() {
        let mut rainbow = Rainbow::new();
        let mut acc = String::new();
        rainbow.rainbowify("¯¯·.", &mut acc);
        assert_eq!(rainbow.cursor(), PaletteCursor(4));

        let output = render_summary(Duration::ZERO, "1 example, 1 failure", 1, 0, &mut rainbow);
        let first_color = rainbow.palette().get(PaletteCursor(4));
        assert!(output.starts_with(&SgrCode::ForegroundAnsi256(first_color).to_string()));
        assert!(output.ends_with("\x1b[31m1 example, 1 failure\x1b[0m\n"));
        assert!(*rainbow.cursor() > 4);
    }
}
