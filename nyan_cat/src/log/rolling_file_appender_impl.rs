// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use miette::IntoDiagnostic;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Writes are synchronous. The file is never rotated, so it is created (or appended to)
/// at exactly `path`.
///
/// # Errors
///
/// Returns an error if `path` has no file name, or the file can't be opened.
pub fn try_create(path: &Path) -> miette::Result<RollingFileAppender> {
    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    // "nyan_cat_log.txt" has an empty parent.
    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
}
