// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "nyan_cat_log.txt";

/// Configure the tracing logging to suit your needs. Logs are only ever written to a
/// file.
///
/// Fields:
/// - `level_filter`: [`LevelFilter::OFF`] disables logging entirely.
/// - `log_file_path`: The file to append log output to. Eg: `nyan_cat_log.txt` or
///   `/tmp/nyan_cat_log.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub log_file_path: PathBuf,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::OFF,
            log_file_path: PathBuf::from(DEFAULT_LOG_FILE_NAME),
        }
    }
}

impl TracingConfig {
    pub fn new_file(filename: Option<PathBuf>, level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            log_file_path: filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.into()),
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn is_enabled(&self) -> bool { self.level_filter != LevelFilter::OFF }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self { Self::new_file(None, level_filter) }
}
