// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{TracingConfig, rolling_file_appender_impl};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Global default subscriber, which once set, can't be unset or changed.
///
/// Logging is **DISABLED** by **default**. If you don't call this function w/ a value
/// other than [`LevelFilter::OFF`], then logging won't be enabled, and the
/// [`tracing::debug!`], [`tracing::warn!`], etc. macros used throughout this crate are
/// no-ops.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been set.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(());
    }

    let layer = try_create_file_layer(&it)?;
    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .into_diagnostic()
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    tracing_config: &TracingConfig,
) -> miette::Result<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let file = rolling_file_appender_impl::try_create(&tracing_config.log_file_path)?;
    Ok(Box::new(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file)
            .with_filter(tracing_config.get_level_filter()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_off_is_a_no_op() {
        let path = std::env::temp_dir().join("r3bl_nyan_cat_off_test.txt");
        std::fs::remove_file(&path).ok();

        let config = TracingConfig::new_file(Some(path.clone()), LevelFilter::OFF);
        assert!(!config.is_enabled());
        assert!(try_initialize_logging_global(config).is_ok());
        assert!(!path.exists());
    }

    #[test]
    fn test_try_create_file_layer() {
        let path = std::env::temp_dir().join("r3bl_nyan_cat_layer_test.txt");
        let config = TracingConfig::new_file(Some(path.clone()), LevelFilter::DEBUG);
        let layer: Box<DynLayer<tracing_subscriber::Registry>> =
            try_create_file_layer(&config).unwrap();
        drop(layer);
        assert!(path.exists());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_level_filter_uses_default_file() {
        let config = TracingConfig::from(LevelFilter::DEBUG);
        assert_eq!(config.log_file_path.to_str(), Some(crate::DEFAULT_LOG_FILE_NAME));
        assert!(config.is_enabled());
    }
}
