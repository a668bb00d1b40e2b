use crate::settings::LoggingSettings;
use anyhow::{Context, Result};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Setup logging for an emitter run.
///
/// Console output is written to stderr because stdout carries the emitted
/// document. When `log_dir` is set, logs are also written there with daily
/// rotation.
///
/// # Arguments
/// * `settings` - Level, console toggle and optional log directory
///
/// # Returns
/// The file writer guard, if file logging is enabled. It must be held for the
/// duration of the program to keep file logging active.
pub fn setup_logging(settings: &LoggingSettings) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::new(settings.level());

    let (file_layer, guard) = match &settings.log_dir {
        Some(log_dir) => {
            // Create log directory if it doesn't exist
            if !log_dir.exists() {
                fs::create_dir_all(log_dir)
                    .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
            }

            let file_appender = rolling::daily(log_dir, &settings.log_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false) // No ANSI codes in log files
                .with_target(true)
                .with_file(true)
                .with_line_number(true);

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = settings.console_output.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    tracing::debug!(
        "Logging initialized: dir={:?}, prefix={}, debug={}, console={}",
        settings.log_dir,
        settings.log_prefix,
        settings.debug_mode,
        settings.console_output
    );

    Ok(guard)
}
