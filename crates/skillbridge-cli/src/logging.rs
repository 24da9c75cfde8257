//! Tracing setup for the CLI.

use std::path::PathBuf;

use skillbridge_core::config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a filter directive that beats the config.
pub const LOG_ENV: &str = "SKILLBRIDGE_LOG";

/// Installs the global subscriber.
///
/// Logs go to stderr; when `logs_dir` is set they are also appended to a
/// daily rolling file there. Keep the returned guard alive until exit so the
/// file writer flushes.
pub fn init(
    config: &LoggingConfig,
    level_override: Option<&str>,
    logs_dir: Option<PathBuf>,
) -> Option<WorkerGuard> {
    let default_level = level_override.unwrap_or(&config.level);
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let (file_layer, guard) = match logs_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "skillbridge.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}
