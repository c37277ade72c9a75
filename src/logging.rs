//! Logging setup.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use xtb_config::LoggingSettings;

/// Setup console logging plus an optional log file.
///
/// Returns the file writer guard; dropping it stops the background flusher.
pub fn setup_logging(settings: &LoggingSettings) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let (writer, guard) = match &settings.file {
        Some(path) => {
            let appender = tracing_appender::rolling::never(".", path);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    if settings.format == "json" {
        let file_layer = writer.map(|w| fmt::layer().with_ansi(false).with_writer(w));
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .with(file_layer)
            .init();
    } else {
        let file_layer = writer.map(|w| fmt::layer().with_ansi(false).with_writer(w));
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty())
            .with(file_layer)
            .init();
    }

    guard
}
