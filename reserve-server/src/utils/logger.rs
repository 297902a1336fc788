//! Logging Infrastructure
//!
//! Structured logging via `tracing-subscriber`. `RUST_LOG` wins over the
//! configured level; JSON output and daily-rolling files are optional.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional JSON format and file output
///
/// Returns the appender guard when logging to a file; keep it alive for the
/// lifetime of the process or buffered lines are lost.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: bool,
    log_dir: Option<&str>,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("reserve_server={level},tower_http={level},sqlx=warn")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let writer = log_dir.and_then(|dir| {
        let path = Path::new(dir);
        if let Err(e) = std::fs::create_dir_all(path) {
            eprintln!("Failed to create log dir {}: {}", dir, e);
            return None;
        }
        let appender = tracing_appender::rolling::daily(path, "reserve-server");
        Some(tracing_appender::non_blocking(appender))
    });

    let result = match (writer, json) {
        (Some((writer, guard)), true) => builder
            .json()
            .with_writer(writer)
            .try_init()
            .map(|_| Some(guard)),
        (Some((writer, guard)), false) => builder
            .with_ansi(false)
            .with_writer(writer)
            .try_init()
            .map(|_| Some(guard)),
        (None, true) => builder.json().try_init().map(|_| None),
        (None, false) => builder.try_init().map(|_| None),
    };

    result.unwrap_or_else(|e| {
        eprintln!("Logger already initialized: {}", e);
        None
    })
}
