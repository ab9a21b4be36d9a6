//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.
//! Logs always go to stderr so they never mix with a document written to stdout.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter};

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable first; the
/// provided `level` overrides it.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Override RUST_LOG with the CLI flag
/// RUST_LOG=debug kml_export --db monitor.db --label-column ssid --log-level info
///
/// # Machine-readable logs
/// kml_export --db monitor.db --label-column ssid --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.target(env_logger::Target::Stderr);
    builder.filter_level(level);
    builder.filter_module("sqlx", LevelFilter::Warn);
    builder.filter_module("kml_export", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    json_line(
                        chrono::Utc::now().timestamp_millis(),
                        record.level(),
                        record.target(),
                        &record.args().to_string(),
                    )
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    plain_line(record.level(), record.target(), &record.args().to_string())
                )
            });
        }
    }

    // try_init() so a second initialization (e.g. in tests) reports instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

fn colored_level(level: Level) -> ColoredString {
    let text = level.to_string();
    match level {
        Level::Error => text.red(),
        Level::Warn => text.yellow(),
        Level::Info => text.green(),
        Level::Debug => text.blue(),
        Level::Trace => text.purple(),
    }
}

fn plain_line(level: Level, target: &str, message: &str) -> String {
    format!("{} [{}] {}", target.cyan(), colored_level(level), message)
}

fn json_line(ts_millis: i64, level: Level, target: &str, message: &str) -> String {
    format!(
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        ts_millis,
        level,
        target,
        serde_json::to_string(message).unwrap_or_else(|_| "\"\"".into())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_is_valid_json() {
        let line = json_line(
            1704067200000,
            Level::Info,
            "kml_export::export",
            "wrote \"monitor.kml\"\nnext",
        );
        let value: serde_json::Value = serde_json::from_str(&line).expect("line is JSON");
        assert_eq!(value["ts"], 1704067200000i64);
        assert_eq!(value["level"], "INFO");
        assert_eq!(value["target"], "kml_export::export");
        assert_eq!(value["msg"], "wrote \"monitor.kml\"\nnext");
    }

    #[test]
    fn test_plain_line_contains_parts() {
        colored::control::set_override(false);
        let line = plain_line(Level::Warn, "kml_export", "skipped 3 rows");
        assert_eq!(line, "kml_export [WARN] skipped 3 rows");
    }

    #[test]
    fn test_init_logger_twice_reports_error() {
        // env_logger can only be installed once per process; whichever call
        // comes second must fail without panicking
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}
