//! Logger initialization.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting: plain text with a local
/// clock time and colored level tag, or one JSON object per line.
///
/// `RUST_LOG` is read first and the provided `level` overrides it, so
/// `RUST_LOG=reqwest=debug` still works for digging into HTTP traffic while
/// `--log-level` controls this crate's own output.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show each run status poll
/// gmaps_apify --search coffee --city erie --max_results 5 --log-level debug
///
/// # Machine-readable logs
/// gmaps_apify --search coffee --city erie --max_results 5 --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("gmaps_apify", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let tag = match level {
                    log::Level::Error => level.as_str().red().bold(),
                    log::Level::Warn => level.as_str().yellow(),
                    log::Level::Info => level.as_str().green(),
                    log::Level::Debug => level.as_str().blue(),
                    log::Level::Trace => level.as_str().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
                    tag,
                    record.args()
                )
            });
        }
    }

    builder.try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // env_logger installs once per process; later calls must fail cleanly
    // rather than panic, whichever test gets there first.

    #[test]
    fn test_init_logger_plain_does_not_panic() {
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
    }

    #[test]
    fn test_init_logger_json_does_not_panic() {
        let _ = init_logger_with(LevelFilter::Debug, LogFormat::Json);
    }

    #[test]
    fn test_second_init_reports_error() {
        let _ = init_logger_with(LevelFilter::Warn, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Warn, LogFormat::Plain);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}
