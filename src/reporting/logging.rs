use log::{Level, LevelFilter, debug};
use std::io::Write;

use crate::core::constants::logging::{LOGGER_NAME, TIMESTAMP_FORMAT};

/// Level threshold for the given verbosity
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Name printed for a level, `WARNING` rather than `WARN`
pub fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// Format one log line as `<timestamp> - url_checker - <LEVEL> - <message>`
pub fn format_log_line(timestamp: &str, level: Level, message: &str) -> String {
    format!(
        "{timestamp} - {LOGGER_NAME} - {} - {message}",
        level_name(level)
    )
}

/// Initialize the logger with appropriate level based on verbosity.
///
/// Records go to stdout; only this crate's records are shown. Calling this
/// more than once keeps the first configuration.
pub fn init_logger(verbose: bool) {
    let level = level_for(verbose);

    let initialized = env_logger::Builder::new()
        .filter_level(LevelFilter::Off)
        .filter_module(env!("CARGO_CRATE_NAME"), level)
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
            writeln!(
                buf,
                "{}",
                format_log_line(&timestamp, record.level(), &record.args().to_string())
            )
        })
        .try_init()
        .is_ok();

    if initialized {
        debug!("Logger initialized with level: {level:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(true), LevelFilter::Debug);
        assert_eq!(level_for(false), LevelFilter::Info);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(level_name(Level::Error), "ERROR");
        assert_eq!(level_name(Level::Warn), "WARNING");
        assert_eq!(level_name(Level::Info), "INFO");
        assert_eq!(level_name(Level::Debug), "DEBUG");
    }

    #[test]
    fn test_format_log_line() {
        assert_eq!(
            format_log_line("2024-01-02 03:04:05", Level::Info, "Checking 2 URLs with timeout=5s"),
            "2024-01-02 03:04:05 - url_checker - INFO - Checking 2 URLs with timeout=5s"
        );
        assert_eq!(
            format_log_line("2024-01-02 03:04:05", Level::Warn, "Timeout checking http://x"),
            "2024-01-02 03:04:05 - url_checker - WARNING - Timeout checking http://x"
        );
    }

    #[test]
    fn test_logger_initialization_twice() {
        // Logger can only be installed once per process; the second call is a no-op
        init_logger(true);
        init_logger(false);
    }
}
