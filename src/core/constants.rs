/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal strings and numbers shared by the
/// checker, the table formatter and the logger.
/// Sentinel status strings for checks that never received a response
pub mod sentinels {
    /// The request did not complete within the configured timeout
    pub const TIMEOUT: &str = "TIMEOUT";
    /// DNS, TCP or TLS failure while establishing the connection
    pub const CONNECTION_ERROR: &str = "CONNECTION_ERROR";
    /// Prefix for recognised HTTP client failures
    pub const REQUEST_ERROR_PREFIX: &str = "REQUEST_ERROR";
    /// Prefix for anything the checker could not classify
    pub const ERROR_PREFIX: &str = "ERROR";
    /// Reason phrase used when a status code has no canonical one
    pub const UNKNOWN_REASON: &str = "Unknown";
}

/// HTTP status code constants
pub mod http_status {
    /// Lowest status code counted as a success
    pub const SUCCESS_MIN: u16 = 200;
    /// First status code past the success range
    pub const SUCCESS_END: u16 = 300;
}

/// Timeout and request constants
pub mod timeouts {
    /// Default per-request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
    /// Minimum timeout in seconds
    pub const MIN_TIMEOUT_SECONDS: u64 = 1;
    /// Maximum number of redirects followed per request
    pub const MAX_REDIRECTS: usize = 10;
}

/// Table layout constants
pub mod table {
    /// Header of the URL column, also the minimum column width
    pub const URL_HEADER: &str = "URL";
    /// Header of the status column
    pub const STATUS_HEADER: &str = "Status";
    /// Column separator
    pub const COLUMN_SEPARATOR: &str = " | ";
    /// Fixed width reserved for the status column in the separator line
    pub const STATUS_COLUMN_BUDGET: usize = 20;
    /// Character repeated to draw the separator line
    pub const RULE_CHAR: char = '=';
    /// Output for an empty result list
    pub const EMPTY_MESSAGE: &str = "No URLs to check.";
}

/// Logging constants
pub mod logging {
    /// Name printed in every log line
    pub const LOGGER_NAME: &str = "url_checker";
    /// strftime pattern for log timestamps
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Exit code constants
pub mod exit_codes {
    /// Every URL succeeded, or no URL was given
    pub const SUCCESS: i32 = 0;
    /// At least one URL failed
    pub const FAILURE: i32 = 1;
}
