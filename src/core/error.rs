use std::fmt;

/// Errors that can stop the checker before any URL is attempted
#[derive(Debug)]
pub enum UrlCheckerError {
    /// HTTP client could not be built (TLS backend, invalid settings)
    Http(reqwest::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for UrlCheckerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlCheckerError::Http(err) => write!(f, "HTTP client error: {err}"),
            UrlCheckerError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for UrlCheckerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlCheckerError::Http(err) => Some(err),
            UrlCheckerError::InvalidArgument(_) => None,
        }
    }
}

impl From<reqwest::Error> for UrlCheckerError {
    fn from(err: reqwest::Error) -> Self {
        UrlCheckerError::Http(err)
    }
}

/// Type alias for Results using UrlCheckerError
pub type Result<T> = std::result::Result<T, UrlCheckerError>;

/// Render an error and all of its sources as `outer: inner: root`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}
