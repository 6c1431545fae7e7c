use reqwest::StatusCode;
use std::fmt;

use crate::core::constants::{http_status, sentinels};

/// Recognised HTTP client failures that are neither timeouts nor
/// connection problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestErrorKind {
    /// The request could not be built, e.g. an invalid or unsupported URL
    Builder,
    /// Too many redirects
    Redirect,
    /// Failure while sending the request
    Request,
    /// Failure reading the response body
    Body,
}

impl RequestErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            RequestErrorKind::Builder => "Builder",
            RequestErrorKind::Redirect => "Redirect",
            RequestErrorKind::Request => "Request",
            RequestErrorKind::Body => "Body",
        }
    }
}

impl fmt::Display for RequestErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a check ended without an HTTP response.
///
/// `Display` renders the sentinel status string shown in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckFailure {
    Timeout,
    Connection,
    Request(RequestErrorKind),
    /// Opaque diagnostic name, not meant to be matched on
    Unexpected(String),
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckFailure::Timeout => f.write_str(sentinels::TIMEOUT),
            CheckFailure::Connection => f.write_str(sentinels::CONNECTION_ERROR),
            CheckFailure::Request(kind) => {
                write!(f, "{}: {kind}", sentinels::REQUEST_ERROR_PREFIX)
            }
            CheckFailure::Unexpected(name) => write!(f, "{}: {name}", sentinels::ERROR_PREFIX),
        }
    }
}

/// Outcome of checking a single URL.
///
/// A `status_code` is present exactly when a response was received, in which
/// case `status` reads `"<code> <reason>"`. The fields are private so that
/// only the two constructors can produce a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    url: String,
    status: String,
    status_code: Option<u16>,
}

impl CheckResult {
    /// Create a result for a completed HTTP exchange, whatever the status.
    pub fn from_status(url: impl Into<String>, status: StatusCode) -> Self {
        let reason = status
            .canonical_reason()
            .unwrap_or(sentinels::UNKNOWN_REASON);
        Self {
            url: url.into(),
            status: format!("{} {}", status.as_u16(), reason),
            status_code: Some(status.as_u16()),
        }
    }

    /// Create a result for a check that never got a response.
    pub fn from_failure(url: impl Into<String>, failure: &CheckFailure) -> Self {
        Self {
            url: url.into(),
            status: failure.to_string(),
            status_code: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// True only for received 2xx responses.
    pub fn is_success(&self) -> bool {
        matches!(
            self.status_code,
            Some(code) if (http_status::SUCCESS_MIN..http_status::SUCCESS_END).contains(&code)
        )
    }

    /// Transport failure or non-2xx response.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", &self.url, &self.status)
    }
}
