//! Configuration management
//!
//! This module holds the settings a batch run needs, built from the
//! command-line arguments.

use std::time::Duration;

use crate::core::constants::timeouts;
use crate::core::error::{Result, UrlCheckerError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Timeout in seconds for each HTTP request
    pub timeout: u64,

    /// Enable verbose (DEBUG) logging
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: timeouts::DEFAULT_TIMEOUT_SECONDS,
            verbose: false,
        }
    }
}

impl Config {
    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.timeout < timeouts::MIN_TIMEOUT_SECONDS {
            return Err(UrlCheckerError::InvalidArgument(
                "Timeout cannot be 0. Expected a positive integer representing seconds."
                    .to_string(),
            ));
        }
        Ok(())
    }
}
