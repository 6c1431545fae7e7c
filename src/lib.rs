//! # url-checker
//!
//! Check the HTTP status of a list of URLs, one at a time, and render the
//! outcome as a color-coded table.
//!
//! ## Module Organization
//!
//! - [`core`] - Result types, errors and constants
//! - [`check`] - Per-URL HTTP checks and the sequential batch runner
//! - [`ui`] - CLI definition, color detection and table output
//! - [`reporting`] - Log output
//! - [`config`] - Run configuration
//!
//! ## Example
//!
//! ```no_run
//! use std::time::Duration;
//! use url_checker::{TableFormatter, check_all};
//!
//! # async fn run() {
//! let urls = vec!["https://example.com".to_string()];
//! let results = check_all(&urls, Duration::from_secs(5)).await;
//! println!("{}", TableFormatter::plain().render(&results));
//! # }
//! ```

pub mod check;
pub mod config;
pub mod core;
pub mod reporting;
pub mod ui;

pub use crate::check::{CheckUrls, HttpChecker, check_all, check_url};
pub use crate::config::Config;
pub use crate::core::{CheckFailure, CheckResult, RequestErrorKind, Result, UrlCheckerError};
pub use crate::ui::{Palette, TableFormatter};
