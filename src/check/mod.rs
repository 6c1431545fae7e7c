//! URL checking logic
//!
//! This module performs one HTTP GET per URL and turns every outcome,
//! including transport failures, into a `CheckResult`.

pub mod checker;

// Re-export commonly used items
pub use checker::{CheckUrls, HttpChecker, check_all, check_url, classify};
