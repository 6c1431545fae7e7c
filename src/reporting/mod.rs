//! Reporting
//!
//! This module handles the structured log output of the application.

pub mod logging;

// Re-export commonly used items
pub use logging::init_logger;
