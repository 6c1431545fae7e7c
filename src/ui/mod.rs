//! User interface and interaction
//!
//! This module contains the CLI definition, terminal color detection
//! and the results table.

pub mod cli;
pub mod color;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use color::Palette;
pub use output::TableFormatter;
