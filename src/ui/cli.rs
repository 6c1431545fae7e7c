// Command-line interface definitions and parsing for check-urls

use crate::config::Config;
use crate::core::constants::timeouts;
use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  check-urls https://google.com https://github.com
  check-urls --timeout 10 --verbose https://api.example.com";

#[derive(Parser, Debug)]
#[command(
    name = "check-urls",
    author,
    version,
    about = "Check HTTP status of multiple URLs",
    long_about = None,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// URLs to check, in order
    pub urls: Vec<String>,

    /// Request timeout in seconds (default: 5)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        default_value_t = timeouts::DEFAULT_TIMEOUT_SECONDS,
        value_parser = clap::value_parser!(u64).range(timeouts::MIN_TIMEOUT_SECONDS..)
    )]
    pub timeout: u64,

    /// Enable verbose (DEBUG) logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Convert parsed arguments into the run configuration
pub fn cli_to_config(cli: &Cli) -> Config {
    Config {
        timeout: cli.timeout,
        verbose: cli.verbose,
    }
}
