use clap::{CommandFactory, Parser};
use url_checker::core::constants::exit_codes;
use url_checker::reporting::logging;
use url_checker::ui::{Cli, Palette, TableFormatter, cli_to_config};
use url_checker::{CheckResult, CheckUrls, HttpChecker};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    match run_check_urls_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(exit_codes::FAILURE);
        }
    }
}

/// Main URL checking logic extracted from main() for testing
pub async fn run_check_urls_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = cli_to_config(cli);
    config.validate()?;

    logging::init_logger(config.verbose);

    // No URLs is not an error: show usage and succeed
    if cli.urls.is_empty() {
        Cli::command().print_help()?;
        return Ok(exit_codes::SUCCESS);
    }

    let checker = HttpChecker::new(config.timeout_duration())?;
    let results = checker.check_all(&cli.urls).await;

    TableFormatter::new(Palette::detect()).print_results(&results);

    Ok(determine_exit_code(&results))
}

/// 0 when every result is a 2xx response, 1 otherwise
pub fn determine_exit_code(results: &[CheckResult]) -> i32 {
    if results.iter().any(CheckResult::is_failure) {
        exit_codes::FAILURE
    } else {
        exit_codes::SUCCESS
    }
}
