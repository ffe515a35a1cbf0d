//! my_python_project - My Python Project
//!
//! Command-line entry point: resolves settings, parses arguments,
//! sets up logging and runs a single command.

use clap::Parser;
use std::io;
use tracing::debug;

use my_python_project::cli::Cli;
use my_python_project::config::Settings;
use my_python_project::utils::init_logging;

fn main() {
    // Settings are resolved before anything else so that a bad environment
    // value stops the process before any command runs
    let settings = match Settings::resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    };

    // Parse command-line arguments
    let cli = Cli::parse();

    init_logging(&settings, cli.debug);
    debug!(
        log_level = %settings.log_level,
        json_logs = settings.json_logs,
        include_timestamp = settings.include_timestamp,
        "Settings resolved"
    );

    // Execute the command
    let code = cli.execute(&settings, &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
