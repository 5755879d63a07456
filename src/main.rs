//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `subcrt` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use clap::{CommandFactory, Parser};
use std::process;

use subcrt::initialization::init_logger_with;
use subcrt::{run_scan, Config, Opt, Presenter};

#[tokio::main]
async fn main() {
    // Parse command-line arguments (clap exits 2 on usage errors)
    let opt = Opt::parse();
    let config = match Config::try_from(opt) {
        Ok(config) => config,
        Err(e) => Opt::command()
            .error(clap::error::ErrorKind::ValueValidation, e)
            .exit(),
    };

    let presenter = Presenter::detect(config.color);

    if let Err(e) = init_logger_with(
        config.log_level.clone().into(),
        config.log_format.clone(),
        config.color,
    ) {
        eprintln!("{}", presenter.failure(&format!("Failed to initialize logger: {}", e)));
        process::exit(1);
    }

    if config.banner {
        eprintln!("{}", presenter.banner());
    }

    // The run summary is logged by the library
    if let Err(e) = run_scan(config).await {
        eprintln!("{}", presenter.failure(&format!("subcrt error: {:#}", e)));
        process::exit(1);
    }
}
