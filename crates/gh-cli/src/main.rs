//! gh - project board and webhook commands
//!
//! # Examples
//!
//! ```bash
//! # Archive an item in monalisa's project 1
//! gh project item-archive 1 --user monalisa --id <item-id>
//!
//! # Copy a project into an organization
//! gh project copy 1 --source-user monalisa --target-org github --title "a new project"
//!
//! # Register a development webhook
//! gh webhooks forward --repo monalisa/smile --events issues --port 9999
//! ```

use gh_cli::{Cli, logger};
use gh_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::load();

    if let Ok(ref config) = config {
        if let Err(e) = logger::initialize(&config.logging) {
            eprintln!("{e}");
        }
    }

    match gh_cli::run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
