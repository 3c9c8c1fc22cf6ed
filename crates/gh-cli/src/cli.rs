use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gh")]
#[command(about = "Work with project boards and webhooks from the command line")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}
