//! `gh webhooks` subcommands.

mod forward;

pub use forward::{FORWARD_HOST, ForwardArgs, ForwardOpts, run_forward};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum WebhooksCommands {
    /// Forward webhook events to your localhost server
    Forward(ForwardArgs),
}
