use crate::{project::ProjectCommands, webhooks::WebhooksCommands};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with projects
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Work with webhooks
    Webhooks {
        #[command(subcommand)]
        action: WebhooksCommands,
    },
}
