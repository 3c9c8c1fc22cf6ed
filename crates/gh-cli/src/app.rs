use crate::cmdutil::CommandContext;
use crate::project::{
    CopyOpts, FieldCreateOpts, ItemArchiveOpts, ProjectCommands, run_archive_item, run_copy,
    run_create_field,
};
use crate::webhooks::{FORWARD_HOST, WebhooksCommands, run_forward};
use crate::{Cli, Client, CommandError, CommandResult, Commands};

use gh_config::{ApiEndpoints, Config, ConfigErrorResult};
use gh_prompt::{Prompter, TerminalPrompter};

use std::io::{self, IsTerminal};

use log::debug;

/// Project subcommand with its flags already validated
enum ProjectRun {
    Copy(CopyOpts),
    FieldCreate(FieldCreateOpts),
    ItemArchive(ItemArchiveOpts),
}

impl TryFrom<ProjectCommands> for ProjectRun {
    type Error = CommandError;

    fn try_from(action: ProjectCommands) -> CommandResult<Self> {
        Ok(match action {
            ProjectCommands::Copy(args) => ProjectRun::Copy(args.into_opts()?),
            ProjectCommands::FieldCreate(args) => ProjectRun::FieldCreate(args.into_opts()?),
            ProjectCommands::ItemArchive(args) => ProjectRun::ItemArchive(args.into_opts()?),
        })
    }
}

/// Run a parsed command line against a loaded (or failed) configuration
pub async fn run(cli: Cli, config: ConfigErrorResult<Config>) -> CommandResult<()> {
    match cli.command {
        Commands::Project { action } => {
            let action = ProjectRun::try_from(action)?;
            let config = config?;
            config.validate()?;
            config.log_summary();

            let client = authenticated_client(&config)?;
            let prompter = can_prompt(&config).then(TerminalPrompter::stdio);
            let mut stdout = io::stdout();
            let is_tty = stdout.is_terminal();
            let mut ctx = CommandContext {
                client: &client,
                prompter: prompter.as_ref().map(|p| p as &dyn Prompter),
                out: &mut stdout,
                is_tty,
            };

            match action {
                ProjectRun::Copy(opts) => run_copy(&mut ctx, &opts).await,
                ProjectRun::FieldCreate(opts) => run_create_field(&mut ctx, &opts).await,
                ProjectRun::ItemArchive(opts) => run_archive_item(&mut ctx, &opts).await,
            }
        }

        Commands::Webhooks { action } => match action {
            WebhooksCommands::Forward(args) => {
                let config = config?;
                let opts = args.into_opts()?;
                debug!("forwarding through {FORWARD_HOST}");

                let client = forward_client(&config);
                run_forward(&client, &opts).await
            }
        },
    }
}

pub(crate) fn authenticated_client(config: &Config) -> CommandResult<Client> {
    let host = config.default_host();
    let token = config
        .host
        .token
        .as_deref()
        .ok_or_else(|| CommandError::auth(host))?;
    Ok(Client::new(config.host.endpoints(), Some(token)))
}

/// Forwarding ignores the configured host but still sends its token
pub(crate) fn forward_client(config: &Config) -> Client {
    Client::new(
        ApiEndpoints::for_host(FORWARD_HOST),
        config.host.token.as_deref(),
    )
}

/// Prompts need both an enabled config and a terminal on stdin and stderr
fn can_prompt(config: &Config) -> bool {
    config.prompt.enabled && io::stdin().is_terminal() && io::stderr().is_terminal()
}
