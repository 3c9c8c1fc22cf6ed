use crate::{Client, CommandError, CommandResult};

use clap::Args;
use log::info;
use reqwest::Method;
use serde::Serialize;

/// Hooks are always registered against the local development host
pub const FORWARD_HOST: &str = gh_config::LOCALHOST;

const HOOK_NAME: &str = "dev";
const CONTENT_TYPE: &str = "json";
const INSECURE_SSL: &str = "0";

#[derive(Args, Debug)]
pub struct ForwardArgs {
    /// The repository name with owner: user/repo
    #[arg(short = 'r', long)]
    pub repo: Option<String>,

    /// Port number
    #[arg(short = 'P', long, default_value_t = 0, allow_negative_numbers = true)]
    pub port: i32,

    /// The list of events
    #[arg(short = 'E', long, value_delimiter = ',')]
    pub events: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardOpts {
    pub repo: String,
    pub port: i32,
    pub events: Vec<String>,
}

impl ForwardArgs {
    pub fn into_opts(self) -> CommandResult<ForwardOpts> {
        let events = self
            .events
            .into_iter()
            .filter(|e| !e.is_empty())
            .collect::<Vec<_>>();
        if events.is_empty() {
            return Err(CommandError::validation("missing events"));
        }

        let repo = self.repo.filter(|r| !r.is_empty());
        let Some(repo) = repo else {
            return Err(CommandError::validation("missing repo"));
        };

        if self.port <= 0 {
            return Err(CommandError::validation("missing or invalid port"));
        }

        Ok(ForwardOpts {
            repo,
            port: self.port,
            events,
        })
    }
}

#[derive(Debug, Serialize)]
struct HookConfig<'a> {
    url: &'a str,
    content_type: &'a str,
    insecure_ssl: &'a str,
}

#[derive(Debug, Serialize)]
struct HookBody<'a> {
    name: &'a str,
    active: bool,
    events: &'a [String],
    config: HookConfig<'a>,
}

/// Register a development hook on the repository.
///
/// The port is validated but not yet part of the hook; the delivery URL is
/// left empty for the local forwarder to fill in.
pub async fn run_forward(client: &Client, opts: &ForwardOpts) -> CommandResult<()> {
    let body = HookBody {
        name: HOOK_NAME,
        active: true,
        events: &opts.events,
        config: HookConfig {
            url: "",
            content_type: CONTENT_TYPE,
            insecure_ssl: INSECURE_SSL,
        },
    };

    let path = format!("repos/{}/hooks", opts.repo);
    client
        .rest(Method::POST, &path, Some(&body))
        .await
        .map_err(|source| CommandError::Hook { source })?;

    info!(
        "created hook on {} for {} event(s), port {}",
        opts.repo,
        opts.events.len(),
        opts.port
    );
    Ok(())
}
