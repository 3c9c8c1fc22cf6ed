//! gh-cli library
//!
//! Command tree, API client and command runners for the `gh` binary. The
//! runners are exported so they can be driven against a mock server.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod cmdutil;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;
pub mod output;
pub mod project;
pub mod queries;
pub mod webhooks;


pub use app::run;
pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError, NoVariables};
pub use cmdutil::{CommandContext, OutputFormat, mutually_exclusive, parse_project_number};
pub use commands::Commands;
pub use error::{CommandError, Result as CommandResult};
