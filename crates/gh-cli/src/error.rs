use crate::ClientError;

use gh_config::ConfigError;
use gh_prompt::PromptError;

use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors surfaced by a command run
#[derive(Error, Debug)]
pub enum CommandError {
    /// Flag combinations and flag values rejected before any request
    #[error("{message}")]
    Flag {
        message: String,
        location: ErrorLocation,
    },

    /// Local checks on otherwise well-formed flags
    #[error("{message}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error(
        "authentication required for {host}: run `gh auth login` or set the GH_TOKEN environment variable"
    )]
    Auth { host: String },

    #[error("failed to get config: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error(transparent)]
    Client {
        #[from]
        source: ClientError,
    },

    #[error(transparent)]
    Prompt {
        #[from]
        source: PromptError,
    },

    #[error("failed to create hook: {source}")]
    Hook {
        #[source]
        source: ClientError,
    },

    #[error("failed to write output: {source}")]
    Output {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to encode output: {source}")]
    Encode {
        #[from]
        source: serde_json::Error,
    },

    #[error("failed to initialize logger: {message}")]
    Logger { message: String },
}

impl CommandError {
    #[track_caller]
    pub fn flag(message: impl Into<String>) -> Self {
        CommandError::Flag {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        CommandError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn auth(host: impl Into<String>) -> Self {
        CommandError::Auth { host: host.into() }
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;
