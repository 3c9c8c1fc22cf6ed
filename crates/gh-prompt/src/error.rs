use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// Errors surfaced by a [`crate::Prompter`]
#[derive(ThisError, Debug)]
pub enum PromptError {
    #[error("could not prompt: {source} {location}")]
    Io {
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("could not prompt: interrupt {location}")]
    Interrupted { location: ErrorLocation },

    #[error("could not prompt: {message} {location}")]
    Script {
        message: String,
        location: ErrorLocation,
    },

    #[error("invalid answer: {message} {location}")]
    Invalid {
        message: String,
        location: ErrorLocation,
    },
}

impl PromptError {
    /// Wrap an I/O failure of the input mechanism
    #[track_caller]
    pub fn from_io(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::Interrupted {
            return PromptError::Interrupted {
                location: ErrorLocation::from(Location::caller()),
            };
        }
        PromptError::Io {
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// End of input before an answer was read
    #[track_caller]
    pub fn eof() -> Self {
        PromptError::from_io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "EOF",
        ))
    }

    #[track_caller]
    pub fn script<S: Into<String>>(message: S) -> Self {
        PromptError::Script {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        PromptError::Invalid {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for PromptError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        PromptError::from_io(err)
    }
}

pub type PromptResult<T> = StdResult<T, PromptError>;
