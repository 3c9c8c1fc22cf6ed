pub(crate) mod client;
pub(crate) mod error;

pub use client::{Client, NoVariables};
pub use error::{ClientError, Result as CliClientResult};
