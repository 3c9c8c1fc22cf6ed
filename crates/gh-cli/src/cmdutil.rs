use crate::{Client, CommandError, CommandResult};

use gh_prompt::Prompter;

use std::io::Write;

use clap::ValueEnum;

pub const OWNER_EXCLUSIVE: &str = "only one of `--user` or `--org` may be used";
pub const SOURCE_OWNER_EXCLUSIVE: &str = "only one of `--source-user` or `--source-org` may be used";
pub const TARGET_OWNER_EXCLUSIVE: &str = "only one of `--target-user` or `--target-org` may be used";

/// Machine-readable output; table output when absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
}

/// What a command run needs from its caller
pub struct CommandContext<'a> {
    pub client: &'a Client,
    /// `None` when prompting is disabled or stdio is not a terminal
    pub prompter: Option<&'a dyn Prompter>,
    pub out: &'a mut dyn Write,
    pub is_tty: bool,
}

/// Fail with `message` when more than one of `conditions` holds
#[track_caller]
pub fn mutually_exclusive(message: &str, conditions: &[bool]) -> CommandResult<()> {
    if conditions.iter().filter(|set| **set).count() > 1 {
        return Err(CommandError::flag(message));
    }
    Ok(())
}

/// An owner flag counts as given only when non-empty
pub fn is_set(flag: &Option<String>) -> bool {
    flag.as_deref().is_some_and(|v| !v.is_empty())
}

/// Parse the optional `<number>` argument. Zero means "not given".
#[track_caller]
pub fn parse_project_number(arg: Option<&str>) -> CommandResult<Option<i32>> {
    let Some(arg) = arg else {
        return Ok(None);
    };
    let number = arg
        .parse::<i32>()
        .map_err(|_| CommandError::flag(format!("invalid number: {arg}")))?;
    Ok((number != 0).then_some(number))
}
