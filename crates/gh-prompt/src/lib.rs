//! Interactive prompts behind a small capability trait.
//!
//! Commands depend on [`Prompter`] only. Production wires a
//! [`TerminalPrompter`] over stdin/stderr; tests script answers with
//! [`ScriptedPrompter`].

mod error;
mod opts;
mod prompter;
mod scripted;
mod terminal;
pub mod validators;

#[cfg(test)]
mod tests;

pub use error::{PromptError, PromptResult};
pub use opts::{ConfirmOpts, MultiSelectOpts, PromptOpts, SelectOpts, Validator};
pub use prompter::Prompter;
pub use scripted::{ScriptedAnswer, ScriptedPrompter};
pub use terminal::TerminalPrompter;

const HOSTNAME_MESSAGE: &str = "GHE hostname:";
const HELP_TRIGGER: &str = "?";
const INVALID_REPLY_PREFIX: &str = "X Sorry, your reply was invalid:";
