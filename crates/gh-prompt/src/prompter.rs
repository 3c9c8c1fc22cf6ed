use crate::{
    ConfirmOpts, HOSTNAME_MESSAGE, MultiSelectOpts, PromptOpts, PromptResult, SelectOpts,
    validators,
};

/// Blocking interactive prompts.
///
/// Each call is independent and returns the accepted answer unmodified, or
/// an error when the underlying input mechanism fails or is interrupted.
pub trait Prompter {
    /// Returns the index of the chosen option
    fn select(&self, opts: SelectOpts) -> PromptResult<usize>;

    /// Returns the indices of the chosen options in ascending order
    fn multi_select(&self, opts: MultiSelectOpts) -> PromptResult<Vec<usize>>;

    fn input(&self, opts: PromptOpts) -> PromptResult<String>;

    /// Like [`Prompter::input`] but the answer is not echoed
    fn password(&self, opts: PromptOpts) -> PromptResult<String>;

    fn confirm(&self, opts: ConfirmOpts) -> PromptResult<bool>;

    /// Ask for an enterprise hostname
    fn input_hostname(&self) -> PromptResult<String> {
        self.input(PromptOpts::new(HOSTNAME_MESSAGE).with_validator(validators::hostname))
    }
}
