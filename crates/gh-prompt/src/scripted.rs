use crate::opts::validate;
use crate::{
    ConfirmOpts, MultiSelectOpts, PromptError, PromptOpts, PromptResult, Prompter, SelectOpts,
};

use std::cell::RefCell;
use std::collections::VecDeque;

/// One queued reply for [`ScriptedPrompter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    Select(usize),
    MultiSelect(Vec<usize>),
    Input(String),
    Password(String),
    Confirm(bool),
    /// Simulate the input mechanism failing
    Fail(String),
}

/// Test double that replays queued answers in order.
///
/// Every prompt consumes one answer. Running out of answers, a kind mismatch
/// or an out-of-range index is reported like a broken input stream; a
/// validator rejection is reported as [`PromptError::Invalid`].
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<ScriptedAnswer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<I: IntoIterator<Item = ScriptedAnswer>>(answers: I) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Messages of every prompt shown so far
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, message: &str) -> PromptResult<ScriptedAnswer> {
        self.asked.borrow_mut().push(message.to_string());
        match self.answers.borrow_mut().pop_front() {
            Some(ScriptedAnswer::Fail(reason)) => Err(PromptError::from_io(std::io::Error::other(
                reason,
            ))),
            Some(answer) => Ok(answer),
            None => Err(PromptError::script(format!(
                "no scripted answer for \"{message}\""
            ))),
        }
    }

    fn mismatch(message: &str, expected: &str, got: &ScriptedAnswer) -> PromptError {
        PromptError::script(format!(
            "expected {expected} answer for \"{message}\", got {got:?}"
        ))
    }

    fn option_at(options: &[String], index: usize) -> PromptResult<&str> {
        options.get(index).map(String::as_str).ok_or_else(|| {
            PromptError::script(format!(
                "option {index} out of range ({} options)",
                options.len()
            ))
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, opts: SelectOpts) -> PromptResult<usize> {
        match self.next(&opts.message)? {
            ScriptedAnswer::Select(index) => {
                let option = Self::option_at(&opts.options, index)?;
                validate(&opts.validators, option).map_err(PromptError::invalid)?;
                Ok(index)
            }
            other => Err(Self::mismatch(&opts.message, "select", &other)),
        }
    }

    fn multi_select(&self, opts: MultiSelectOpts) -> PromptResult<Vec<usize>> {
        match self.next(&opts.message)? {
            ScriptedAnswer::MultiSelect(mut indices) => {
                for &index in &indices {
                    let option = Self::option_at(&opts.options, index)?;
                    validate(&opts.validators, option).map_err(PromptError::invalid)?;
                }
                indices.sort_unstable();
                indices.dedup();
                Ok(indices)
            }
            other => Err(Self::mismatch(&opts.message, "multi-select", &other)),
        }
    }

    fn input(&self, opts: PromptOpts) -> PromptResult<String> {
        match self.next(&opts.message)? {
            ScriptedAnswer::Input(answer) => {
                let answer = match (answer.is_empty(), opts.default) {
                    (true, Some(default)) => default,
                    _ => answer,
                };
                validate(&opts.validators, &answer).map_err(PromptError::invalid)?;
                Ok(answer)
            }
            other => Err(Self::mismatch(&opts.message, "input", &other)),
        }
    }

    fn password(&self, opts: PromptOpts) -> PromptResult<String> {
        match self.next(&opts.message)? {
            ScriptedAnswer::Password(answer) => {
                validate(&opts.validators, &answer).map_err(PromptError::invalid)?;
                Ok(answer)
            }
            other => Err(Self::mismatch(&opts.message, "password", &other)),
        }
    }

    fn confirm(&self, opts: ConfirmOpts) -> PromptResult<bool> {
        match self.next(&opts.message)? {
            ScriptedAnswer::Confirm(confirmed) => {
                validate(&opts.validators, if confirmed { "y" } else { "n" })
                    .map_err(PromptError::invalid)?;
                Ok(confirmed)
            }
            other => Err(Self::mismatch(&opts.message, "confirm", &other)),
        }
    }
}
