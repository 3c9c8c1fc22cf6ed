use crate::opts::validate;
use crate::{
    ConfirmOpts, HELP_TRIGGER, INVALID_REPLY_PREFIX, MultiSelectOpts, PromptError, PromptOpts,
    PromptResult, Prompter, SelectOpts,
};

use std::cell::RefCell;
use std::io::{self, BufRead, BufReader, ErrorKind, IsTerminal, Stderr, Stdin, Write};

use console::{Key, Term};

/// End-of-transmission, sent by Ctrl-D on an empty line
const EOT: char = '\u{4}';

/// Line-oriented prompts over a reader/writer pair.
///
/// Answers are read one line at a time; an invalid answer prints the reason
/// and asks again. When a terminal is attached, keys are read in raw mode so
/// Ctrl-C surfaces as [`PromptError::Interrupted`] and passwords stay masked.
pub struct TerminalPrompter<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
    term: Option<Term>,
}

impl TerminalPrompter<BufReader<Stdin>, Stderr> {
    /// Prompt on stderr, read from stdin
    pub fn stdio() -> Self {
        let term = Term::stderr();
        let term = (term.is_term() && std::io::stdin().is_terminal()).then_some(term);
        Self {
            input: RefCell::new(BufReader::new(std::io::stdin())),
            output: RefCell::new(std::io::stderr()),
            term,
        }
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
            term: None,
        }
    }

    /// Consume the prompter and hand back the writer (useful to inspect output)
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    fn write(&self, text: &str) -> PromptResult<()> {
        let mut out = self.output.borrow_mut();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn write_line(&self, text: &str) -> PromptResult<()> {
        self.write(&format!("{text}\n"))
    }

    /// Read one line without its terminator. EOF is an error.
    fn read_line(&self) -> PromptResult<String> {
        match &self.term {
            Some(term) => read_term_line(term, true),
            None => self.read_buffered_line(),
        }
    }

    fn read_secret(&self) -> PromptResult<String> {
        match &self.term {
            Some(term) => read_term_line(term, false),
            None => self.read_buffered_line(),
        }
    }

    /// `BufRead::read_line` retries on `Interrupted`, so the buffer is
    /// drained by hand to let an interrupt abort the prompt.
    fn read_buffered_line(&self) -> PromptResult<String> {
        let mut input = self.input.borrow_mut();
        let mut bytes = Vec::new();
        loop {
            let available = input.fill_buf()?;
            if available.is_empty() {
                break;
            }
            match available.iter().position(|b| *b == b'\n') {
                Some(end) => {
                    bytes.extend_from_slice(&available[..=end]);
                    input.consume(end + 1);
                    break;
                }
                None => {
                    let len = available.len();
                    bytes.extend_from_slice(available);
                    input.consume(len);
                }
            }
        }
        if bytes.is_empty() {
            return Err(PromptError::eof());
        }

        let mut line = String::from_utf8(bytes)
            .map_err(|e| PromptError::from_io(io::Error::new(ErrorKind::InvalidData, e)))?;
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Print help if the answer asked for it. Returns true when handled.
    fn show_help(&self, answer: &str, help: Option<&str>) -> PromptResult<bool> {
        match help {
            Some(help) if answer == HELP_TRIGGER => {
                self.write_line(&format!("  {help}"))?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn reject(&self, reason: &str) -> PromptResult<()> {
        self.write_line(&format!("{INVALID_REPLY_PREFIX} {reason}"))
    }

    fn print_options(&self, options: &[String], marked: &[usize]) -> PromptResult<()> {
        for (i, option) in options.iter().enumerate() {
            let marker = if marked.contains(&i) { '>' } else { ' ' };
            self.write_line(&format!("{marker} {}. {option}", i + 1))?;
        }
        Ok(())
    }

    fn text_prompt(&self, opts: &PromptOpts, secret: bool) -> PromptResult<String> {
        loop {
            let header = match (&opts.default, secret) {
                (Some(default), false) => format!("? {} ({default}) ", opts.message),
                _ => format!("? {} ", opts.message),
            };
            self.write(&header)?;

            let mut answer = if secret {
                self.read_secret()?
            } else {
                self.read_line()?
            };
            if self.show_help(&answer, opts.help.as_deref())? {
                continue;
            }
            if answer.is_empty()
                && !secret
                && let Some(default) = &opts.default
            {
                answer = default.clone();
            }

            match validate(&opts.validators, &answer) {
                Ok(()) => return Ok(answer),
                Err(reason) => self.reject(&reason)?,
            }
        }
    }
}

/// Read a line key by key in raw mode. Ctrl-C arrives as an `Interrupted`
/// read error; `echo` off masks the typed characters.
fn read_term_line(term: &Term, echo: bool) -> PromptResult<String> {
    let mut line = String::new();
    loop {
        match term.read_key()? {
            Key::Enter => {
                term.write_line("")?;
                return Ok(line);
            }
            Key::Backspace => {
                if line.pop().is_some() && echo {
                    term.clear_chars(1)?;
                }
            }
            Key::Char(EOT) if line.is_empty() => return Err(PromptError::eof()),
            Key::Char(c) if !c.is_control() => {
                line.push(c);
                if echo {
                    term.write_str(c.encode_utf8(&mut [0; 4]))?;
                }
            }
            _ => {}
        }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn select(&self, opts: SelectOpts) -> PromptResult<usize> {
        if opts.options.is_empty() {
            return Err(PromptError::script(format!(
                "no options to choose from for \"{}\"",
                opts.message
            )));
        }
        let default = opts.default_index();

        loop {
            self.write_line(&format!("? {}", opts.message))?;
            self.print_options(&opts.options, &default.into_iter().collect::<Vec<_>>())?;
            self.write("  Choice: ")?;

            let answer = self.read_line()?;
            if self.show_help(&answer, opts.help.as_deref())? {
                continue;
            }

            let index = match (answer.trim(), default) {
                ("", Some(index)) => index,
                (choice, _) => match parse_selection(choice, &opts.options) {
                    Ok(index) => index,
                    Err(reason) => {
                        self.reject(&reason)?;
                        continue;
                    }
                },
            };

            match validate(&opts.validators, &opts.options[index]) {
                Ok(()) => return Ok(index),
                Err(reason) => self.reject(&reason)?,
            }
        }
    }

    fn multi_select(&self, opts: MultiSelectOpts) -> PromptResult<Vec<usize>> {
        let defaults = opts.default_indices();

        loop {
            self.write_line(&format!("? {}", opts.message))?;
            self.print_options(&opts.options, &defaults)?;
            self.write("  Choices (comma separated): ")?;

            let answer = self.read_line()?;
            if self.show_help(&answer, opts.help.as_deref())? {
                continue;
            }

            let indices = if answer.trim().is_empty() {
                defaults.clone()
            } else {
                match parse_multi_selection(&answer, &opts.options) {
                    Ok(indices) => indices,
                    Err(reason) => {
                        self.reject(&reason)?;
                        continue;
                    }
                }
            };

            let verdict = indices
                .iter()
                .try_for_each(|&i| validate(&opts.validators, &opts.options[i]));
            match verdict {
                Ok(()) => return Ok(indices),
                Err(reason) => self.reject(&reason)?,
            }
        }
    }

    fn input(&self, opts: PromptOpts) -> PromptResult<String> {
        self.text_prompt(&opts, false)
    }

    fn password(&self, opts: PromptOpts) -> PromptResult<String> {
        self.text_prompt(&opts, true)
    }

    fn confirm(&self, opts: ConfirmOpts) -> PromptResult<bool> {
        let hint = if opts.default { "(Y/n)" } else { "(y/N)" };

        loop {
            self.write(&format!("? {} {hint} ", opts.message))?;

            let answer = self.read_line()?;
            if self.show_help(&answer, opts.help.as_deref())? {
                continue;
            }

            let confirmed = match parse_confirmation(&answer) {
                Some(confirmed) => confirmed,
                None if answer.trim().is_empty() => opts.default,
                None => {
                    self.reject("answer yes or no")?;
                    continue;
                }
            };

            match validate(&opts.validators, if confirmed { "y" } else { "n" }) {
                Ok(()) => return Ok(confirmed),
                Err(reason) => self.reject(&reason)?,
            }
        }
    }
}

/// Resolve a 1-based option number or an exact option name.
pub(crate) fn parse_selection(answer: &str, options: &[String]) -> Result<usize, String> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(String::from("an answer is required"));
    }
    if let Ok(number) = answer.parse::<usize>() {
        return match number {
            n if n >= 1 && n <= options.len() => Ok(n - 1),
            n => Err(format!("{n} is not between 1 and {}", options.len())),
        };
    }
    options
        .iter()
        .position(|o| o == answer)
        .ok_or_else(|| format!("\"{answer}\" is not one of the options"))
}

/// Resolve a comma separated list of selections, deduplicated and sorted.
pub(crate) fn parse_multi_selection(
    answer: &str,
    options: &[String],
) -> Result<Vec<usize>, String> {
    let mut indices = answer
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_selection(part, options))
        .collect::<Result<Vec<_>, _>>()?;
    indices.sort_unstable();
    indices.dedup();
    Ok(indices)
}

pub(crate) fn parse_confirmation(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
