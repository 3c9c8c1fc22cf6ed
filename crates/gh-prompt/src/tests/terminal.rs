use crate::terminal::{parse_confirmation, parse_multi_selection, parse_selection};
use crate::{
    ConfirmOpts, MultiSelectOpts, PromptError, PromptOpts, Prompter, SelectOpts,
    TerminalPrompter, validators,
};

use std::io::{self, BufRead, BufReader, Cursor, ErrorKind, Read};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};

fn prompter(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
    TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Reader whose first fill reports a Ctrl-C before any input arrives
struct InterruptedOnce {
    interrupted: bool,
    rest: Cursor<Vec<u8>>,
}

impl InterruptedOnce {
    fn new(rest: &str) -> Self {
        Self {
            interrupted: false,
            rest: Cursor::new(rest.as_bytes().to_vec()),
        }
    }
}

impl Read for InterruptedOnce {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.rest.read(buf)
    }
}

impl BufRead for InterruptedOnce {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(io::Error::from(ErrorKind::Interrupted));
        }
        self.rest.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.rest.consume(amt);
    }
}

fn options() -> Vec<String> {
    vec![
        String::from("monalisa"),
        String::from("github"),
        String::from("octo-org"),
    ]
}

// =========================================================================
// Input
// =========================================================================

#[test]
fn given_interrupt_before_answer_when_input_then_interrupted() {
    let p = TerminalPrompter::new(InterruptedOnce::new("typed after ctrl-c\n"), Vec::new());

    let result = p.input(PromptOpts::new("Title?"));

    assert!(matches!(result, Err(PromptError::Interrupted { .. })));
}

#[test]
fn given_interrupt_when_password_then_interrupted() {
    let p = TerminalPrompter::new(InterruptedOnce::new("hunter2\n"), Vec::new());

    let result = p.password(PromptOpts::new("Token?"));

    assert!(matches!(result, Err(PromptError::Interrupted { .. })));
}

#[test]
fn given_answer_longer_than_buffer_when_input_then_read_whole_line() {
    let reader = BufReader::with_capacity(4, Cursor::new(b"a long answer\nnext\n".to_vec()));
    let p = TerminalPrompter::new(reader, Vec::new());

    assert_that!(p.input(PromptOpts::new("Title?")), ok(eq("a long answer")));
    assert_that!(p.input(PromptOpts::new("Body?")), ok(eq("next")));
}

#[test]
fn given_answer_when_input_then_returned_unmodified() {
    let p = prompter("  spaced answer \n");

    let result = p.input(PromptOpts::new("Title?"));

    assert_that!(result, ok(eq("  spaced answer ")));
}

#[test]
fn given_empty_answer_when_input_with_default_then_default() {
    let p = prompter("\n");

    let result = p.input(PromptOpts::new("Title?").with_default("untitled"));

    assert_that!(result, ok(eq("untitled")));
}

#[test]
fn given_closed_input_when_input_then_could_not_prompt() {
    let p = prompter("");

    let result = p.input(PromptOpts::new("Title?"));

    assert!(matches!(result, Err(PromptError::Io { .. })));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("could not prompt")
    );
}

#[test]
fn given_rejected_then_valid_answer_when_input_then_reasks() {
    let p = prompter("\nreal value\n");

    let result = p.input(PromptOpts::new("Name?").with_validator(validators::required));

    assert_that!(result, ok(eq("real value")));
    let output = String::from_utf8(p.into_output()).unwrap();
    assert_that!(output, contains_substring("a value is required"));
}

#[test]
fn given_only_rejected_answers_when_input_then_eof_error() {
    let p = prompter("\n\n");

    let result = p.input(PromptOpts::new("Name?").with_validator(validators::required));

    assert!(matches!(result, Err(PromptError::Io { .. })));
}

#[test]
fn given_help_request_when_input_then_help_printed_and_reasked() {
    let p = prompter("?\nanswer\n");

    let result = p.input(PromptOpts::new("Name?").with_help("The display name"));

    assert_that!(result, ok(eq("answer")));
    let output = String::from_utf8(p.into_output()).unwrap();
    assert_that!(output, contains_substring("The display name"));
}

#[test]
fn given_crlf_line_when_input_then_terminator_stripped() {
    let p = prompter("value\r\n");

    assert_that!(p.input(PromptOpts::new("Value?")), ok(eq("value")));
}

#[test]
fn given_url_when_input_hostname_then_reasks_until_bare_host() {
    let p = prompter("https://ghe.io\nghe.io\n");

    let result = p.input_hostname();

    assert_that!(result, ok(eq("ghe.io")));
    let output = String::from_utf8(p.into_output()).unwrap();
    assert_that!(output, contains_substring("invalid hostname"));
}

// =========================================================================
// Password
// =========================================================================

#[test]
fn given_piped_secret_when_password_then_returned() {
    let p = prompter("s3cr3t\n");

    let result = p.password(PromptOpts::new("Token:"));

    assert_that!(result, ok(eq("s3cr3t")));
}

#[test]
fn given_closed_input_when_password_then_error() {
    let p = prompter("");

    let result = p.password(PromptOpts::new("Token:"));

    assert_that!(result, err(anything()));
}

// =========================================================================
// Select / MultiSelect
// =========================================================================

#[test]
fn given_number_when_select_then_zero_based_index() {
    let p = prompter("2\n");

    let result = p.select(SelectOpts::new("Which owner?", options()));

    assert_eq!(result.unwrap(), 1);
}

#[test]
fn given_option_name_when_select_then_index() {
    let p = prompter("octo-org\n");

    let result = p.select(SelectOpts::new("Which owner?", options()));

    assert_eq!(result.unwrap(), 2);
}

#[test]
fn given_empty_answer_when_select_with_default_then_default_index() {
    let p = prompter("\n");

    let result = p.select(SelectOpts::new("Which owner?", options()).with_default("github"));

    assert_eq!(result.unwrap(), 1);
}

#[test]
fn given_out_of_range_then_valid_when_select_then_reasks() {
    let p = prompter("9\n1\n");

    let result = p.select(SelectOpts::new("Which owner?", options()));

    assert_eq!(result.unwrap(), 0);
    let output = String::from_utf8(p.into_output()).unwrap();
    assert_that!(output, contains_substring("9 is not between 1 and 3"));
}

#[test]
fn given_validator_rejecting_option_when_select_then_reasks() {
    let p = prompter("1\n3\n");

    let result = p.select(
        SelectOpts::new("Which owner?", options()).with_validator(|o| {
            if o == "monalisa" {
                Err(String::from("personal projects are read-only"))
            } else {
                Ok(())
            }
        }),
    );

    assert_eq!(result.unwrap(), 2);
}

#[test]
fn given_closed_input_when_select_then_error() {
    let p = prompter("");

    let result = p.select(SelectOpts::new("Which owner?", options()));

    assert!(matches!(result, Err(PromptError::Io { .. })));
}

#[test]
fn given_no_options_when_select_then_error() {
    let p = prompter("1\n");

    let result = p.select(SelectOpts::new("Which owner?", Vec::<String>::new()));

    assert!(matches!(result, Err(PromptError::Script { .. })));
}

#[test]
fn given_list_when_multi_select_then_sorted_indices() {
    let p = prompter("3, 1,3\n");

    let result = p.multi_select(MultiSelectOpts::new("Events?", options()));

    assert_eq!(result.unwrap(), vec![0, 2]);
}

#[test]
fn given_empty_answer_when_multi_select_then_defaults() {
    let p = prompter("\n");

    let result = p.multi_select(
        MultiSelectOpts::new("Events?", options()).with_defaults(["octo-org", "github"]),
    );

    assert_eq!(result.unwrap(), vec![1, 2]);
}

#[test]
fn given_closed_input_when_multi_select_then_error() {
    let p = prompter("");

    let result = p.multi_select(MultiSelectOpts::new("Events?", options()));

    assert!(matches!(result, Err(PromptError::Io { .. })));
}

// =========================================================================
// Confirm
// =========================================================================

#[test]
fn given_yes_when_confirm_then_true() {
    let p = prompter("Yes\n");

    assert_eq!(p.confirm(ConfirmOpts::new("Continue?", false)).unwrap(), true);
}

#[test]
fn given_empty_answer_when_confirm_then_default() {
    let p = prompter("\n");

    assert_eq!(p.confirm(ConfirmOpts::new("Continue?", true)).unwrap(), true);
}

#[test]
fn given_gibberish_then_no_when_confirm_then_false() {
    let p = prompter("maybe\nn\n");

    assert_eq!(p.confirm(ConfirmOpts::new("Continue?", true)).unwrap(), false);
}

#[test]
fn given_closed_input_when_confirm_then_error() {
    let p = prompter("");

    let result = p.confirm(ConfirmOpts::new("Continue?", true));

    assert!(matches!(result, Err(PromptError::Io { .. })));
}

// =========================================================================
// Parsing helpers
// =========================================================================

#[test]
fn given_zero_when_parse_selection_then_error() {
    assert_that!(
        parse_selection("0", &options()),
        err(eq("0 is not between 1 and 3"))
    );
}

#[test]
fn given_unknown_name_when_parse_multi_selection_then_error() {
    assert_that!(
        parse_multi_selection("1,nobody", &options()),
        err(contains_substring("\"nobody\" is not one of the options"))
    );
}

#[test]
fn given_words_when_parse_confirmation_then_mapped() {
    assert_eq!(parse_confirmation(" y "), Some(true));
    assert_eq!(parse_confirmation("NO"), Some(false));
    assert_eq!(parse_confirmation(""), None);
}
