pub mod infix_converter;
pub mod lexer;
pub mod operator;
pub mod token;

use crate::debug;
use crate::validator::infix_converter::infix_to_postfix;
use crate::validator::token::Token;
use anyhow::{Context, Result};
use chrono::Local;
use itertools::{EitherOrBoth, Itertools};
use string_builder::Builder;

/// The outcome of checking one postfix attempt against one command line.
///
/// Created fresh on every [`validate`] call. When either input tokenizes
/// to nothing, `error_message` is populated and no comparison is made;
/// otherwise `error_message` stays `None` even for an incorrect attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub input_command: String,
    pub input_postfix: String,
    pub is_valid: bool,
    pub expected_sequence: Vec<Token>,
    pub provided_sequence: Vec<Token>,
    pub error_message: Option<String>,
    pub timestamp: String,
}

impl ValidationResult {
    /// Index of the first position where the expected and provided
    /// sequences disagree. A length difference counts as a disagreement
    /// at the first index past the shorter sequence.
    pub fn first_mismatch(&self) -> Option<usize> {
        self.expected_sequence
            .iter()
            .zip_longest(self.provided_sequence.iter())
            .position(|pair| match pair {
                EitherOrBoth::Both(expected, provided) => expected != provided,
                EitherOrBoth::Left(_) | EitherOrBoth::Right(_) => true,
            })
    }
}

/// Checks whether `postfix_text` is the postfix form of `command_text`.
///
/// Both inputs are tokenized, the command line is reordered through
/// [`infix_to_postfix`], and the two sequences are compared element-wise
/// as exact strings (case-sensitive, quote characters included).
///
/// # Arguments
///
/// * `command_text`: The command line, in infix order.
/// * `postfix_text`: The candidate postfix rendition of the same tokens.
///
/// returns: The verdict together with both token sequences.
///
/// # Examples
///
/// ```
/// use postfix_trainer::validator::validate;
///
/// let result = validate("cmd1 && cmd2 || cmd3", "cmd1 cmd2 && cmd3 ||");
/// assert!(result.is_valid);
/// ```
pub fn validate(command_text: &str, postfix_text: &str) -> ValidationResult {
    let command_tokens = lexer::tokenize(command_text);
    let provided_sequence = lexer::tokenize(postfix_text);
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    if command_tokens.is_empty() || provided_sequence.is_empty() {
        return ValidationResult {
            input_command: command_text.to_string(),
            input_postfix: postfix_text.to_string(),
            is_valid: false,
            expected_sequence: vec![],
            provided_sequence: vec![],
            error_message: Some("both inputs must contain valid expressions".to_string()),
            timestamp,
        };
    }

    let expected_sequence = infix_to_postfix(command_tokens);
    debug!(&expected_sequence);
    let is_valid = expected_sequence == provided_sequence;

    ValidationResult {
        input_command: command_text.to_string(),
        input_postfix: postfix_text.to_string(),
        is_valid,
        expected_sequence,
        provided_sequence,
        error_message: None,
        timestamp,
    }
}

/// Renders the given tokens as text, separated by single spaces.
///
/// # Examples
///
/// ```
/// use postfix_trainer::validator::tokens_to_string;
/// use postfix_trainer::validator::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![Token::new("a"), Token::new("b"), Token::new("&&")];
/// assert_eq!(tokens_to_string(&tokens)?, "a b &&");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.as_str());
    }

    builder.string().context("Failed to build token string")
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug {
    ($( $args:expr ),*) => {()}
}
