use crate::validator::operator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of a command line.
///
/// A token carries no category of its own: whether it acts as an operator
/// is decided by membership in the operator table. A quoted span is a
/// single token that still includes its quote characters.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn new(text: impl Into<String>) -> Token {
        Token(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this token exactly matches a symbol in the operator table.
    /// Parentheses count as operators here; the converter treats them
    /// structurally before ever asking.
    pub fn is_operator(&self) -> bool {
        operator::is_operator(&self.0)
    }

    pub fn is_open_parenthesis(&self) -> bool {
        self.0 == "("
    }

    pub fn is_close_parenthesis(&self) -> bool {
        self.0 == ")"
    }

    /// The table rank of this token, or [`operator::UNKNOWN_PRECEDENCE`]
    /// for anything not in the table.
    pub fn precedence(&self) -> i32 {
        operator::precedence_of(&self.0)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Token {
        Token(text.to_string())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_symbol_is_recognized_as_operator() {
        let token = Token::new("&&");
        assert!(token.is_operator())
    }

    #[test]
    fn word_is_not_recognized_as_operator() {
        let token = Token::new("grep");
        assert!(!token.is_operator())
    }

    #[test]
    fn quoted_span_keeps_its_quotes_in_display() {
        let token = Token::new("\"hello world\"");
        assert_eq!(token.to_string(), "\"hello world\"")
    }

    #[test]
    fn parenthesis_predicates_match_only_their_symbol() {
        assert!(Token::new("(").is_open_parenthesis());
        assert!(Token::new(")").is_close_parenthesis());
        assert!(!Token::new("(").is_close_parenthesis());
        assert!(!Token::new("ls").is_open_parenthesis());
    }
}
