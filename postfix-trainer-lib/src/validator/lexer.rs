use crate::validator::operator;
use crate::validator::token::Token;

/// Splits a raw command line into its tokens, discarding whitespace.
///
/// The scan is longest-match-first over the unconsumed input: a quoted
/// span (`"..."` or `'...'`, kept as one token including the quotes), then
/// the longest operator symbol in the table, then a word run. Empty or
/// whitespace-only input yields an empty vector; no input is ever an
/// error.
///
/// Known limitation: there is no escape handling inside quotes, and an
/// unterminated quote falls back to the word rule starting at the quote
/// character, so `"abc def` lexes as `"abc` followed by `def`.
///
/// # Arguments
///
/// * `text`: The raw command line.
///
/// returns: The tokens, in order of appearance.
///
/// # Examples
///
/// ```
/// use postfix_trainer::validator::lexer::tokenize;
///
/// let tokens = tokenize("grep \"hello world\" file.txt");
/// let texts: Vec<&str> = tokens.iter().map(|token| token.as_str()).collect();
/// assert_eq!(texts, ["grep", "\"hello world\"", "file.txt"]);
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = vec![];
    let mut index = 0;

    while let Some(character) = text[index..].chars().next() {
        if character.is_whitespace() {
            index += character.len_utf8();
            continue;
        }

        if character == '"' || character == '\'' {
            if let Some(span_end) = closing_quote(text, index, character) {
                tokens.push(Token::new(&text[index..span_end]));
                index = span_end;
                continue;
            }
            // Unterminated quote: fall through to the word rule.
        }

        if let Some(symbol) = operator::longest_operator_at(text, index) {
            tokens.push(Token::new(symbol));
            index += symbol.len();
            continue;
        }

        let word_start = index;
        index += character.len_utf8();
        while let Some(next) = text[index..].chars().next() {
            if ends_word(next) {
                break;
            }
            index += next.len_utf8();
        }
        tokens.push(Token::new(&text[word_start..index]));
    }

    tokens
}

/// Byte index just past the quote that closes the span opened at
/// `open_index`, or `None` if the input runs out first. Only a quote of
/// the same kind closes the span.
fn closing_quote(text: &str, open_index: usize, quote: char) -> Option<usize> {
    let span_start = open_index + quote.len_utf8();
    text[span_start..]
        .find(quote)
        .map(|offset| span_start + offset + quote.len_utf8())
}

/// Characters that end a word run. The digit in `2>` is deliberately
/// absent: `cmd2> out` lexes as `cmd2` `>` `out`, while a token starting
/// at `2>` is caught by the operator match before the word rule runs.
fn ends_word(character: char) -> bool {
    character.is_whitespace()
        || matches!(character, '>' | '<' | ';' | '|' | '(' | ')' | '&')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|token| token.as_str()).collect()
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert_eq!(tokenize(""), Vec::<Token>::new())
    }

    #[test]
    fn whitespace_only_input_yields_no_tokens() {
        assert_eq!(tokenize("  \t \n "), Vec::<Token>::new())
    }

    #[test]
    fn words_are_split_on_whitespace() {
        let tokens = tokenize("ls -l /tmp");
        assert_eq!(texts(&tokens), ["ls", "-l", "/tmp"])
    }

    #[test]
    fn double_quoted_span_is_one_token_including_quotes() {
        let tokens = tokenize("grep \"hello world\" file.txt");
        assert_eq!(texts(&tokens), ["grep", "\"hello world\"", "file.txt"])
    }

    #[test]
    fn single_quoted_span_is_one_token_including_quotes() {
        let tokens = tokenize("echo 'a b c'");
        assert_eq!(texts(&tokens), ["echo", "'a b c'"])
    }

    #[test]
    fn quote_of_the_other_kind_does_not_close_a_span() {
        let tokens = tokenize("echo \"it's fine\"");
        assert_eq!(texts(&tokens), ["echo", "\"it's fine\""])
    }

    #[test]
    fn operators_inside_quotes_are_not_token_boundaries() {
        let tokens = tokenize("grep \"a && b\" log");
        assert_eq!(texts(&tokens), ["grep", "\"a && b\"", "log"])
    }

    #[test]
    fn unterminated_quote_falls_back_to_word_rule() {
        let tokens = tokenize("\"abc def");
        assert_eq!(texts(&tokens), ["\"abc", "def"])
    }

    #[test]
    fn two_character_operators_win_over_their_prefixes() {
        let tokens = tokenize("cmd >> log");
        assert_eq!(texts(&tokens), ["cmd", ">>", "log"])
    }

    #[test]
    fn stderr_redirect_lexes_as_one_operator() {
        let tokens = tokenize("make 2> errors.txt");
        assert_eq!(texts(&tokens), ["make", "2>", "errors.txt"])
    }

    #[test]
    fn digit_suffix_stays_with_its_word() {
        let tokens = tokenize("cmd2> out");
        assert_eq!(texts(&tokens), ["cmd2", ">", "out"])
    }

    #[test]
    fn operators_need_no_surrounding_whitespace() {
        let tokens = tokenize("a&&b||c");
        assert_eq!(texts(&tokens), ["a", "&&", "b", "||", "c"])
    }

    #[test]
    fn parentheses_split_adjacent_words() {
        let tokens = tokenize("(a)");
        assert_eq!(texts(&tokens), ["(", "a", ")"])
    }

    #[test]
    fn words_may_contain_dashes_and_dots() {
        let tokens = tokenize("tar -czf backup.tar.gz");
        assert_eq!(texts(&tokens), ["tar", "-czf", "backup.tar.gz"])
    }

    #[test]
    fn retokenizing_the_rejoined_output_is_stable() {
        let commands = [
            "ls -l && grep err log.txt",
            "(a || b) ; c > out",
            "cat < in | sort >> sorted",
        ];
        for command in commands {
            let tokens = tokenize(command);
            let rejoined = texts(&tokens).join(" ");
            assert_eq!(tokenize(&rejoined), tokens)
        }
    }

    #[test]
    fn quoted_spans_survive_one_rejoin_round_trip() {
        let tokens = tokenize("grep \"hello world\" file.txt");
        let rejoined = texts(&tokens).join(" ");
        assert_eq!(tokenize(&rejoined), tokens)
    }
}
