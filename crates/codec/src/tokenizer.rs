//! Field tokenizer: one logical line → ordered field texts.
//!
//! A two-state machine driven one character at a time:
//!
//! | State    | separator        | quote                                   | other  |
//! |----------|------------------|-----------------------------------------|--------|
//! | Unquoted | emit field       | enter Quoted                            | append |
//! | Quoted   | append           | `""` appends one quote, else → Unquoted | append |
//!
//! Whatever is buffered at the end of the line is emitted as the last field,
//! so an empty line yields one empty field and a trailing separator yields a
//! trailing empty field. A quote still open at the end of the line is closed
//! implicitly: the field takes the remaining text.

use tracing::warn;

use crate::quote::QUOTE;

/// Tokenizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizerState {
    #[default]
    Unquoted,
    Quoted,
}

/// What the driver does with the current character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Emit the buffer as a field and clear it.
    Emit,
    /// Append the character to the buffer.
    Append(char),
    /// Append one quote and consume the following quote as well.
    AppendEscapedQuote,
    /// Drop the character.
    Skip,
}

/// The single transition function of the tokenizer.
///
/// `next` is the character after `c`, used to recognise a doubled quote.
pub fn transition(
    state: TokenizerState,
    c: char,
    next: Option<char>,
    separator: char,
) -> (TokenizerState, Step) {
    match state {
        TokenizerState::Unquoted if c == separator => (TokenizerState::Unquoted, Step::Emit),
        TokenizerState::Unquoted if c == QUOTE => (TokenizerState::Quoted, Step::Skip),
        TokenizerState::Unquoted => (TokenizerState::Unquoted, Step::Append(c)),
        TokenizerState::Quoted if c == QUOTE => {
            if next == Some(QUOTE) {
                (TokenizerState::Quoted, Step::AppendEscapedQuote)
            } else {
                (TokenizerState::Unquoted, Step::Skip)
            }
        }
        TokenizerState::Quoted => (TokenizerState::Quoted, Step::Append(c)),
    }
}

/// Split one logical line into its field texts.
pub fn split_fields(line: &str, separator: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut buffer = String::new();
    let mut state = TokenizerState::default();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        let (next_state, step) = transition(state, c, chars.peek().copied(), separator);
        match step {
            Step::Emit => fields.push(std::mem::take(&mut buffer)),
            Step::Append(c) => buffer.push(c),
            Step::AppendEscapedQuote => {
                buffer.push(QUOTE);
                chars.next();
            }
            Step::Skip => {}
        }
        state = next_state;
    }

    if state == TokenizerState::Quoted {
        warn!(
            "Unterminated quoted field in field {}; closing at end of line",
            fields.len() + 1
        );
    }
    fields.push(buffer);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &str) -> Vec<String> {
        split_fields(line, ',')
    }

    #[test]
    fn test_plain_fields() {
        assert_eq!(split("1,filing tax returns,Middle"), vec!["1", "filing tax returns", "Middle"]);
    }

    #[test]
    fn test_empty_line_yields_one_empty_field() {
        assert_eq!(split(""), vec![""]);
    }

    #[test]
    fn test_trailing_separator_yields_empty_field() {
        assert_eq!(split("a,"), vec!["a", ""]);
        assert_eq!(split(",,"), vec!["", "", ""]);
    }

    #[test]
    fn test_quoted_separator() {
        assert_eq!(split("\"a,b\",c"), vec!["a,b", "c"]);
    }

    #[test]
    fn test_escaped_quotes() {
        assert_eq!(split("\"he said \"\"hi\"\"\""), vec!["he said \"hi\""]);
        assert_eq!(split("\"\"\"ASAP\"\"\",3"), vec!["\"ASAP\"", "3"]);
    }

    #[test]
    fn test_empty_quoted_field() {
        assert_eq!(split("\"\",x"), vec!["", "x"]);
    }

    #[test]
    fn test_embedded_newline() {
        assert_eq!(split("\"line1\nline2\""), vec!["line1\nline2"]);
    }

    #[test]
    fn test_text_after_closing_quote_is_appended() {
        assert_eq!(split("\"ab\"cd,e"), vec!["abcd", "e"]);
    }

    #[test]
    fn test_unterminated_quote_closes_implicitly() {
        assert_eq!(split("a,\"b,c"), vec!["a", "b,c"]);
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(split_fields("a;\"b;c\";d,e", ';'), vec!["a", "b;c", "d,e"]);
    }

    #[test]
    fn test_transition_table() {
        use TokenizerState::*;
        assert_eq!(transition(Unquoted, ',', None, ','), (Unquoted, Step::Emit));
        assert_eq!(transition(Unquoted, '"', None, ','), (Quoted, Step::Skip));
        assert_eq!(transition(Unquoted, 'x', None, ','), (Unquoted, Step::Append('x')));
        assert_eq!(transition(Quoted, ',', None, ','), (Quoted, Step::Append(',')));
        assert_eq!(
            transition(Quoted, '"', Some('"'), ','),
            (Quoted, Step::AppendEscapedQuote)
        );
        assert_eq!(transition(Quoted, '"', Some(','), ','), (Unquoted, Step::Skip));
        assert_eq!(transition(Quoted, 'x', None, ','), (Quoted, Step::Append('x')));
    }
}
