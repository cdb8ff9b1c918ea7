//! Minimal quoting.
//!
//! A field is wrapped in quotes iff its text contains the separator, a quote,
//! a newline or a carriage return. Doubling a quote is the only escape.

/// The quote character.
pub const QUOTE: char = '"';
pub const NEW_LINE: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';

/// Whether `text` must be quoted to survive a round trip.
pub fn needs_quoting(text: &str, separator: char) -> bool {
    text.chars()
        .any(|c| c == separator || c == QUOTE || c == NEW_LINE || c == CARRIAGE_RETURN)
}

/// Double every quote character.
pub fn escape(text: &str) -> String {
    text.replace(QUOTE, "\"\"")
}

/// Quote and escape `text` only when it needs it.
pub fn quote_if_needed(text: &str, separator: char) -> String {
    if needs_quoting(text, separator) {
        format!("{QUOTE}{}{QUOTE}", escape(text))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unquoted() {
        assert!(!needs_quoting("filing tax returns", ','));
        assert_eq!(quote_if_needed("filing tax returns", ','), "filing tax returns");
        assert_eq!(quote_if_needed("", ','), "");
    }

    #[test]
    fn test_separator_quoted() {
        assert_eq!(quote_if_needed("a,b", ','), "\"a,b\"");
    }

    #[test]
    fn test_quotes_doubled() {
        assert_eq!(escape("\"ASAP\""), "\"\"ASAP\"\"");
        assert_eq!(
            quote_if_needed("he said \"hi\"", ','),
            "\"he said \"\"hi\"\"\""
        );
    }

    #[test]
    fn test_line_breaks_quoted() {
        assert_eq!(quote_if_needed("line1\nline2", ','), "\"line1\nline2\"");
        assert_eq!(quote_if_needed("a\rb", ','), "\"a\rb\"");
    }

    #[test]
    fn test_only_active_separator_counts() {
        assert!(!needs_quoting("a,b", ';'));
        assert!(needs_quoting("a;b", ';'));
    }
}
