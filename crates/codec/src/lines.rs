//! Line splitter: document → logical lines.
//!
//! Only quote parity is tracked here. Inside quotes, newline and carriage
//! return are ordinary content; outside, either one ends the line. Empty
//! lines are dropped, so `\r\n` terminators and trailing newlines produce no
//! extra lines.

use std::str::CharIndices;

use crate::quote::{CARRIAGE_RETURN, NEW_LINE, QUOTE};

/// Lazy iterator over the logical lines of a document.
///
/// Each item borrows the document and excludes its terminator.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    start: usize,
    inside_quotes: bool,
    finished: bool,
}

/// Split `text` into logical lines.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines {
        text,
        chars: text.char_indices(),
        start: 0,
        inside_quotes: false,
        finished: false,
    }
}

impl<'a> Lines<'a> {
    /// Whether a quote was left open at the point reached so far.
    pub fn inside_quotes(&self) -> bool {
        self.inside_quotes
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.finished {
            return None;
        }

        for (index, c) in self.chars.by_ref() {
            if c == QUOTE {
                self.inside_quotes = !self.inside_quotes;
            } else if (c == NEW_LINE || c == CARRIAGE_RETURN) && !self.inside_quotes {
                let line = &self.text[self.start..index];
                self.start = index + c.len_utf8();
                if !line.is_empty() {
                    return Some(line);
                }
            }
        }

        self.finished = true;
        let last = &self.text[self.start..];
        (!last.is_empty()).then_some(last)
    }
}

impl std::iter::FusedIterator for Lines<'_> {}
