//! Error types for the CSV codec.
//!
//! Malformed input is never an error: unconvertible fields and missing
//! columns keep their default values. Only structural caller errors are
//! rejected, and they are rejected before any text is processed.

use thiserror::Error;

/// Errors that can occur when calling the codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsvError {
    /// The separator is the quote character.
    #[error("Invalid separator {0:?}: conflicts with the quote character")]
    SeparatorIsQuote(char),

    /// The separator is a line terminator.
    #[error("Invalid separator {0:?}: conflicts with the line terminator")]
    SeparatorIsLineBreak(char),
}
