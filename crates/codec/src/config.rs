//! Codec configuration.

use serde::{Deserialize, Serialize};

use crate::error::CsvError;
use crate::quote::{CARRIAGE_RETURN, NEW_LINE, QUOTE};

/// Default field separator.
pub const DEFAULT_SEPARATOR: char = ',';

/// Configuration threaded through every encode and decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    /// Field separator (default: ',')
    pub separator: char,

    /// Whether the first line is a header of display names (default: true)
    pub include_header: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            include_header: true,
        }
    }
}

impl CsvConfig {
    /// Set the field separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set whether a header line is written and expected.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Reject separators that would make the format ambiguous.
    pub fn validate(&self) -> Result<(), CsvError> {
        match self.separator {
            QUOTE => Err(CsvError::SeparatorIsQuote(self.separator)),
            NEW_LINE | CARRIAGE_RETURN => Err(CsvError::SeparatorIsLineBreak(self.separator)),
            _ => Ok(()),
        }
    }
}
