//! csv-helper library
//!
//! Converts sequences of typed records to and from CSV text.
//!
//! # Crates
//!
//! - `csv_types` - field value ⇄ text conversions and enum lookup
//! - `csv_helper_codec` - quoting, tokenizing, line splitting, schemas, encode/decode
//! - `csv_helper_file` - local files, stdio and async helpers around the codec
//!
//! # CLI Usage
//!
//! ```bash
//! # Write the sample ToDo list with and without a header, then read it back
//! csv-helper sample --output-dir /tmp/todo
//!
//! # Print the fields of every logical line as JSON
//! csv-helper split todo.withheader.csv
//!
//! # Convert a comma separated document to tab separated
//! csv-helper reformat todo.withheader.csv - --to-separator '\t'
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

pub mod config;
pub mod sample;

pub use csv_helper_codec as codec;
pub use csv_helper_file as file;

pub use csv_helper_codec::{
    csv_enum, csv_value, decode, encode, from_csv, to_csv, Converter, CsvConfig, CsvEnum, CsvError,
    CsvRecord, CsvValue, FieldDescriptor, FromCsvText, Records, Schema, SchemaBuilder, ToCsvText,
    ValueKind,
};
pub use csv_helper_file::{
    read_csv, read_csv_async, read_csv_from, write_csv, write_csv_async, write_csv_to, TextSource,
};

#[derive(Parser, Clone, Debug, Default)]
pub struct CsvOpts {
    /// TOML file holding `separator` and `include_header`
    #[arg(long, env = "CSV_HELPER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Field separator, overrides the config file (`\t` means tab)
    #[arg(long, value_parser = parse_separator)]
    pub separator: Option<char>,

    /// Treat documents as having no header line
    #[arg(long)]
    pub no_header: bool,
}

impl CsvOpts {
    /// Load the config file (or defaults) and apply the command-line overrides.
    pub fn resolve(&self) -> Result<CsvConfig> {
        let mut config = match &self.config {
            Some(path) => config::load_config(path)?,
            None => CsvConfig::default(),
        };
        if let Some(separator) = self.separator {
            config = config.with_separator(separator);
        }
        if self.no_header {
            config = config.with_header(false);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Parse a separator argument: a single character or the escape `\t`.
pub fn parse_separator(text: &str) -> Result<char, String> {
    if text == "\\t" {
        return Ok('\t');
    }
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("separator must be a single character, got '{text}'")),
    }
}
