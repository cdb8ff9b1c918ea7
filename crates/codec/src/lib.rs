//! CSV text codec.
//!
//! Converts between typed records and CSV text with minimal quoting:
//!
//! - [`quote`] - decides when a field needs quoting and escapes quotes
//! - [`tokenizer`] - splits one logical line into field texts
//! - [`lines`] - splits a document into logical lines, honouring quoted newlines
//! - [`schema`] - ordered field descriptors declared per record type
//! - [`encode`] / [`decode`] - records ⇄ text
//!
//! Everything runs synchronously over an in-memory document. All state is
//! local to a call; the separator travels in the explicit [`CsvConfig`].
//!
//! # Example
//!
//! ```ignore
//! use csv_helper_codec::{from_csv, to_csv, CsvConfig};
//!
//! let text = to_csv(&todos, &CsvConfig::default())?;
//! let todos: Vec<ToDo> = from_csv(&text, &CsvConfig::default())?.collect();
//! ```

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod lines;
pub mod quote;
pub mod schema;
pub mod tokenizer;

pub use config::{CsvConfig, DEFAULT_SEPARATOR};
pub use decode::{decode, Records};
pub use encode::{encode, encode_fields};
pub use error::CsvError;
pub use lines::{split_lines, Lines};
pub use quote::{escape, needs_quoting, quote_if_needed};
pub use schema::{CsvRecord, FieldDescriptor, Schema, SchemaBuilder};
pub use tokenizer::split_fields;

// Re-export conversion types so record declarations need one import
pub use csv_types::{
    csv_enum, csv_value, Converter, CsvEnum, CsvValue, FromCsvText, ToCsvText, ValueKind,
};

/// Encode `records` using the schema declared by `R`, built fresh.
pub fn to_csv<'a, R, I>(records: I, config: &CsvConfig) -> Result<String, CsvError>
where
    R: CsvRecord,
    I: IntoIterator<Item = &'a R>,
{
    encode(records, &R::schema(), config)
}

/// Decode `text` using the schema declared by `R`, built fresh.
pub fn from_csv<'a, R: CsvRecord>(text: &'a str, config: &CsvConfig) -> Result<Records<'a, R>, CsvError> {
    decode(text, &R::schema(), config)
}
