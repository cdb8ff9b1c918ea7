//! Encoder: records → CSV text.

use tracing::debug;

use crate::config::CsvConfig;
use crate::error::CsvError;
use crate::quote::{quote_if_needed, NEW_LINE};
use crate::schema::Schema;

/// Encode `records` as CSV text.
///
/// With `include_header` the first line holds the display names of the
/// included fields. Every line ends with a single `\n`. A schema with no
/// included fields produces an empty document.
pub fn encode<'a, R, I>(records: I, schema: &Schema<R>, config: &CsvConfig) -> Result<String, CsvError>
where
    R: 'a,
    I: IntoIterator<Item = &'a R>,
{
    config.validate()?;

    if schema.is_empty() {
        debug!("Schema has no included fields; writing an empty document");
        return Ok(String::new());
    }

    let mut csv = String::new();
    if config.include_header {
        append_line(&mut csv, schema.display_names(), config.separator);
    }

    let mut count = 0usize;
    for record in records {
        let texts = schema
            .included()
            .filter_map(|descriptor| descriptor.read_text(record));
        append_line(&mut csv, texts, config.separator);
        count += 1;
    }

    debug!(
        "Encoded {} records with {} columns ({} bytes)",
        count,
        schema.len(),
        csv.len()
    );
    Ok(csv)
}

/// Encode one line of raw field texts, without the terminator.
pub fn encode_fields<I, S>(fields: I, separator: char) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (index, field) in fields.into_iter().enumerate() {
        if index != 0 {
            line.push(separator);
        }
        line.push_str(&quote_if_needed(field.as_ref(), separator));
    }
    line
}

fn append_line<I, S>(csv: &mut String, texts: I, separator: char)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    csv.push_str(&encode_fields(texts, separator));
    csv.push(NEW_LINE);
}
