//! Decoder: CSV text → records.
//!
//! Decoding is lazy: [`decode`] validates the configuration and reads the
//! header (if any), then [`Records`] materialises one record per logical
//! line as it is iterated. Iterating again means calling [`decode`] again.

use tracing::{debug, trace};

use crate::config::CsvConfig;
use crate::error::CsvError;
use crate::lines::{split_lines, Lines};
use crate::schema::Schema;
use crate::tokenizer::split_fields;

/// How line fields are matched to the included descriptors.
#[derive(Debug, Clone)]
enum ColumnMap {
    /// Field `i` goes to included descriptor `i`.
    Positional,
    /// Column index per included descriptor, from the header line.
    Header(Vec<Option<usize>>),
}

/// Lazy sequence of decoded records.
pub struct Records<'a, R> {
    lines: Lines<'a>,
    schema: Schema<R>,
    separator: char,
    columns: ColumnMap,
    line_number: usize,
}

impl<R> std::fmt::Debug for Records<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Records")
            .field("separator", &self.separator)
            .field("columns", &self.columns)
            .field("line_number", &self.line_number)
            .finish()
    }
}

/// Decode `text` into records of type `R`.
///
/// In header mode the first logical line names the columns and each
/// descriptor is matched by display name; descriptors without a matching
/// column keep their default value. Without a header, fields are assigned to
/// descriptors by position: extra fields are ignored and missing ones leave
/// their descriptors at the default value.
pub fn decode<'a, R: Default>(
    text: &'a str,
    schema: &Schema<R>,
    config: &CsvConfig,
) -> Result<Records<'a, R>, CsvError> {
    config.validate()?;

    let mut lines = split_lines(text);
    let mut line_number = 0;
    let columns = if config.include_header {
        let header = lines
            .next()
            .map(|line| split_fields(line, config.separator))
            .unwrap_or_default();
        line_number += 1;
        ColumnMap::Header(map_columns(schema, &header))
    } else {
        ColumnMap::Positional
    };

    Ok(Records {
        lines,
        schema: schema.clone(),
        separator: config.separator,
        columns,
        line_number,
    })
}

/// Index of the header column for every included descriptor. When a name
/// appears more than once, the last column wins.
fn map_columns<R>(schema: &Schema<R>, header: &[String]) -> Vec<Option<usize>> {
    let columns: Vec<Option<usize>> = schema
        .included()
        .map(|descriptor| {
            let column = header
                .iter()
                .rposition(|name| name == descriptor.display_name());
            if column.is_none() {
                debug!(
                    "No column named '{}' in header; field '{}' keeps its default",
                    descriptor.display_name(),
                    descriptor.field_name()
                );
            }
            column
        })
        .collect();

    debug!(
        "Mapped {} of {} fields onto {} header columns",
        columns.iter().filter(|c| c.is_some()).count(),
        columns.len(),
        header.len()
    );
    columns
}

impl<R: Default> Records<'_, R> {
    fn materialize(&self, fields: &[String]) -> R {
        let mut record = R::default();
        for (index, descriptor) in self.schema.included().enumerate() {
            let column = match &self.columns {
                ColumnMap::Positional => Some(index),
                ColumnMap::Header(columns) => columns[index],
            };
            let Some(text) = column.and_then(|column| fields.get(column)) else {
                trace!(
                    "Line {}: no value for '{}'",
                    self.line_number,
                    descriptor.display_name()
                );
                continue;
            };
            if !descriptor.write_text(&mut record, text) {
                trace!(
                    "Line {}: skipped unconvertible {} value '{}' for '{}'",
                    self.line_number,
                    descriptor.value_kind(),
                    text,
                    descriptor.field_name()
                );
            }
        }
        record
    }
}

impl<R: Default> Iterator for Records<'_, R> {
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let line = self.lines.next()?;
        self.line_number += 1;
        let fields = split_fields(line, self.separator);
        Some(self.materialize(&fields))
    }
}
