//! Record helpers: encode/decode whole documents against files and streams.
//!
//! All helpers derive a fresh schema from the record type per call and
//! decode eagerly into a `Vec`.

use anyhow::{Context, Result};
use csv_helper_codec::{from_csv, to_csv, CsvConfig, CsvRecord};
use std::io::{Read, Write};
use std::path::Path;

use crate::local;

fn encode_records<'a, R, I>(records: I, config: &CsvConfig) -> Result<String>
where
    R: CsvRecord,
    I: IntoIterator<Item = &'a R>,
{
    to_csv(records, config).context("Failed to encode records")
}

fn decode_records<R: CsvRecord>(text: &str, config: &CsvConfig) -> Result<Vec<R>> {
    let records: Vec<R> = from_csv(text, config)
        .context("Failed to decode records")?
        .collect();
    Ok(records)
}

/// Encode `records` and write them to the file at `path`.
pub fn write_csv<'a, R, I, P>(records: I, path: P, config: &CsvConfig) -> Result<()>
where
    R: CsvRecord,
    I: IntoIterator<Item = &'a R>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = encode_records(records, config)?;
    std::fs::write(path, &text)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    tracing::debug!("Wrote {} bytes of CSV to {}", text.len(), path.display());
    Ok(())
}

/// Read the file at `path` and decode every record in it.
pub fn read_csv<R, P>(path: P, config: &CsvConfig) -> Result<Vec<R>>
where
    R: CsvRecord,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let records = decode_records(&text, config)?;
    tracing::debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Encode `records` into `writer`. The writer is flushed but not closed.
pub fn write_csv_to<'a, R, I, W>(records: I, mut writer: W, config: &CsvConfig) -> Result<()>
where
    R: CsvRecord,
    I: IntoIterator<Item = &'a R>,
    W: Write,
{
    let text = encode_records(records, config)?;
    writer
        .write_all(text.as_bytes())
        .context("Failed to write CSV text")?;
    writer.flush().context("Failed to flush CSV writer")?;
    Ok(())
}

/// Read `reader` to its end and decode every record.
pub fn read_csv_from<R, Rd>(mut reader: Rd, config: &CsvConfig) -> Result<Vec<R>>
where
    R: CsvRecord,
    Rd: Read,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("Failed to read CSV text as UTF-8")?;
    decode_records(&text, config)
}

/// Async variant of [`write_csv`].
pub async fn write_csv_async<'a, R, I, P>(records: I, path: P, config: &CsvConfig) -> Result<()>
where
    R: CsvRecord,
    I: IntoIterator<Item = &'a R>,
    P: AsRef<Path>,
{
    let text = encode_records(records, config)?;
    local::write_text(path.as_ref(), &text).await
}

/// Async variant of [`read_csv`].
pub async fn read_csv_async<R, P>(path: P, config: &CsvConfig) -> Result<Vec<R>>
where
    R: CsvRecord,
    P: AsRef<Path>,
{
    let text = local::read_text(path.as_ref()).await?;
    decode_records(&text, config)
}
