//! Text sources and record file helpers around the CSV codec.
//!
//! The codec only converts between records and in-memory text. This crate
//! moves that text in and out of the outside world:
//!
//! - [`TextSource`] - a local path or stdin/stdout (`-`), read or written whole
//! - [`write_csv`] / [`read_csv`] - records ⇄ a local file
//! - [`write_csv_to`] / [`read_csv_from`] - records ⇄ any `Write` / `Read`
//! - [`write_csv_async`] / [`read_csv_async`] - tokio variants of the file helpers
//!
//! Text is UTF-8 only.
//!
//! # Example
//!
//! ```ignore
//! use csv_helper_file::{read_csv, write_csv};
//!
//! write_csv(&todos, "todo.csv", &CsvConfig::default())?;
//! let todos: Vec<ToDo> = read_csv("todo.csv", &CsvConfig::default())?;
//! ```

mod local;
mod records;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub use records::{read_csv, read_csv_async, read_csv_from, write_csv, write_csv_async, write_csv_to};

/// URI naming the standard streams.
pub const STDIO_URI: &str = "-";

/// Where whole-document text is read from or written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Local filesystem path
    Local(PathBuf),
    /// Stdin when reading, stdout when writing
    Stdio,
}

impl TextSource {
    /// Parse a string into a TextSource
    ///
    /// - `-` -> Stdio
    /// - Everything else -> Local
    pub fn parse(uri: &str) -> Result<Self> {
        if uri.is_empty() {
            anyhow::bail!("Source must be a path or '{STDIO_URI}'");
        }
        if uri == STDIO_URI {
            Ok(TextSource::Stdio)
        } else {
            Ok(TextSource::Local(PathBuf::from(uri)))
        }
    }

    /// Read the whole document
    pub async fn read_all(&self) -> Result<String> {
        match self {
            TextSource::Local(path) => local::read_text(path).await,
            TextSource::Stdio => {
                let mut text = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut text)
                    .await
                    .context("Failed to read stdin as UTF-8 text")?;
                tracing::debug!("Read {} bytes from stdin", text.len());
                Ok(text)
            }
        }
    }

    /// Write the whole document, replacing any existing file
    pub async fn write_all(&self, text: &str) -> Result<()> {
        match self {
            TextSource::Local(path) => local::write_text(path, text).await,
            TextSource::Stdio => {
                let mut stdout = tokio::io::stdout();
                stdout
                    .write_all(text.as_bytes())
                    .await
                    .context("Failed to write to stdout")?;
                stdout.flush().await.context("Failed to flush stdout")?;
                Ok(())
            }
        }
    }

    /// Get a display name for logging
    pub fn display_name(&self) -> String {
        match self {
            TextSource::Local(path) => path.display().to_string(),
            TextSource::Stdio => "<stdio>".to_string(),
        }
    }
}
