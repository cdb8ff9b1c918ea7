//! Local filesystem text reading and writing

use anyhow::{Context, Result};
use std::path::Path;

/// Read an entire local file as UTF-8 text
pub async fn read_text(path: &Path) -> Result<String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    tracing::debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Write `text` to a local file, creating or truncating it
pub async fn write_text(path: &Path, text: &str) -> Result<()> {
    tokio::fs::write(path, text)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    tracing::debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
