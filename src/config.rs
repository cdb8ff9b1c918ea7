//! Codec configuration files.
//!
//! ```toml
//! separator = ";"
//! include_header = false
//! ```
//!
//! Both keys are optional and default to `,` and `true`.

use anyhow::{Context, Result};
use csv_helper_codec::CsvConfig;
use std::fs;
use std::path::Path;

/// Load a codec configuration from a TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CsvConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    tracing::debug!(
        "Loaded config from {}: separator={:?}, include_header={}",
        path.display(),
        config.separator,
        config.include_header
    );
    Ok(config)
}

/// Parse and validate a codec configuration from TOML text.
pub fn parse_config(toml: &str) -> Result<CsvConfig> {
    let config: CsvConfig = toml::from_str(toml).context("Failed to parse TOML")?;
    config.validate()?;
    Ok(config)
}
