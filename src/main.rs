//! Command-line interface for csv-helper
//!
//! # Usage Examples
//!
//! ## Sample
//! ```bash
//! # Write todo.withheader.csv and todo.withoutheader.csv, read both back
//! # and print the decoded records as JSON lines
//! RUST_LOG=info csv-helper sample --output-dir /tmp/todo
//! ```
//!
//! ## Split
//! ```bash
//! # One JSON array of field texts per logical line
//! csv-helper split todo.withheader.csv
//! cat todo.tsv | csv-helper --separator '\t' split -
//! ```
//!
//! ## Reformat
//! ```bash
//! # Re-emit every logical line with another separator
//! csv-helper reformat todo.withheader.csv todo.tsv --to-separator '\t'
//! ```
//!
//! ## Configuration
//! `--config FILE` loads `separator` and `include_header` from TOML;
//! `--separator` and `--no-header` override it.

use anyhow::Context;
use clap::{Parser, Subcommand};
use csv_helper::codec::{encode_fields, split_fields, split_lines};
use csv_helper::sample::{sample_todos, ToDo};
use csv_helper::{
    parse_separator, read_csv_async, read_csv_from, write_csv_async, write_csv_to, CsvConfig,
    CsvOpts, TextSource,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "csv-helper")]
#[command(about = "Convert typed records to and from CSV text")]
#[command(long_about = None)]
struct Cli {
    /// Codec options shared by every command
    #[command(flatten)]
    csv: CsvOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the ToDo sample with and without a header and read both back
    Sample {
        /// Directory the two sample files are written to
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Print the fields of every logical line as a JSON array
    Split {
        /// Input path, or '-' for stdin
        input: String,
    },

    /// Re-emit a document with another separator
    Reformat {
        /// Input path, or '-' for stdin
        input: String,

        /// Output path, or '-' for stdout
        output: String,

        /// Separator of the output document (`\t` means tab)
        #[arg(long, value_parser = parse_separator)]
        to_separator: char,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.csv.resolve()?;

    match cli.command {
        Commands::Sample { output_dir } => run_sample(&output_dir, config).await,
        Commands::Split { input } => run_split(&input, config).await,
        Commands::Reformat {
            input,
            output,
            to_separator,
        } => run_reformat(&input, &output, config, to_separator).await,
    }
}

async fn run_sample(output_dir: &Path, config: CsvConfig) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let todos = sample_todos();
    for todo in &todos {
        tracing::info!("{todo}");
    }

    // With header, through the async helpers
    let with_header = config.with_header(true);
    let with_header_path = output_dir.join("todo.withheader.csv");
    write_csv_async(&todos, &with_header_path, &with_header).await?;
    let decoded: Vec<ToDo> = read_csv_async(&with_header_path, &with_header).await?;
    print_records(&with_header_path, &decoded)?;

    // Without header, through the stream helpers
    let without_header = config.with_header(false);
    let without_header_path = output_dir.join("todo.withoutheader.csv");
    let file = std::fs::File::create(&without_header_path).with_context(|| {
        format!("Failed to create file: {}", without_header_path.display())
    })?;
    write_csv_to(&todos, file, &without_header)?;
    let file = std::fs::File::open(&without_header_path)
        .with_context(|| format!("Failed to open file: {}", without_header_path.display()))?;
    let decoded: Vec<ToDo> = read_csv_from(file, &without_header)?;
    print_records(&without_header_path, &decoded)?;

    Ok(())
}

fn print_records(path: &Path, todos: &[ToDo]) -> anyhow::Result<()> {
    tracing::info!("Read {} records back from {}", todos.len(), path.display());
    for todo in todos {
        tracing::info!("{todo}");
        println!("{}", serde_json::to_string(todo)?);
    }
    Ok(())
}

async fn run_split(input: &str, config: CsvConfig) -> anyhow::Result<()> {
    let source = TextSource::parse(input)?;
    let text = source.read_all().await?;

    let mut count = 0usize;
    for line in split_lines(&text) {
        let fields = split_fields(line, config.separator);
        println!("{}", serde_json::to_string(&fields)?);
        count += 1;
    }

    tracing::info!("Split {} lines from {}", count, source.display_name());
    Ok(())
}

async fn run_reformat(
    input: &str,
    output: &str,
    config: CsvConfig,
    to_separator: char,
) -> anyhow::Result<()> {
    let target = config.with_separator(to_separator);
    target.validate().context("Invalid --to-separator")?;

    let source = TextSource::parse(input)?;
    let sink = TextSource::parse(output)?;
    let text = source.read_all().await?;

    let mut reformatted = String::with_capacity(text.len());
    let mut count = 0usize;
    for line in split_lines(&text) {
        let fields = split_fields(line, config.separator);
        reformatted.push_str(&encode_fields(&fields, target.separator));
        reformatted.push('\n');
        count += 1;
    }

    sink.write_all(&reformatted).await?;
    tracing::info!(
        "Reformatted {} lines from {} to {} ({:?} -> {:?})",
        count,
        source.display_name(),
        sink.display_name(),
        config.separator,
        target.separator
    );
    Ok(())
}
