//! CLI argument definitions for valcurs.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `raw` | Output format (raw, json, csv) |
//! | `--date` | latest | Reference date, `YYYY-MM-DD` |
//! | `--feed-url` | `VALCURS_FEED_URL` or CBR | Feed endpoint |
//! | `--feed-file` | none | Saved feed document to read instead of the network |
//! | `--timeout-ms` | `VALCURS_TIMEOUT_MS` or `10000` | Request timeout in ms |
//! | `--verbose` | `false` | Debug logging on stderr |
//!
//! # Examples
//!
//! ```bash
//! # Euro and US dollar, raw mapping
//! valcurs
//!
//! # CSV for a given day
//! valcurs R01239 R01235 R01375 --format csv --date 2025-01-01
//!
//! # Render a saved document
//! valcurs --feed-file XML_daily.xml --format json
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Central Bank of Russia currency rates, rendered as a mapping, JSON or CSV.
#[derive(Debug, Parser)]
#[command(
    name = "valcurs",
    author,
    version,
    about = "Central Bank of Russia currency rates as raw mapping, JSON or CSV"
)]
pub struct Cli {
    /// Feed currency identifiers (e.g. R01239 for euro, R01235 for US dollar).
    ///
    /// Defaults to R01239 R01235. Identifiers missing from the feed are
    /// left out of the output.
    pub ids: Vec<String>,

    /// Output format.
    ///
    /// - raw: identifier to (rate, name) mapping
    /// - json: {"ID": ["rate", "name"]} with four-space indentation
    /// - csv: `ID;Rate;Name` header and rows sorted by identifier
    #[arg(long, value_enum, default_value_t = OutputFormat::Raw)]
    pub format: OutputFormat,

    /// Reference date (YYYY-MM-DD). Latest published rates when omitted.
    #[arg(long)]
    pub date: Option<String>,

    /// Feed endpoint. Overrides VALCURS_FEED_URL.
    #[arg(long)]
    pub feed_url: Option<String>,

    /// Read a saved feed document instead of requesting the endpoint.
    #[arg(long, conflicts_with = "feed_url")]
    pub feed_file: Option<PathBuf>,

    /// Request timeout in milliseconds. Overrides VALCURS_TIMEOUT_MS.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Log debug diagnostics to stderr.
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Identifier to (rate, name) mapping.
    Raw,
    /// Indented JSON object.
    Json,
    /// Semicolon-delimited text.
    Csv,
}
