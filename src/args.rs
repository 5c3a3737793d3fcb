use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use crate::row::{Row, Rows};

#[derive(Parser, Clone)]
#[command(version, about, long_about = None)]
#[command(next_line_help = true)]
pub struct Args {
    /// Target table name (without schema)
    #[arg(long, short)]
    pub table: String,

    /// Comma-separated columns that define row uniqueness.
    /// When set, rows are upserted instead of inserted
    #[arg(long)]
    pub on_conflict: Option<String>,

    /// Target schema
    #[arg(long, short)]
    pub schema: Option<String>,

    /// Service endpoint URL. Read from SUPABASE_URL when not set.
    /// The service role key is always read from SUPABASE_SERVICE_ROLE_KEY
    #[arg(long)]
    pub url: Option<String>,

    /// Number of rows per write request
    #[arg(long, default_value_t = 500)]
    pub batch_size: usize,

    /// Number of attempts for a failing write. Exponential backoff is used,
    /// doubling the wait after every failed attempt
    #[arg(long, default_value_t = 5)]
    pub max_attempts: usize,

    /// Wait in seconds before the first retry
    #[arg(long, default_value_t = 1.0)]
    pub base_backoff_secs: f64,

    /// Log level
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,

    /// NDJSON input file, one row object per line. Reads stdin when omitted
    pub input: Option<PathBuf>,
}

impl Args {
    pub fn read_rows(&self) -> anyhow::Result<Rows> {
        return match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Unable to open {}", path.display()))?;
                read_ndjson(BufReader::new(file))
            }
            None => read_ndjson(std::io::stdin().lock()),
        };
    }
}

fn read_ndjson(reader: impl BufRead) -> anyhow::Result<Rows> {
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        let row: Row = serde_json::from_str(&line)
            .with_context(|| format!("Invalid row object on line {}", idx + 1))?;
        rows.push(row);
    }
    return Ok(rows);
}
