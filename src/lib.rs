pub mod args;
pub mod chunk;
pub mod client;
pub mod config;
pub mod error;
pub mod postgrest;
pub mod request;
pub mod retry;
pub mod row;

use std::time::Duration;

use anyhow::Context;
use tracing::info;

pub fn run(args: args::Args) -> anyhow::Result<()> {
    let rows = args.read_rows()?;
    let mut config = config::Config::resolve(args.url.clone(), None)?;
    config.batch_size = args.batch_size;
    config.retry = retry::RetryPolicy {
        max_attempts: args.max_attempts,
        base_backoff: Duration::try_from_secs_f64(args.base_backoff_secs)
            .context("Invalid base backoff")?,
    };
    let client = client::Client::new(config)?;
    let schema = args.schema.as_deref();
    match &args.on_conflict {
        Some(on_conflict) => client.upsert_rows(&args.table, &rows, on_conflict, schema)?,
        None => client.insert_rows(&args.table, &rows, schema)?,
    }
    info!("Wrote {} rows into table {}", rows.len(), args.table);
    return Ok(());
}
