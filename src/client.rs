use crate::chunk;
use crate::config::Config;
use crate::error::Error;
use crate::postgrest::PostgrestBackend;
use crate::request::{WriteBackend, WriteKind, WriteRequest};
use crate::retry::{self, RetryPolicy};
use crate::row::Row;

/// Write-path client for one service endpoint. Holds only immutable
/// configuration, so a single instance can be shared across call sites.
pub struct Client {
    backend: Box<dyn WriteBackend>,
    default_schema: String,
    retry: RetryPolicy,
    batch_size: usize,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, Error> {
        config.validate()?;
        let backend = PostgrestBackend::new(&config)?;
        return Self::with_backend(Box::new(backend), config);
    }

    /// Builds a client over an arbitrary backend. The url and key of the
    /// config are unused here; the backend owns its own transport.
    pub fn with_backend(backend: Box<dyn WriteBackend>, config: Config) -> Result<Self, Error> {
        config.validate()?;
        return Ok(Self {
            backend,
            default_schema: config.default_schema,
            retry: config.retry,
            batch_size: config.batch_size,
        });
    }

    /// Inserts `rows` into `table`, one request per batch. Running this twice
    /// with the same rows may create duplicates unless the table prevents it.
    pub fn insert_rows(&self, table: &str, rows: &[Row], schema: Option<&str>) -> Result<(), Error> {
        return self.write_rows(table, rows, schema, WriteKind::Insert);
    }

    /// Upserts `rows` into `table`. Rows matching an existing record on the
    /// `on_conflict` columns (comma-separated) are updated in place, the rest
    /// are inserted. Safe to re-run after a failure as long as `on_conflict`
    /// matches a uniqueness constraint on the table; this layer does not
    /// verify that it does.
    pub fn upsert_rows(
        &self,
        table: &str,
        rows: &[Row],
        on_conflict: &str,
        schema: Option<&str>,
    ) -> Result<(), Error> {
        return self.write_rows(table, rows, schema, WriteKind::Upsert { on_conflict });
    }

    /// Batches stay strictly sequential: the next one starts only once the
    /// previous one has fully resolved, retries included. On a terminal
    /// failure the error of the failing batch is propagated and the remaining
    /// batches are never attempted; batches already written stay written.
    fn write_rows(
        &self,
        table: &str,
        rows: &[Row],
        schema: Option<&str>,
        kind: WriteKind,
    ) -> Result<(), Error> {
        if rows.is_empty() {
            return Ok(());
        }
        let schema = schema.unwrap_or(&self.default_schema);
        for batch in chunk::chunk(rows, self.batch_size) {
            let request = WriteRequest {
                schema,
                table,
                rows: batch,
                kind,
            };
            retry::execute(&self.retry, || self.backend.write(&request))?;
        }
        return Ok(());
    }
}
