#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use rowpost::config::Config;
use rowpost::error::Error;
use rowpost::request::{WriteBackend, WriteKind, WriteRequest};
use rowpost::retry::RetryPolicy;
use rowpost::row::Row;

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedWrite {
    pub schema: String,
    pub table: String,
    pub rows: Vec<Row>,
    pub on_conflict: Option<String>,
}

#[derive(Default)]
struct Inner {
    writes: Mutex<Vec<RecordedWrite>>,
    // One outcome per incoming write, in order. Writes beyond the plan succeed.
    outcomes: Mutex<Vec<Result<(), ()>>>,
}

/// Records every write request it receives. A cloned handle observes the
/// writes made through the handle given to the client.
#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Arc<Inner>,
}

impl FakeBackend {
    pub fn new() -> Self {
        return Self::default();
    }

    pub fn with_outcomes(outcomes: Vec<Result<(), ()>>) -> Self {
        let backend = Self::default();
        *backend.inner.outcomes.lock().unwrap() = outcomes;
        return backend;
    }

    pub fn recorded(&self) -> Vec<RecordedWrite> {
        return self.inner.writes.lock().unwrap().clone();
    }
}

impl WriteBackend for FakeBackend {
    fn write(&self, request: &WriteRequest) -> Result<(), Error> {
        self.inner.writes.lock().unwrap().push(RecordedWrite {
            schema: request.schema.to_string(),
            table: request.table.to_string(),
            rows: request.rows.to_vec(),
            on_conflict: match request.kind {
                WriteKind::Insert => None,
                WriteKind::Upsert { on_conflict } => Some(on_conflict.to_string()),
            },
        });
        let mut outcomes = self.inner.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Ok(());
        }
        return match outcomes.remove(0) {
            Ok(()) => Ok(()),
            Err(()) => Err(Error::Rejected {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                body: "service unavailable".to_string(),
            }),
        };
    }
}

pub fn test_config(batch_size: usize, max_attempts: usize) -> Config {
    let mut config = Config::new(
        "https://example.supabase.co".to_string(),
        "service-role-key".to_string(),
    );
    config.batch_size = batch_size;
    config.retry = RetryPolicy {
        max_attempts,
        base_backoff: Duration::ZERO,
    };
    return config;
}

pub fn gen_row(id: usize) -> Row {
    let mut row = Row::new();
    row.insert("id".to_string(), serde_json::json!(id));
    row.insert("value".to_string(), serde_json::json!(format!("row-{id}")));
    return row;
}

pub fn gen_rows(count: usize) -> Vec<Row> {
    return (0..count).map(gen_row).collect();
}
