use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::error::Error;
use crate::request::{WriteBackend, WriteKind, WriteRequest};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues write requests against the PostgREST interface of the service.
/// The same service-role key is sent both as the `apikey` header and as a
/// bearer token, which is what the hosted services expect.
pub struct PostgrestBackend {
    http: reqwest::blocking::Client,
    url: String,
    service_role_key: String,
}

impl PostgrestBackend {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        return Ok(Self {
            http,
            url: config.url.trim_end_matches('/').to_string(),
            service_role_key: config.service_role_key.clone(),
        });
    }
}

impl WriteBackend for PostgrestBackend {
    fn write(&self, request: &WriteRequest) -> Result<(), Error> {
        let url = format!("{}/rest/v1/{}", self.url, request.table);
        let mut builder = self
            .http
            .post(&url)
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .header("Content-Profile", request.schema);
        builder = match request.kind {
            WriteKind::Insert => builder.header("Prefer", "return=minimal"),
            WriteKind::Upsert { on_conflict } => builder
                .header("Prefer", "resolution=merge-duplicates,return=minimal")
                .query(&[("on_conflict", on_conflict)]),
        };
        let response = builder.json(request.rows).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Rejected { status, body });
        }
        debug!(
            "Wrote {} rows into {}.{}",
            request.rows.len(),
            request.schema,
            request.table
        );
        return Ok(());
    }
}
