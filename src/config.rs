use crate::error::Error;
use crate::retry::RetryPolicy;

pub const URL_ENV: &str = "SUPABASE_URL";
pub const SERVICE_ROLE_KEY_ENV: &str = "SUPABASE_SERVICE_ROLE_KEY";

pub const DEFAULT_SCHEMA: &str = "raw";
pub const DEFAULT_BATCH_SIZE: usize = 500;

#[derive(Clone, Debug)]
pub struct Config {
    pub url: String,
    pub service_role_key: String,
    /// Schema used when a call doesn't override it.
    pub default_schema: String,
    pub retry: RetryPolicy,
    pub batch_size: usize,
}

impl Config {
    pub fn new(url: String, service_role_key: String) -> Self {
        return Self {
            url,
            service_role_key,
            default_schema: DEFAULT_SCHEMA.to_string(),
            retry: RetryPolicy::default(),
            batch_size: DEFAULT_BATCH_SIZE,
        };
    }

    /// Builds a config from explicit values, falling back to the process
    /// environment for whichever is missing. Fails before any write is
    /// attempted.
    pub fn resolve(url: Option<String>, service_role_key: Option<String>) -> Result<Self, Error> {
        let url = url
            .or_else(|| env_var(URL_ENV))
            .ok_or(Error::Config("Set the SUPABASE_URL environment variable"))?;
        let service_role_key = service_role_key.or_else(|| env_var(SERVICE_ROLE_KEY_ENV)).ok_or(
            Error::Config("Set the SUPABASE_SERVICE_ROLE_KEY environment variable"),
        )?;
        return Ok(Self::new(url, service_role_key));
    }

    pub fn from_env() -> Result<Self, Error> {
        return Self::resolve(None, None);
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.url.is_empty() {
            return Err(Error::Config("Endpoint URL must not be empty"));
        }
        if self.service_role_key.is_empty() {
            return Err(Error::Config("Service role key must not be empty"));
        }
        if self.batch_size < 1 {
            return Err(Error::Config("Batch size must be at least 1"));
        }
        if self.retry.max_attempts < 1 {
            return Err(Error::Config("At least one write attempt is required"));
        }
        return Ok(());
    }
}

fn env_var(name: &str) -> Option<String> {
    return std::env::var(name).ok().filter(|value| !value.is_empty());
}
