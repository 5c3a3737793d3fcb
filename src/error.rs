use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing or invalid configuration: {0}")]
    Config(&'static str),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("Remote service rejected the write ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
