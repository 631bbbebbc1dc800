use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Network error, status = {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error("HTML could not be parsed")]
    BadHTML,
    #[error("Malformed API payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("Invalid request url: {0}")]
    InvalidUrl(String),
    #[error("Unknown home section: {0}")]
    UnknownSection(String),
}

pub type Result<T> = core::result::Result<T, SourceError>;
