//! Crate error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed element id {raw:?}: {reason}")]
    MalformedId { raw: String, reason: &'static str },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(raw: &str, reason: &'static str) -> Self {
        Error::MalformedId { raw: raw.to_string(), reason }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
