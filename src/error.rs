//! Error types for the wallet API client.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while issuing wallet API requests.
///
/// Every variant originates in the transport layer; the wallet client
/// itself never raises or wraps errors on top of what the transport
/// reports.
#[derive(Error, Debug)]
pub enum Error {
    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Query-string serialization error.
    #[error("Query encoding error: {0}")]
    UrlEncode(#[from] serde_urlencoded::ser::Error),

    /// Generic error with context.
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(format!("{:#}", err))
    }
}
