use std::fmt;

use async_trait::async_trait;

use crate::core::character::CharacterRecord;

/// Errors that can occur while fetching characters.
/// None of them are retried; the caller logs and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned a non-success status.
    Api { status: u16, message: String },
    /// Body was not the expected JSON.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Returns the name of the source, for logs.
    fn name(&self) -> &str;

    /// Fetches the first page of characters.
    async fn fetch_characters(&self) -> Result<Vec<CharacterRecord>, FetchError>;
}
