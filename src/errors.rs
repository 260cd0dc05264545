//! Typed failures of the backend clients.
//!
//! Each variant keeps the transport detail for diagnostics while its `Display`
//! text is the message shown to the user. The workflow converts every one of them
//! into the failed state's message; none travels further.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of the resolve call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// Non-2xx response carrying a structured `error` message, surfaced verbatim.
    #[error("{0}")]
    Rejected(String),
    /// Non-2xx response without a usable error body.
    #[error("request failed")]
    Status(u16),
    /// Transport failure before any response arrived.
    #[error("request failed")]
    Network(String),
    /// 2xx response whose body is not the expected shape.
    #[error("request failed")]
    Malformed(String),
}

/// Failure of the song fetch call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("{}", status_message(.0))]
    Status(u16),
    #[error("failed to fetch song data")]
    Network(String),
    #[error("failed to fetch song data")]
    Malformed(String),
}

fn status_message(code: &u16) -> String {
    if *code == StatusCode::NOT_FOUND.as_u16() {
        "song not found".to_string()
    } else {
        format!("API error: {code}")
    }
}

/// Configuration problems detected while building a client.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid API base url {url}: {reason}")]
    InvalidApiUrl { url: String, reason: String },
    #[error("http client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ConfigError {
    fn from(e: reqwest::Error) -> Self {
        ConfigError::Client(e.to_string())
    }
}
