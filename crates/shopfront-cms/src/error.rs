//! Catalog source error types.

use thiserror::Error;

/// Errors that can occur while fetching the catalog.
///
/// A fetch is all-or-nothing: any of these means no products were returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The CMS answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The response body was not the expected query result.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The source is misconfigured.
    #[error("Invalid configuration: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::ParseError(e.to_string())
    }
}

impl FetchError {
    /// HTTP status reported by the CMS, if the failure was an HTTP error.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
