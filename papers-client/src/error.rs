use std::result;

use papers_parser::ParseError;
use thiserror::Error;

/// Error types for fetching and parsing PubMed records
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Invalid PMID format
    #[error("Invalid PMID format: {pmid}")]
    InvalidPmid { pmid: String },

    /// MEDLINE parsing failed
    #[error("MEDLINE parsing failed: {0}")]
    Parse(#[from] ParseError),
}

pub type Result<T> = result::Result<T, ClientError>;

impl ClientError {
    /// Whether the failure happened talking to the remote API rather than
    /// while handling its response
    pub fn is_api_failure(&self) -> bool {
        matches!(
            self,
            ClientError::RequestError(_) | ClientError::ApiError { .. }
        )
    }
}
