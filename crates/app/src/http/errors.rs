//! HTTP client errors.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors surfaced by [`super::ApiClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The base URL or a request path could not be turned into a URL.
    #[error("invalid API url: {0}")]
    InvalidUrl(String),

    /// Transport failure or an undecodable response body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
}

impl ApiError {
    /// Response status, when the failure carries one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(source) => source.status(),
            Self::InvalidUrl(_) => None,
        }
    }

    /// Message reported by the backend, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Http(_) | Self::InvalidUrl(_) => None,
        }
    }
}

/// JSON error body the backend sends alongside failures. Its `status` field repeats the
/// status line and is not read.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub message: String,
}

/// Pull a human-readable message out of an error body.
pub(crate) fn error_message(body: &str) -> Option<String> {
    if let Ok(response) = serde_json::from_str::<ErrorResponse>(body) {
        return Some(response.message);
    }

    let body = body.trim();

    (!body.is_empty()).then(|| body.to_string())
}
