//! Service errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::http::ApiError;

/// Failure of a storefront API call, classified by the status codes callers react to.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("resource not found")]
    NotFound,

    #[error("resource already exists")]
    Conflict,

    #[error("request rejected{}", detail(.0))]
    BadRequest(Option<String>),

    #[error("not authorized{}", detail(.0))]
    Unauthorized(Option<String>),

    #[error(transparent)]
    Api(ApiError),
}

impl ServiceError {
    /// Message reported by the backend, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::BadRequest(message) | Self::Unauthorized(message) => message.as_deref(),
            Self::Api(source) => source.message(),
            Self::NotFound | Self::Conflict => None,
        }
    }
}

impl From<ApiError> for ServiceError {
    fn from(error: ApiError) -> Self {
        match error.status() {
            Some(StatusCode::NOT_FOUND) => Self::NotFound,
            Some(StatusCode::CONFLICT) => Self::Conflict,
            Some(StatusCode::BAD_REQUEST) => Self::BadRequest(error.message().map(str::to_string)),
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => {
                Self::Unauthorized(error.message().map(str::to_string))
            }
            _ => Self::Api(error),
        }
    }
}

fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|message| format!(": {message}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: StatusCode, message: Option<&str>) -> ApiError {
        ApiError::Status {
            status,
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn maps_tailored_statuses() {
        assert!(matches!(
            ServiceError::from(status(StatusCode::NOT_FOUND, None)),
            ServiceError::NotFound
        ));
        assert!(matches!(
            ServiceError::from(status(StatusCode::CONFLICT, None)),
            ServiceError::Conflict
        ));
        assert!(matches!(
            ServiceError::from(status(StatusCode::BAD_REQUEST, None)),
            ServiceError::BadRequest(None)
        ));
    }

    #[test]
    fn keeps_other_failures_as_api_errors() {
        let error = ServiceError::from(status(StatusCode::INTERNAL_SERVER_ERROR, Some("boom")));

        assert!(matches!(error, ServiceError::Api(_)));
        assert_eq!(error.message(), Some("boom"));
    }

    #[test]
    fn display_includes_backend_message() {
        let error = ServiceError::from(status(StatusCode::UNAUTHORIZED, Some("Bad credentials")));

        assert_eq!(error.to_string(), "not authorized: Bad credentials");
    }
}
