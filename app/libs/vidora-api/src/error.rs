//! Unified error handling for platform API calls
//!
//! Provides consistent error types shared by every caller of the API client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Unified error type for platform API communication
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "error_type", content = "details")]
pub enum ApiError {
    /// Authentication failed
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Authorization failed
    #[error("Authorization failed: {0}")]
    Authorization(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Conflict (e.g., resource already exists)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Service unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Timeout
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Transport-level failure (connect, TLS, body read)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Authentication(_) => 401,
            Self::Authorization(_) => 403,
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
            Self::ServiceUnavailable(_) => 503,
            Self::Timeout(_) => 504,
            Self::Transport(_) => 502,
            Self::InvalidRequest(_) => 400,
        }
    }

    /// Map an HTTP status from the backend into a typed error
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => Self::InvalidRequest(message),
            401 => Self::Authentication(message),
            403 => Self::Authorization(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            503 => Self::ServiceUnavailable(message),
            504 => Self::Timeout(message),
            _ => Self::Internal(message),
        }
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ServiceUnavailable(_) | Self::Timeout(_) | Self::Transport(_)
        )
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_is_symmetric_for_common_codes() {
        for code in [400u16, 401, 403, 404, 409, 503, 504] {
            let err = ApiError::from_status(code, "boom".into());
            assert_eq!(err.status_code(), code);
        }
    }

    #[test]
    fn unknown_status_maps_to_internal() {
        let err = ApiError::from_status(418, "teapot".into());
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn retryable_classification() {
        assert!(ApiError::Timeout("t".into()).is_retryable());
        assert!(ApiError::ServiceUnavailable("s".into()).is_retryable());
        assert!(!ApiError::NotFound("n".into()).is_retryable());
        assert!(!ApiError::Authentication("a".into()).is_retryable());
    }
}
