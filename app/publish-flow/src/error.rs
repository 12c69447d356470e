/// Error types for the publishing flow
///
/// Validation failures gate navigation locally and are never thrown; the
/// variants here cross a subsystem boundary (network, credentials, resume).
use thiserror::Error;
use vidora_api::ApiError;

/// Result type for publish-flow operations
pub type Result<T> = std::result::Result<T, FlowError>;

#[derive(Error, Debug, Clone)]
pub enum FlowError {
    /// Local precondition failed before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// No credential available; aborts before any network call
    #[error("Authentication required")]
    AuthenticationRequired,

    /// A network phase failed, carrying the backend message or a fallback
    #[error("Network error: {0}")]
    Network(String),

    /// Resume requested against a missing or expired draft
    #[error("Draft not found: {0}")]
    DraftNotFound(String),
}

impl From<ApiError> for FlowError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Authentication(_) => FlowError::AuthenticationRequired,
            ApiError::NotFound(msg) => FlowError::DraftNotFound(msg),
            other => FlowError::Network(other.to_string()),
        }
    }
}
