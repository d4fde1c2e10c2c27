//! Errors returned by the REST backend ports.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Failure talking to the backend.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Could not decode backend response: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// True for failures a user may fix by simply trying again.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<ApiError> for DomainError {
    fn from(err: ApiError) -> Self {
        let code = match &err {
            ApiError::Transport(_) => ErrorCode::BackendUnavailable,
            ApiError::Status { status, .. } if *status >= 500 => ErrorCode::BackendUnavailable,
            ApiError::Status { .. } => ErrorCode::BackendRejected,
            ApiError::NotFound(_) => ErrorCode::NotFound,
            ApiError::Decode(_) => ErrorCode::MalformedResponse,
            ApiError::InvalidRequest(_) => ErrorCode::ValidationFailed,
        };
        DomainError::new(code, err.to_string())
    }
}
