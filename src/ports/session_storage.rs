//! Session Storage Port - Interface for persisting sign-in state.
//!
//! Plays the role of the browser cookie: the session survives restarts
//! until it is cleared on logout.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::session::Session;

/// Errors that can occur during session storage operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStorageError {
    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<SessionStorageError> for DomainError {
    fn from(err: SessionStorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for persisting and loading the session
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Load the persisted session
    ///
    /// # Returns
    /// `None` when nothing has been persisted yet
    async fn load(&self) -> Result<Option<Session>, SessionStorageError>;

    /// Persist the session, replacing any previous one
    async fn save(&self, session: &Session) -> Result<(), SessionStorageError>;

    /// Remove the persisted session
    ///
    /// Clearing an empty store is not an error.
    async fn clear(&self) -> Result<(), SessionStorageError>;
}
