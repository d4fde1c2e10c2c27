//! In-Memory Session Storage Adapter
//!
//! Keeps the session in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::session::Session;
use crate::ports::{SessionStorage, SessionStorageError};

/// In-memory storage for the session
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStorage {
    session: Arc<RwLock<Option<Session>>>,
}

impl InMemorySessionStorage {
    /// Create an empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds a session
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Arc::new(RwLock::new(Some(session))),
        }
    }

    /// Whether a session is currently stored
    pub async fn is_empty(&self) -> bool {
        self.session.read().await.is_none()
    }
}

#[async_trait]
impl SessionStorage for InMemorySessionStorage {
    async fn load(&self) -> Result<Option<Session>, SessionStorageError> {
        Ok(self.session.read().await.clone())
    }

    async fn save(&self, session: &Session) -> Result<(), SessionStorageError> {
        *self.session.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStorageError> {
        *self.session.write().await = None;
        Ok(())
    }
}
