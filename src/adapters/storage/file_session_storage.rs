//! File-based Session Storage Adapter
//!
//! Stores the session as a single YAML file, the on-disk stand-in for the
//! browser cookie.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::session::Session;
use crate::ports::{SessionStorage, SessionStorageError};

/// File-based storage for the session
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Create a storage that reads and writes `path`
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileSessionStorage::new("./data/session.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists
    async fn ensure_parent(&self) -> Result<(), SessionStorageError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
                .await
                .map_err(|e| SessionStorageError::IoError(e.to_string())),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn load(&self) -> Result<Option<Session>, SessionStorageError> {
        let yaml = match fs::read_to_string(&self.path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionStorageError::IoError(e.to_string())),
        };

        let session = serde_yaml::from_str(&yaml)
            .map_err(|e| SessionStorageError::DeserializationFailed(e.to_string()))?;

        Ok(Some(session))
    }

    async fn save(&self, session: &Session) -> Result<(), SessionStorageError> {
        self.ensure_parent().await?;

        let yaml = serde_yaml::to_string(session)
            .map_err(|e| SessionStorageError::SerializationFailed(e.to_string()))?;

        fs::write(&self.path, yaml)
            .await
            .map_err(|e| SessionStorageError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStorageError::IoError(e.to_string())),
        }
    }
}
