//! SessionStore - Application state for the signed-in user.
//!
//! Holds the current session in memory and writes every change through to
//! the `SessionStorage` port. Created once at startup and passed to whatever
//! needs it.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileUid, Timestamp};
use crate::domain::session::{Session, SessionUser};
use crate::ports::SessionStorage;

/// Default number of days a persisted session stays valid.
pub const DEFAULT_SESSION_MAX_AGE_DAYS: i64 = 30;

/// Signed-in user and referral state, persisted across restarts.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    max_age_days: i64,
    current: RwLock<Session>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            max_age_days: DEFAULT_SESSION_MAX_AGE_DAYS,
            current: RwLock::new(Session::anonymous()),
        }
    }

    pub fn with_max_age_days(mut self, days: i64) -> Self {
        self.max_age_days = days;
        self
    }

    /// Restore the persisted session.
    ///
    /// A session older than the max age is cleared from storage and the
    /// store starts anonymous.
    pub async fn init(&self) -> Result<Session, DomainError> {
        let now = Timestamp::now();
        let restored = match self.storage.load().await? {
            Some(session) if session.is_expired(now, self.max_age_days) => {
                tracing::info!(
                    updated_at = %session.updated_at,
                    age_days = session.updated_at.days_until(&now),
                    "Discarding expired session"
                );
                self.storage.clear().await?;
                Session::anonymous()
            }
            Some(session) => session,
            None => Session::anonymous(),
        };

        tracing::debug!(signed_in = restored.is_signed_in(), "Session restored");
        *self.current.write().await = restored.clone();
        Ok(restored)
    }

    /// Record a successful sign-in. The referral id is kept.
    pub async fn sign_in(&self, user: SessionUser) -> Result<Session, DomainError> {
        let mut current = self.current.write().await;
        let mut next = current.clone();
        tracing::info!(profile_uid = %user.profile_uid, "Signed in");
        next.user = Some(user);
        next.updated_at = Timestamp::now();

        self.storage.save(&next).await?;
        *current = next.clone();
        Ok(next)
    }

    /// Remember which profile referred this user.
    pub async fn set_referral_id(&self, referral_id: impl Into<String>) -> Result<(), DomainError> {
        let referral_id = referral_id.into().trim().to_string();
        if referral_id.is_empty() {
            return Err(DomainError::validation("referral_id", "Referral id cannot be empty"));
        }

        let mut current = self.current.write().await;
        let mut next = current.clone();
        next.referral_id = Some(referral_id);
        next.updated_at = Timestamp::now();

        self.storage.save(&next).await?;
        *current = next;
        Ok(())
    }

    /// Snapshot of the current session.
    pub async fn current(&self) -> Session {
        self.current.read().await.clone()
    }

    /// Profile of the signed-in user.
    ///
    /// # Errors
    ///
    /// `NotSignedIn` when nobody is signed in.
    pub async fn require_profile_uid(&self) -> Result<ProfileUid, DomainError> {
        self.current
            .read()
            .await
            .profile_uid()
            .cloned()
            .ok_or_else(|| DomainError::new(ErrorCode::NotSignedIn, "No user is signed in"))
    }

    /// Forget the session everywhere.
    pub async fn logout(&self) -> Result<(), DomainError> {
        let mut current = self.current.write().await;
        self.storage.clear().await?;
        *current = Session::anonymous();
        tracing::info!("Signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStorage;
    use crate::domain::foundation::UserUid;
    use crate::ports::SessionStorageError;
    use async_trait::async_trait;

    fn user() -> SessionUser {
        SessionUser {
            user_uid: UserUid::new("100-000001").unwrap(),
            profile_uid: ProfileUid::new("110-000001").unwrap(),
            email: "jane@example.com".to_string(),
        }
    }

    struct FailingStorage;

    #[async_trait]
    impl SessionStorage for FailingStorage {
        async fn load(&self) -> Result<Option<Session>, SessionStorageError> {
            Ok(None)
        }

        async fn save(&self, _session: &Session) -> Result<(), SessionStorageError> {
            Err(SessionStorageError::IoError("disk full".to_string()))
        }

        async fn clear(&self) -> Result<(), SessionStorageError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn init_without_persisted_session_is_anonymous() {
        let store = SessionStore::new(Arc::new(InMemorySessionStorage::new()));
        let session = store.init().await.unwrap();
        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn init_restores_persisted_session() {
        let persisted = Session {
            user: Some(user()),
            ..Session::anonymous()
        };
        let storage = Arc::new(InMemorySessionStorage::with_session(persisted.clone()));
        let store = SessionStore::new(storage);

        assert_eq!(store.init().await.unwrap(), persisted);
        assert_eq!(store.current().await, persisted);
    }

    #[tokio::test]
    async fn init_discards_expired_session() {
        let persisted = Session {
            user: Some(user()),
            updated_at: Timestamp::now().checked_add_days(-31).unwrap(),
            ..Session::anonymous()
        };
        let storage = Arc::new(InMemorySessionStorage::with_session(persisted));
        let store = SessionStore::new(storage.clone()).with_max_age_days(30);

        let session = store.init().await.unwrap();

        assert!(!session.is_signed_in());
        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn init_with_huge_max_age_keeps_session() {
        let persisted = Session {
            user: Some(user()),
            ..Session::anonymous()
        };
        let storage = Arc::new(InMemorySessionStorage::with_session(persisted.clone()));
        let store = SessionStore::new(storage.clone()).with_max_age_days(100_000_000);

        assert_eq!(store.init().await.unwrap(), persisted);
        assert!(!storage.is_empty().await);
    }

    #[tokio::test]
    async fn init_keeps_session_stamped_at_end_of_calendar() {
        let persisted = Session {
            user: Some(user()),
            updated_at: Timestamp::from_datetime(chrono::DateTime::<chrono::Utc>::MAX_UTC),
            ..Session::anonymous()
        };
        let store = SessionStore::new(Arc::new(InMemorySessionStorage::with_session(
            persisted.clone(),
        )));

        assert_eq!(store.init().await.unwrap(), persisted);
    }

    #[tokio::test]
    async fn sign_in_persists_and_keeps_referral() {
        let storage = Arc::new(InMemorySessionStorage::new());
        let store = SessionStore::new(storage.clone());
        store.set_referral_id("110-000042").await.unwrap();

        store.sign_in(user()).await.unwrap();

        let persisted = storage.load().await.unwrap().unwrap();
        assert!(persisted.is_signed_in());
        assert_eq!(persisted.referral_id.as_deref(), Some("110-000042"));
        assert_eq!(
            store.require_profile_uid().await.unwrap().as_str(),
            "110-000001"
        );
    }

    #[tokio::test]
    async fn blank_referral_is_rejected() {
        let store = SessionStore::new(Arc::new(InMemorySessionStorage::new()));
        let err = store.set_referral_id("   ").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn logout_clears_storage_and_state() {
        let storage = Arc::new(InMemorySessionStorage::new());
        let store = SessionStore::new(storage.clone());
        store.sign_in(user()).await.unwrap();

        store.logout().await.unwrap();

        assert!(storage.is_empty().await);
        assert!(!store.current().await.is_signed_in());
        let err = store.require_profile_uid().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotSignedIn);
    }

    #[tokio::test]
    async fn failed_save_leaves_state_unchanged() {
        let store = SessionStore::new(Arc::new(FailingStorage));

        let err = store.sign_in(user()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(!store.current().await.is_signed_in());
    }
}
