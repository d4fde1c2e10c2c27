//! Integration tests: session lifecycle over the file-backed store.

use std::sync::Arc;

use tempfile::TempDir;

use every_circle::adapters::FileSessionStorage;
use every_circle::application::SessionStore;
use every_circle::domain::foundation::{ProfileUid, UserUid};
use every_circle::domain::session::SessionUser;

fn user() -> SessionUser {
    SessionUser {
        user_uid: UserUid::new("100-000001").unwrap(),
        profile_uid: ProfileUid::new("110-000001").unwrap(),
        email: "jane@example.com".to_string(),
    }
}

fn store(dir: &TempDir) -> SessionStore {
    SessionStore::new(Arc::new(FileSessionStorage::new(
        dir.path().join("session.yaml"),
    )))
}

#[tokio::test]
async fn session_survives_restart_until_logout() {
    let dir = TempDir::new().unwrap();

    // First run: referral link, then sign in
    let first = store(&dir);
    first.init().await.unwrap();
    first.set_referral_id("110-000042").await.unwrap();
    first.sign_in(user()).await.unwrap();

    // Second run restores everything
    let second = store(&dir);
    let restored = second.init().await.unwrap();
    assert_eq!(restored.profile_uid().unwrap().as_str(), "110-000001");
    assert_eq!(restored.referral_id.as_deref(), Some("110-000042"));

    second.logout().await.unwrap();

    // Third run starts anonymous
    let third = store(&dir);
    let session = third.init().await.unwrap();
    assert!(!session.is_signed_in());
    assert!(session.referral_id.is_none());
}

#[tokio::test]
async fn corrupt_session_file_surfaces_storage_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("session.yaml"), "user: {{{").unwrap();

    let err = store(&dir).init().await.unwrap_err();

    assert_eq!(err.code.to_string(), "STORAGE_ERROR");
}
