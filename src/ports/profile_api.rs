//! ProfileApi port for personal profile operations on the backend

use async_trait::async_trait;

use crate::domain::foundation::ProfileUid;
use crate::domain::profile::{ImageUpload, Profile};

use super::ApiError;

/// Remote store of personal profiles
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Fetch a full profile with all sections
    async fn fetch_profile(&self, uid: &ProfileUid) -> Result<Profile, ApiError>;

    /// Replace a profile; the backend creates drafts, updates persisted
    /// entries and deletes entries missing from the submission.
    ///
    /// Returns the profile as stored, with identifiers assigned.
    async fn save_profile(&self, profile: &Profile) -> Result<Profile, ApiError>;

    /// Upload a profile picture and return its public URL
    async fn upload_profile_image(
        &self,
        uid: &ProfileUid,
        image: &ImageUpload,
    ) -> Result<String, ApiError>;
}
