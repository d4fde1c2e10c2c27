//! SaveProfile - Command handler for submitting an edited profile.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::profile::Profile;
use crate::ports::ProfileApi;

/// Command to save a profile after editing.
#[derive(Debug, Clone)]
pub struct SaveProfileCommand {
    pub profile: Profile,
}

/// Handler for saving profiles.
pub struct SaveProfileHandler {
    api: Arc<dyn ProfileApi>,
}

impl SaveProfileHandler {
    pub fn new(api: Arc<dyn ProfileApi>) -> Self {
        Self { api }
    }

    /// Prunes untouched drafts, validates and submits.
    ///
    /// Returns the profile as the backend stored it, so drafts come back
    /// with their assigned identifiers.
    pub async fn handle(&self, cmd: SaveProfileCommand) -> Result<Profile, DomainError> {
        let mut profile = cmd.profile;

        // 1. Drop blank drafts and check required fields
        profile.prepare_for_submit()?;

        // 2. Submit
        let saved = self.api.save_profile(&profile).await?;

        tracing::info!(profile_uid = %saved.uid, "Profile saved");

        Ok(saved)
    }
}
