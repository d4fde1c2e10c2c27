//! LoadProfile - Query handler for fetching a full profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProfileUid};
use crate::domain::profile::Profile;
use crate::ports::ProfileApi;

/// Query to load a profile.
#[derive(Debug, Clone)]
pub struct LoadProfileQuery {
    pub profile_uid: ProfileUid,
}

/// Handler for loading profiles.
pub struct LoadProfileHandler {
    api: Arc<dyn ProfileApi>,
}

impl LoadProfileHandler {
    pub fn new(api: Arc<dyn ProfileApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, query: LoadProfileQuery) -> Result<Profile, DomainError> {
        let profile = self.api.fetch_profile(&query.profile_uid).await?;

        tracing::debug!(
            profile_uid = %profile.uid,
            expertise = profile.expertise.len(),
            wishes = profile.wishes.len(),
            businesses = profile.businesses.len(),
            "Profile loaded"
        );

        Ok(profile)
    }
}
