//! SearchApi port for browsing the referral network

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ProfileUid;

use super::ApiError;

/// One person found in the network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub profile_uid: ProfileUid,
    pub name: String,
    pub tag_line: String,
    pub image_url: Option<String>,
    /// Connection distance from the searcher (1 = direct)
    pub degree: Option<u8>,
    /// Expertise titles that matched the query
    pub matched_expertise: Vec<String>,
}

/// Network search
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Search the network as seen from `searcher`
    async fn search(
        &self,
        searcher: &ProfileUid,
        query: &str,
    ) -> Result<Vec<SearchResult>, ApiError>;
}
