//! SearchNetwork - Query handler for searching the signed-in user's network.

use std::sync::Arc;

use crate::application::SessionStore;
use crate::domain::foundation::DomainError;
use crate::ports::{SearchApi, SearchResult};

/// Query text typed into the search box.
#[derive(Debug, Clone)]
pub struct SearchNetworkQuery {
    pub query: String,
}

/// Handler for network search.
pub struct SearchNetworkHandler {
    api: Arc<dyn SearchApi>,
    session: Arc<SessionStore>,
}

impl SearchNetworkHandler {
    pub fn new(api: Arc<dyn SearchApi>, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }

    pub async fn handle(&self, query: SearchNetworkQuery) -> Result<Vec<SearchResult>, DomainError> {
        let text = query.query.trim();
        if text.is_empty() {
            return Err(DomainError::validation("query", "Search query cannot be empty"));
        }

        let searcher = self.session.require_profile_uid().await?;
        let results = self.api.search(&searcher, text).await?;

        tracing::debug!(
            profile_uid = %searcher,
            query = text,
            results = results.len(),
            "Network searched"
        );

        Ok(results)
    }
}
