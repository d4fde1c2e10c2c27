//! HydrateBusinessCards - Query handler that turns business ids into cards.
//!
//! Fetches run concurrently. A business that fails to load is logged and
//! left out; the rest are returned in the order they were asked for.

use std::sync::Arc;

use futures::future::join_all;

use crate::domain::business::BusinessCard;
use crate::domain::foundation::BusinessUid;
use crate::ports::BusinessApi;

/// Query for the cards of several businesses.
#[derive(Debug, Clone)]
pub struct HydrateBusinessCardsQuery {
    pub business_uids: Vec<BusinessUid>,
}

/// Handler for loading business mini-cards.
pub struct HydrateBusinessCardsHandler {
    api: Arc<dyn BusinessApi>,
}

impl HydrateBusinessCardsHandler {
    pub fn new(api: Arc<dyn BusinessApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, query: HydrateBusinessCardsQuery) -> Vec<BusinessCard> {
        let fetches = query.business_uids.iter().map(|uid| async move {
            match self.api.fetch_business(uid).await {
                Ok(business) => business.card(),
                Err(e) => {
                    tracing::warn!(business_uid = %uid, error = %e, "Skipping business card");
                    None
                }
            }
        });

        let cards: Vec<BusinessCard> = join_all(fetches).await.into_iter().flatten().collect();

        tracing::debug!(
            requested = query.business_uids.len(),
            loaded = cards.len(),
            "Business cards hydrated"
        );

        cards
    }
}
