//! SaveBusiness - Command handler that creates or updates a business.

use std::sync::Arc;

use crate::domain::business::Business;
use crate::domain::foundation::DomainError;
use crate::ports::BusinessApi;

/// Command to save a business page.
#[derive(Debug, Clone)]
pub struct SaveBusinessCommand {
    pub business: Business,
}

/// Handler for saving businesses.
pub struct SaveBusinessHandler {
    api: Arc<dyn BusinessApi>,
}

impl SaveBusinessHandler {
    pub fn new(api: Arc<dyn BusinessApi>) -> Self {
        Self { api }
    }

    /// Creates a draft business or updates a persisted one.
    pub async fn handle(&self, cmd: SaveBusinessCommand) -> Result<Business, DomainError> {
        let mut business = cmd.business;
        business.prepare_for_submit()?;

        let saved = if business.state.is_new() {
            self.api.create_business(&business).await?
        } else {
            self.api.update_business(&business).await?
        };

        match saved.state.id() {
            Some(uid) => tracing::info!(business_uid = %uid, "Business saved"),
            None => tracing::warn!("Backend returned business without an id"),
        }

        Ok(saved)
    }
}
