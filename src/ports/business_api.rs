//! BusinessApi port for business pages on the backend

use async_trait::async_trait;

use crate::domain::business::Business;
use crate::domain::foundation::BusinessUid;

use super::ApiError;

/// Remote store of businesses
#[async_trait]
pub trait BusinessApi: Send + Sync {
    /// Fetch a business with its products and services
    async fn fetch_business(&self, uid: &BusinessUid) -> Result<Business, ApiError>;

    /// Create a draft business
    async fn create_business(&self, business: &Business) -> Result<Business, ApiError>;

    /// Update a persisted business
    async fn update_business(&self, business: &Business) -> Result<Business, ApiError>;
}
