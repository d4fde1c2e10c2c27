//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Backend Ports
//!
//! - `ProfileApi` - Personal profiles and profile images
//! - `BusinessApi` - Business pages and their products/services
//! - `SearchApi` - Network search
//!
//! ## Local Ports
//!
//! - `SessionStorage` - Persisted sign-in state

mod api_error;
mod business_api;
mod profile_api;
mod search_api;
mod session_storage;

pub use api_error::ApiError;
pub use business_api::BusinessApi;
pub use profile_api::ProfileApi;
pub use search_api::{SearchApi, SearchResult};
pub use session_storage::{SessionStorage, SessionStorageError};
