//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `rest` - HTTP client for the Every Circle backend
//! - `storage` - Session persistence (file, in-memory)

pub mod rest;
pub mod storage;

pub use rest::{RestClient, RestClientConfig};
pub use storage::{FileSessionStorage, InMemorySessionStorage};
