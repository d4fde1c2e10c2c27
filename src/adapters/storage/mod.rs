//! Storage Adapters
//!
//! Implementations of the SessionStorage port.
//!
//! ## Available Adapters
//!
//! - **FileSessionStorage** - Stores the session as a YAML file on disk
//! - **InMemorySessionStorage** - Stores the session in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSessionStorage, InMemorySessionStorage};
//!
//! // Production: file-based storage
//! let storage = FileSessionStorage::new("./data/session.yaml");
//!
//! // Testing: in-memory storage
//! let storage = InMemorySessionStorage::new();
//! ```

mod file_session_storage;
mod in_memory_session_storage;

pub use file_session_storage::FileSessionStorage;
pub use in_memory_session_storage::InMemorySessionStorage;
