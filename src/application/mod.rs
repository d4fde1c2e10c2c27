//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (save, upload) are kept apart from queries (load, hydrate, search).

pub mod handlers;
mod session_store;

pub use handlers::{
    // Profile handlers
    LoadProfileHandler, LoadProfileQuery, SaveProfileCommand, SaveProfileHandler,
    UploadProfileImageCommand, UploadProfileImageHandler,
    // Business handlers
    HydrateBusinessCardsHandler, HydrateBusinessCardsQuery, SaveBusinessCommand,
    SaveBusinessHandler,
    // Search handlers
    SearchNetworkHandler, SearchNetworkQuery,
};
pub use session_store::{SessionStore, DEFAULT_SESSION_MAX_AGE_DAYS};
