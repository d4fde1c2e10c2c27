//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod business;
pub mod profile;
pub mod search;

pub use business::{
    HydrateBusinessCardsHandler, HydrateBusinessCardsQuery, SaveBusinessCommand,
    SaveBusinessHandler,
};
pub use profile::{
    LoadProfileHandler, LoadProfileQuery, SaveProfileCommand, SaveProfileHandler,
    UploadProfileImageCommand, UploadProfileImageHandler,
};
pub use search::{SearchNetworkHandler, SearchNetworkQuery};
