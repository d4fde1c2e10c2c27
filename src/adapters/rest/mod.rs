//! REST Adapter
//!
//! Implements the backend ports over HTTP.
//!
//! - `dto` - Wire shapes with the backend's key names
//! - `mapper` - The single wire <-> domain translation
//! - `client` - reqwest client implementing `ProfileApi`, `BusinessApi`, `SearchApi`

mod client;
pub mod dto;
pub mod mapper;

pub use client::{RestClient, RestClientConfig};
