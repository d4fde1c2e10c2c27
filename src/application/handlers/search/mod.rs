//! Search handlers.

mod search_network;

pub use search_network::{SearchNetworkHandler, SearchNetworkQuery};
