//! Business handlers.

mod hydrate_business_cards;
mod save_business;

pub use hydrate_business_cards::{HydrateBusinessCardsHandler, HydrateBusinessCardsQuery};
pub use save_business::{SaveBusinessCommand, SaveBusinessHandler};
