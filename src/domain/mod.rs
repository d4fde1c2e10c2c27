//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, record state, visibility, errors)
//! - `money` - Cost/bounty/amount string codec and field editor
//! - `profile` - Personal profile aggregate and its sections
//! - `business` - Business aggregate and its products/services
//! - `session` - Signed-in user and referral state

pub mod business;
pub mod foundation;
pub mod money;
pub mod profile;
pub mod session;
