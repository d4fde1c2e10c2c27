//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the Every Circle domain.

mod errors;
mod ids;
mod record;
mod timestamp;
mod visibility;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    BusinessLinkUid, BusinessUid, DraftId, EducationUid, ExperienceUid, ExpertiseUid, ProfileUid,
    ServiceUid, UserUid, WishUid,
};
pub use record::RecordState;
pub use timestamp::Timestamp;
pub use visibility::Visibility;
