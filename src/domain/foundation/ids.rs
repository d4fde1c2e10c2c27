//! Strongly-typed identifier value objects.
//!
//! Backend identifiers are opaque strings assigned by the server
//! (e.g. `"110-000231"`). Draft identifiers are generated locally to key
//! entries that have not been saved yet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Declares a server-assigned string identifier that cannot be blank.
macro_rules! backend_uid {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates the identifier, returning error if blank.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                let trimmed = id.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                if trimmed.len() == id.len() {
                    Ok(Self(id))
                } else {
                    Ok(Self(trimmed.to_string()))
                }
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

backend_uid!(
    /// Account identifier of a signed-in user.
    UserUid,
    "user_uid"
);

backend_uid!(
    /// Identifier of a personal profile.
    ProfileUid,
    "profile_uid"
);

backend_uid!(
    /// Identifier of a business.
    BusinessUid,
    "business_uid"
);

backend_uid!(
    /// Identifier of the profile-to-business membership row.
    BusinessLinkUid,
    "profile_business_uid"
);

backend_uid!(
    /// Identifier of a work experience entry.
    ExperienceUid,
    "profile_experience_uid"
);

backend_uid!(
    /// Identifier of an education entry.
    EducationUid,
    "profile_education_uid"
);

backend_uid!(
    /// Identifier of an expertise entry.
    ExpertiseUid,
    "profile_expertise_uid"
);

backend_uid!(
    /// Identifier of a wish ("seeking") entry.
    WishUid,
    "profile_wish_uid"
);

backend_uid!(
    /// Identifier of a business product or service.
    ServiceUid,
    "bs_uid"
);

/// Local key for an entry that has not been persisted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftId(Uuid);

impl DraftId {
    /// Creates a new random DraftId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a DraftId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DraftId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
