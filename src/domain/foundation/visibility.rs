//! Public/private flag carried by profile fields and sections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a field or section is shown on the public profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn from_public(is_public: bool) -> Self {
        if is_public {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }

    /// Flips between public and private.
    pub fn toggle(&mut self) {
        *self = match self {
            Visibility::Public => Visibility::Private,
            Visibility::Private => Visibility::Public,
        };
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}
