//! Persistence state of a list entry.
//!
//! Every editable entry (experience, expertise, service, ...) is either a
//! draft the user is typing into or a row the backend already knows about.
//! The distinction decides between the input form and the display card, and
//! between create and update on submit.

use serde::{Deserialize, Serialize};

use super::DraftId;

/// Whether an entry has been assigned a backend identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RecordState<I> {
    /// Not yet saved; keyed locally.
    New { draft: DraftId },
    /// Saved; keyed by the backend identifier.
    Persisted { id: I },
}

impl<I> RecordState<I> {
    /// A fresh draft key.
    pub fn new_draft() -> Self {
        RecordState::New {
            draft: DraftId::new(),
        }
    }

    /// Wraps a backend identifier.
    pub fn persisted(id: I) -> Self {
        RecordState::Persisted { id }
    }

    /// Builds the state from an optional backend identifier.
    pub fn from_option(id: Option<I>) -> Self {
        match id {
            Some(id) => Self::persisted(id),
            None => Self::new_draft(),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, RecordState::New { .. })
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self, RecordState::Persisted { .. })
    }

    /// Backend identifier, if persisted.
    pub fn id(&self) -> Option<&I> {
        match self {
            RecordState::Persisted { id } => Some(id),
            RecordState::New { .. } => None,
        }
    }

    /// Draft key, if unsaved.
    pub fn draft(&self) -> Option<DraftId> {
        match self {
            RecordState::New { draft } => Some(*draft),
            RecordState::Persisted { .. } => None,
        }
    }
}
