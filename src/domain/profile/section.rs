//! Editable list sections (experience, education, expertise, wishes).
//!
//! A section is a list of entries plus one visibility flag for the whole
//! section. Entries are either drafts or persisted rows, see [`RecordState`].

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DraftId, RecordState, ValidationError, Visibility};

/// Behaviour shared by every entry type that lives in a [`Section`].
pub trait SectionEntry {
    type Id;

    /// An empty draft, as created by the "add" button.
    fn new_draft() -> Self;

    fn state(&self) -> &RecordState<Self::Id>;

    /// True when the user has not typed anything into the entry.
    fn is_blank(&self) -> bool;

    /// Pre-submit check for required fields.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Ordered entries, drafts and persisted rows mixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryList<E> {
    pub entries: Vec<E>,
}

impl<E> Default for EntryList<E> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<E: SectionEntry> EntryList<E> {
    pub fn new(entries: Vec<E>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.iter()
    }

    /// Appends an empty draft and hands it back for editing.
    pub fn add_draft(&mut self) -> &mut E {
        self.entries.push(E::new_draft());
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    pub fn find_draft_mut(&mut self, draft: DraftId) -> Option<&mut E> {
        self.entries.iter_mut().find(|e| e.state().draft() == Some(draft))
    }

    /// Drops an unsaved entry.
    pub fn remove_draft(&mut self, draft: DraftId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.state().draft() != Some(draft));
        self.entries.len() != before
    }

    /// Drops a saved entry; the backend deletes it on the next save.
    pub fn remove_persisted(&mut self, id: &E::Id) -> bool
    where
        E::Id: PartialEq,
    {
        let before = self.entries.len();
        self.entries.retain(|e| e.state().id() != Some(id));
        self.entries.len() != before
    }

    /// Removes drafts the user never filled in.
    pub fn prune_blank_drafts(&mut self) {
        self.entries.retain(|e| !(e.state().is_new() && e.is_blank()));
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.entries.iter().try_for_each(|e| e.validate())
    }

    pub fn drafts(&self) -> impl Iterator<Item = &E> {
        self.entries.iter().filter(|e| e.state().is_new())
    }
}

/// Profile section: an [`EntryList`] plus one visibility flag for the whole
/// section. List operations are reached through `Deref`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section<E> {
    pub list: EntryList<E>,
    pub visibility: Visibility,
}

impl<E> Default for Section<E> {
    fn default() -> Self {
        Self {
            list: EntryList::default(),
            visibility: Visibility::Public,
        }
    }
}

impl<E: SectionEntry> Section<E> {
    pub fn new(entries: Vec<E>, visibility: Visibility) -> Self {
        Self {
            list: EntryList::new(entries),
            visibility,
        }
    }

    pub fn toggle_visibility(&mut self) {
        self.visibility.toggle();
    }
}

impl<E> Deref for Section<E> {
    type Target = EntryList<E>;

    fn deref(&self) -> &EntryList<E> {
        &self.list
    }
}

impl<E> DerefMut for Section<E> {
    fn deref_mut(&mut self) -> &mut EntryList<E> {
        &mut self.list
    }
}

/// Shared required-field check.
pub(crate) fn require(value: &str, field: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::empty_field(field))
    } else {
        Ok(())
    }
}

/// True when every given field is blank.
pub(crate) fn all_blank(values: &[&str]) -> bool {
    values.iter().all(|v| v.trim().is_empty())
}
