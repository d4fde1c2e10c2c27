//! Business module - businesses and their products/services.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BusinessUid, RecordState, ServiceUid, ValidationError, Visibility};
use crate::domain::money::MoneyField;
use crate::domain::profile::{EntryList, SectionEntry};

/// A business page with its catalogue of products and services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub state: RecordState<BusinessUid>,
    pub name: String,
    pub tag_line: String,
    pub short_bio: String,
    pub website: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub image_url: Option<String>,
    pub visibility: Visibility,
    pub services: EntryList<BusinessService>,
}

impl Business {
    /// Empty business form.
    pub fn draft() -> Self {
        Self {
            state: RecordState::new_draft(),
            name: String::new(),
            tag_line: String::new(),
            short_bio: String::new(),
            website: String::new(),
            phone: String::new(),
            email: String::new(),
            location: String::new(),
            image_url: None,
            visibility: Visibility::Public,
            services: EntryList::default(),
        }
    }

    /// Mini-card projection; `None` for unsaved businesses.
    pub fn card(&self) -> Option<BusinessCard> {
        let uid = self.state.id()?.clone();
        Some(BusinessCard {
            uid,
            name: self.name.clone(),
            tag_line: self.tag_line.clone(),
            image_url: self.image_url.clone(),
        })
    }

    pub fn prepare_for_submit(&mut self) -> Result<(), ValidationError> {
        self.services.prune_blank_drafts();
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("business.name"));
        }
        self.services.validate()
    }
}

/// A product or service sold by a business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessService {
    pub state: RecordState<ServiceUid>,
    pub name: String,
    pub description: String,
    pub cost: MoneyField,
    pub bounty: MoneyField,
    pub visibility: Visibility,
}

impl SectionEntry for BusinessService {
    type Id = ServiceUid;

    fn new_draft() -> Self {
        Self {
            state: RecordState::new_draft(),
            name: String::new(),
            description: String::new(),
            cost: MoneyField::empty(),
            bounty: MoneyField::empty(),
            visibility: Visibility::Public,
        }
    }

    fn state(&self) -> &RecordState<ServiceUid> {
        &self.state
    }

    fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.description.trim().is_empty()
            && self.cost.is_empty()
            && self.bounty.is_empty()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("service.name"));
        }
        Ok(())
    }
}

/// Compact business summary shown in lists and search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCard {
    pub uid: BusinessUid,
    pub name: String,
    pub tag_line: String,
    pub image_url: Option<String>,
}
