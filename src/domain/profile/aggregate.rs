//! Profile aggregate root.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    BusinessLinkUid, BusinessUid, ProfileUid, RecordState, ValidationError, Visibility,
};

use super::{Education, Experience, Expertise, PersonalInfo, Section, TemplateId, Wish};

/// Membership of the profile in a business, with the person's role there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessLink {
    pub state: RecordState<BusinessLinkUid>,
    pub business_uid: BusinessUid,
    pub role: String,
    pub visibility: Visibility,
}

/// A person's profile with all editable sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub uid: ProfileUid,
    pub personal: PersonalInfo,
    pub experience: Section<Experience>,
    pub education: Section<Education>,
    pub expertise: Section<Expertise>,
    pub wishes: Section<Wish>,
    pub businesses: Vec<BusinessLink>,
    pub template: TemplateId,
}

impl Profile {
    /// An empty profile for a freshly created account.
    pub fn new(uid: ProfileUid) -> Self {
        Self {
            uid,
            personal: PersonalInfo::default(),
            experience: Section::default(),
            education: Section::default(),
            expertise: Section::default(),
            wishes: Section::default(),
            businesses: Vec::new(),
            template: TemplateId::default(),
        }
    }

    /// Public businesses, in display order.
    pub fn public_businesses(&self) -> impl Iterator<Item = &BusinessUid> {
        self.businesses
            .iter()
            .filter(|link| link.visibility.is_public())
            .map(|link| &link.business_uid)
    }

    /// Drops untouched drafts and runs the required-field checks.
    ///
    /// Called right before the profile goes over the wire.
    pub fn prepare_for_submit(&mut self) -> Result<(), ValidationError> {
        self.experience.prune_blank_drafts();
        self.education.prune_blank_drafts();
        self.expertise.prune_blank_drafts();
        self.wishes.prune_blank_drafts();
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.personal.validate()?;
        self.experience.validate()?;
        self.education.validate()?;
        self.expertise.validate()?;
        self.wishes.validate()?;
        Ok(())
    }
}
