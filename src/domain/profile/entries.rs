//! Entry types for the personal profile sections.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    EducationUid, ExperienceUid, ExpertiseUid, RecordState, ValidationError, Visibility, WishUid,
};
use crate::domain::money::MoneyField;

use super::section::{all_blank, require, SectionEntry};

/// Work history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub state: RecordState<ExperienceUid>,
    pub company: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub visibility: Visibility,
}

impl SectionEntry for Experience {
    type Id = ExperienceUid;

    fn new_draft() -> Self {
        Self {
            state: RecordState::new_draft(),
            company: String::new(),
            title: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            visibility: Visibility::Public,
        }
    }

    fn state(&self) -> &RecordState<ExperienceUid> {
        &self.state
    }

    fn is_blank(&self) -> bool {
        all_blank(&[
            self.company.as_str(),
            self.title.as_str(),
            self.start_date.as_str(),
            self.end_date.as_str(),
        ])
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.company, "experience.company")
    }
}

/// Schooling entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub state: RecordState<EducationUid>,
    pub school: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub visibility: Visibility,
}

impl SectionEntry for Education {
    type Id = EducationUid;

    fn new_draft() -> Self {
        Self {
            state: RecordState::new_draft(),
            school: String::new(),
            degree: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            visibility: Visibility::Public,
        }
    }

    fn state(&self) -> &RecordState<EducationUid> {
        &self.state
    }

    fn is_blank(&self) -> bool {
        all_blank(&[
            self.school.as_str(),
            self.degree.as_str(),
            self.start_date.as_str(),
            self.end_date.as_str(),
        ])
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.school, "education.school")
    }
}

/// Something the person offers, with a price and a referral bounty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expertise {
    pub state: RecordState<ExpertiseUid>,
    pub title: String,
    pub description: String,
    pub cost: MoneyField,
    pub bounty: MoneyField,
    pub visibility: Visibility,
}

impl SectionEntry for Expertise {
    type Id = ExpertiseUid;

    fn new_draft() -> Self {
        Self {
            state: RecordState::new_draft(),
            title: String::new(),
            description: String::new(),
            cost: MoneyField::empty(),
            bounty: MoneyField::empty(),
            visibility: Visibility::Public,
        }
    }

    fn state(&self) -> &RecordState<ExpertiseUid> {
        &self.state
    }

    fn is_blank(&self) -> bool {
        all_blank(&[
            self.title.as_str(),
            self.description.as_str(),
            self.cost.as_str(),
            self.bounty.as_str(),
        ])
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.title, "expertise.title")
    }
}

/// Something the person is seeking, with what they would pay for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wish {
    pub state: RecordState<WishUid>,
    pub title: String,
    pub description: String,
    pub amount: MoneyField,
    pub visibility: Visibility,
}

impl SectionEntry for Wish {
    type Id = WishUid;

    fn new_draft() -> Self {
        Self {
            state: RecordState::new_draft(),
            title: String::new(),
            description: String::new(),
            amount: MoneyField::empty(),
            visibility: Visibility::Public,
        }
    }

    fn state(&self) -> &RecordState<WishUid> {
        &self.state
    }

    fn is_blank(&self) -> bool {
        all_blank(&[self.title.as_str(), self.description.as_str(), self.amount.as_str()])
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.title, "wish.title")
    }
}
