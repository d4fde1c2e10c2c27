//! Public profile template picker.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Number of public profile layouts the renderer knows.
pub const TEMPLATE_COUNT: u8 = 5;

/// One of the public profile layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(u8);

impl TemplateId {
    pub fn new(index: u8) -> Result<Self, ValidationError> {
        if index >= TEMPLATE_COUNT {
            return Err(ValidationError::out_of_range(
                "template",
                0,
                u64::from(TEMPLATE_COUNT - 1),
                u64::from(index),
            ));
        }
        Ok(Self(index))
    }

    pub fn index(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Carousel over all templates; wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateCarousel {
    selected: TemplateId,
}

impl TemplateCarousel {
    pub fn new(selected: TemplateId) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> TemplateId {
        self.selected
    }

    pub fn next(&mut self) -> TemplateId {
        self.selected = TemplateId((self.selected.0 + 1) % TEMPLATE_COUNT);
        self.selected
    }

    pub fn previous(&mut self) -> TemplateId {
        self.selected = TemplateId((self.selected.0 + TEMPLATE_COUNT - 1) % TEMPLATE_COUNT);
        self.selected
    }

    /// Jumps straight to a template (dot indicator tap).
    pub fn select(&mut self, id: TemplateId) {
        self.selected = id;
    }

    /// Every template in carousel order.
    pub fn all() -> impl Iterator<Item = TemplateId> {
        (0..TEMPLATE_COUNT).map(TemplateId)
    }
}

impl Default for TemplateCarousel {
    fn default() -> Self {
        Self::new(TemplateId::default())
    }
}
