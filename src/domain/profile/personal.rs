//! Personal details shown at the top of a profile.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ValidationError, Visibility};

use super::section::require;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub tag_line: String,
    pub short_bio: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub image_url: Option<String>,
    pub email_visibility: Visibility,
    pub phone_visibility: Visibility,
    pub location_visibility: Visibility,
    pub image_visibility: Visibility,
}

impl PersonalInfo {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// `"City, ST"`, or whichever half is present.
    pub fn location(&self) -> String {
        match (self.city.trim(), self.state.trim()) {
            ("", "") => String::new(),
            (city, "") => city.to_string(),
            ("", state) => state.to_string(),
            (city, state) => format!("{}, {}", city, state),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.first_name, "personal.first_name")?;
        require(&self.last_name, "personal.last_name")?;
        let email = self.email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err(ValidationError::invalid_format(
                "personal.email",
                "missing @ symbol",
            ));
        }
        Ok(())
    }
}
