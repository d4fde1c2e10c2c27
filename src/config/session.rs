//! Session persistence configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::application::DEFAULT_SESSION_MAX_AGE_DAYS;

/// Longest session lifetime accepted from configuration (ten years).
pub const MAX_SESSION_MAX_AGE_DAYS: i64 = 3650;

/// Session persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// File the session is stored in
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,

    /// Days a stored session stays valid without activity
    #[serde(default = "default_max_age_days")]
    pub max_age_days: i64,
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.storage_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("SESSION__STORAGE_PATH"));
        }
        if !(1..=MAX_SESSION_MAX_AGE_DAYS).contains(&self.max_age_days) {
            return Err(ValidationError::InvalidSessionMaxAge);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            max_age_days: default_max_age_days(),
        }
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("./data/session.yaml")
}

fn default_max_age_days() -> i64 {
    DEFAULT_SESSION_MAX_AGE_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.storage_path, PathBuf::from("./data/session.yaml"));
        assert_eq!(config.max_age_days, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_max_age() {
        let config = SessionConfig {
            max_age_days: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSessionMaxAge));
    }

    #[test]
    fn test_validation_max_age_upper_bound() {
        let at_limit = SessionConfig {
            max_age_days: MAX_SESSION_MAX_AGE_DAYS,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        let huge = SessionConfig {
            max_age_days: 100_000_000,
            ..Default::default()
        };
        assert_eq!(huge.validate(), Err(ValidationError::InvalidSessionMaxAge));
    }
}
