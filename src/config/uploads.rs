//! Image upload configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Hard ceiling for the configurable upload limit (50 MiB)
const MAX_UPLOAD_LIMIT: u64 = 50 * 1024 * 1024;

/// Image upload configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UploadsConfig {
    /// Largest profile or business image accepted, in bytes
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,
}

impl UploadsConfig {
    /// Validate upload configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_image_bytes == 0 || self.max_image_bytes > MAX_UPLOAD_LIMIT {
            return Err(ValidationError::InvalidUploadLimit);
        }
        Ok(())
    }
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

fn default_max_image_bytes() -> u64 {
    2 * 1024 * 1024
}
