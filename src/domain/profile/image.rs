//! Picked profile or business image, checked before upload.

use crate::domain::foundation::ValidationError;

const ACCEPTED_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Image bytes the user picked, validated against the upload limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// Validates size and type.
    ///
    /// # Errors
    ///
    /// - `EmptyField` when there are no bytes
    /// - `OutOfRange` when the image exceeds `max_bytes`
    /// - `InvalidFormat` when the content type is not a supported image type
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
        max_bytes: u64,
    ) -> Result<Self, ValidationError> {
        let content_type = content_type.into().trim().to_ascii_lowercase();
        if bytes.is_empty() {
            return Err(ValidationError::empty_field("image"));
        }
        let size = bytes.len() as u64;
        if size > max_bytes {
            return Err(ValidationError::out_of_range("image", 1, max_bytes, size));
        }
        if !ACCEPTED_TYPES.contains(&content_type.as_str()) {
            return Err(ValidationError::invalid_format(
                "image",
                format!("unsupported content type '{}'", content_type),
            ));
        }
        Ok(Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
