//! UploadProfileImage - Command handler for replacing the profile picture.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProfileUid};
use crate::domain::profile::ImageUpload;
use crate::ports::ProfileApi;

/// Command carrying the picked image.
#[derive(Debug, Clone)]
pub struct UploadProfileImageCommand {
    pub profile_uid: ProfileUid,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Handler for profile image uploads.
pub struct UploadProfileImageHandler {
    api: Arc<dyn ProfileApi>,
    max_image_bytes: u64,
}

impl UploadProfileImageHandler {
    pub fn new(api: Arc<dyn ProfileApi>, max_image_bytes: u64) -> Self {
        Self {
            api,
            max_image_bytes,
        }
    }

    /// Returns the public URL of the uploaded image.
    pub async fn handle(&self, cmd: UploadProfileImageCommand) -> Result<String, DomainError> {
        let image = ImageUpload::new(
            cmd.file_name,
            cmd.content_type,
            cmd.bytes,
            self.max_image_bytes,
        )?;

        let url = self
            .api
            .upload_profile_image(&cmd.profile_uid, &image)
            .await?;

        tracing::info!(
            profile_uid = %cmd.profile_uid,
            bytes = image.size(),
            "Profile image uploaded"
        );

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::profile::Profile;
    use crate::ports::ApiError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockProfileApi {
        uploads: Mutex<Vec<(String, usize)>>,
    }

    #[async_trait]
    impl ProfileApi for MockProfileApi {
        async fn fetch_profile(&self, _uid: &ProfileUid) -> Result<Profile, ApiError> {
            unimplemented!()
        }

        async fn save_profile(&self, _profile: &Profile) -> Result<Profile, ApiError> {
            unimplemented!()
        }

        async fn upload_profile_image(
            &self,
            uid: &ProfileUid,
            image: &ImageUpload,
        ) -> Result<String, ApiError> {
            self.uploads
                .lock()
                .unwrap()
                .push((image.file_name().to_string(), image.bytes().len()));
            Ok(format!("https://img.example.com/{}.png", uid))
        }
    }

    fn command(bytes: usize) -> UploadProfileImageCommand {
        UploadProfileImageCommand {
            profile_uid: ProfileUid::new("110-000001").unwrap(),
            file_name: "me.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0u8; bytes],
        }
    }

    #[tokio::test]
    async fn uploads_image_within_limit() {
        let api = Arc::new(MockProfileApi::default());
        let handler = UploadProfileImageHandler::new(api.clone(), 1024);

        let url = handler.handle(command(512)).await.unwrap();

        assert_eq!(url, "https://img.example.com/110-000001.png");
        assert_eq!(api.uploads.lock().unwrap()[0], ("me.png".to_string(), 512));
    }

    #[tokio::test]
    async fn oversized_image_is_rejected_before_upload() {
        let api = Arc::new(MockProfileApi::default());
        let handler = UploadProfileImageHandler::new(api.clone(), 1024);

        let err = handler.handle(command(2048)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert!(api.uploads.lock().unwrap().is_empty());
    }
}
