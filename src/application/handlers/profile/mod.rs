//! Profile handlers.

mod load_profile;
mod save_profile;
mod upload_profile_image;

pub use load_profile::{LoadProfileHandler, LoadProfileQuery};
pub use save_profile::{SaveProfileCommand, SaveProfileHandler};
pub use upload_profile_image::{UploadProfileImageCommand, UploadProfileImageHandler};
