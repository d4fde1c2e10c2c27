//! Profile module - the personal profile and its editable sections.

mod aggregate;
mod entries;
mod image;
mod personal;
mod section;
mod template;

pub use entries::{Education, Experience, Expertise, Wish};
pub use image::ImageUpload;
pub use personal::PersonalInfo;
pub use aggregate::{BusinessLink, Profile};
pub use section::{EntryList, Section, SectionEntry};
pub use template::{TemplateCarousel, TemplateId, TEMPLATE_COUNT};
