//! Wire DTOs for the Every Circle backend.
//!
//! These types mirror the backend's JSON key names exactly. Nothing outside
//! `adapters::rest` sees them; the mapper turns them into domain types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ════════════════════════════════════════════════════════════════════════════
// Flags
// ════════════════════════════════════════════════════════════════════════════

/// Visibility flag as the backend sends it: `"1"`/`"0"`, `1`/`0`, or a bool.
/// Floats are read like integers.
///
/// Missing or unrecognized values count as set. Always written back as
/// `"1"`/`"0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireFlag(pub bool);

impl Default for WireFlag {
    fn default() -> Self {
        WireFlag(true)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Null(()),
    Other(serde_json::Value),
}

impl<'de> Deserialize<'de> for WireFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let set = match RawFlag::deserialize(deserializer)? {
            RawFlag::Bool(b) => b,
            RawFlag::Int(i) => i != 0,
            RawFlag::Float(f) => f != 0.0,
            RawFlag::Text(s) => !matches!(s.trim().to_ascii_lowercase().as_str(), "0" | "false"),
            RawFlag::Null(()) | RawFlag::Other(_) => true,
        };
        Ok(WireFlag(set))
    }
}

impl Serialize for WireFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if self.0 { "1" } else { "0" })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Profile
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireProfile {
    #[serde(default)]
    pub profile_uid: Option<String>,
    #[serde(default)]
    pub personal_info: WirePersonalInfo,
    #[serde(default)]
    pub experience_info: Vec<WireExperience>,
    #[serde(default)]
    pub education_info: Vec<WireEducation>,
    #[serde(default)]
    pub expertise_info: Vec<WireExpertise>,
    #[serde(default)]
    pub wishes_info: Vec<WireWish>,
    #[serde(default)]
    pub business_info: Vec<WireBusinessLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WirePersonalInfo {
    pub profile_personal_first_name: Option<String>,
    pub profile_personal_last_name: Option<String>,
    pub profile_personal_tag_line: Option<String>,
    pub profile_personal_short_bio: Option<String>,
    pub profile_personal_email: Option<String>,
    pub profile_personal_phone_number: Option<String>,
    pub profile_personal_city: Option<String>,
    pub profile_personal_state: Option<String>,
    pub profile_personal_image: Option<String>,
    pub profile_personal_template: Option<String>,
    pub profile_personal_email_is_public: WireFlag,
    pub profile_personal_phone_number_is_public: WireFlag,
    pub profile_personal_location_is_public: WireFlag,
    pub profile_personal_image_is_public: WireFlag,
    pub profile_personal_experience_is_public: WireFlag,
    pub profile_personal_education_is_public: WireFlag,
    pub profile_personal_expertise_is_public: WireFlag,
    pub profile_personal_wishes_is_public: WireFlag,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WireExperience {
    pub profile_experience_uid: Option<String>,
    pub profile_experience_company_name: Option<String>,
    pub profile_experience_position: Option<String>,
    pub profile_experience_start_date: Option<String>,
    pub profile_experience_end_date: Option<String>,
    pub profile_experience_is_public: WireFlag,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WireEducation {
    pub profile_education_uid: Option<String>,
    pub profile_education_school_name: Option<String>,
    pub profile_education_degree: Option<String>,
    pub profile_education_start_date: Option<String>,
    pub profile_education_end_date: Option<String>,
    pub profile_education_is_public: WireFlag,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WireExpertise {
    pub profile_expertise_uid: Option<String>,
    pub profile_expertise_title: Option<String>,
    pub profile_expertise_description: Option<String>,
    pub profile_expertise_cost: Option<String>,
    pub profile_expertise_bounty: Option<String>,
    pub profile_expertise_is_public: WireFlag,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WireWish {
    pub profile_wish_uid: Option<String>,
    pub profile_wish_title: Option<String>,
    pub profile_wish_description: Option<String>,
    pub profile_wish_amount: Option<String>,
    pub profile_wish_is_public: WireFlag,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WireBusinessLink {
    pub profile_business_uid: Option<String>,
    pub profile_business_business_id: Option<String>,
    pub profile_business_role: Option<String>,
    pub profile_business_is_visible: WireFlag,
}

/// Response to an image upload.
#[derive(Debug, Clone, Deserialize)]
pub struct WireImageUploaded {
    pub image_url: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Business
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WireBusiness {
    pub business_uid: Option<String>,
    pub business_name: Option<String>,
    pub business_tag_line: Option<String>,
    pub business_short_bio: Option<String>,
    pub business_website: Option<String>,
    pub business_phone_number: Option<String>,
    pub business_email_id: Option<String>,
    pub business_location: Option<String>,
    pub business_profile_img: Option<String>,
    pub business_is_public: WireFlag,
    pub services: Vec<WireBusinessService>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WireBusinessService {
    pub bs_uid: Option<String>,
    pub bs_service_name: Option<String>,
    pub bs_service_desc: Option<String>,
    pub bs_cost: Option<String>,
    pub bs_bounty: Option<String>,
    pub bs_is_visible: WireFlag,
}

// ════════════════════════════════════════════════════════════════════════════
// Search
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireSearchResult {
    pub profile_uid: Option<String>,
    pub profile_personal_first_name: Option<String>,
    pub profile_personal_last_name: Option<String>,
    pub profile_personal_tag_line: Option<String>,
    pub profile_personal_image: Option<String>,
    pub degree: Option<u8>,
    pub matched_expertise: Vec<String>,
}
