//! Translation between backend wire DTOs and domain types.
//!
//! This is the only place that knows backend key names. Blank or missing
//! uids become [`RecordState::New`]; absent strings become empty strings.

use std::str::FromStr;

use crate::domain::business::{Business, BusinessService};
use crate::domain::foundation::{BusinessUid, ProfileUid, RecordState, Visibility};
use crate::domain::money::MoneyField;
use crate::domain::profile::{
    BusinessLink, Education, EntryList, Experience, Expertise, PersonalInfo, Profile, Section,
    TemplateId, Wish,
};
use crate::ports::{ApiError, SearchResult};

use super::dto::{
    WireBusiness, WireBusinessLink, WireBusinessService, WireEducation, WireExperience,
    WireExpertise, WireFlag, WirePersonalInfo, WireProfile, WireSearchResult, WireWish,
};

fn text(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn some_text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn record<I: FromStr>(uid: Option<String>) -> RecordState<I> {
    RecordState::from_option(uid.as_deref().and_then(|raw| raw.parse().ok()))
}

fn record_uid<I: ToString>(state: &RecordState<I>) -> Option<String> {
    state.id().map(ToString::to_string)
}

fn visibility(flag: WireFlag) -> Visibility {
    Visibility::from_public(flag.0)
}

fn flag(visibility: Visibility) -> WireFlag {
    WireFlag(visibility.is_public())
}

fn template(raw: Option<String>) -> TemplateId {
    raw.as_deref()
        .and_then(|t| t.trim().parse::<u8>().ok())
        .and_then(|index| TemplateId::new(index).ok())
        .unwrap_or_default()
}

// ════════════════════════════════════════════════════════════════════════════
// Profile
// ════════════════════════════════════════════════════════════════════════════

/// Wire profile to domain profile.
///
/// # Errors
///
/// `ApiError::Decode` when the profile uid is missing; every other field
/// is optional on the wire.
pub fn profile_from_wire(wire: WireProfile) -> Result<Profile, ApiError> {
    let uid = wire
        .profile_uid
        .as_deref()
        .and_then(|raw| ProfileUid::new(raw).ok())
        .ok_or_else(|| ApiError::Decode("profile_uid missing from profile".to_string()))?;

    let p = wire.personal_info;
    let template = template(p.profile_personal_template.clone());
    let sections = (
        visibility(p.profile_personal_experience_is_public),
        visibility(p.profile_personal_education_is_public),
        visibility(p.profile_personal_expertise_is_public),
        visibility(p.profile_personal_wishes_is_public),
    );

    Ok(Profile {
        uid,
        personal: personal_from_wire(p),
        experience: Section::new(
            wire.experience_info.into_iter().map(experience_from_wire).collect(),
            sections.0,
        ),
        education: Section::new(
            wire.education_info.into_iter().map(education_from_wire).collect(),
            sections.1,
        ),
        expertise: Section::new(
            wire.expertise_info.into_iter().map(expertise_from_wire).collect(),
            sections.2,
        ),
        wishes: Section::new(
            wire.wishes_info.into_iter().map(wish_from_wire).collect(),
            sections.3,
        ),
        businesses: wire
            .business_info
            .into_iter()
            .filter_map(business_link_from_wire)
            .collect(),
        template,
    })
}

/// Domain profile to wire profile, for submission.
pub fn profile_to_wire(profile: &Profile) -> WireProfile {
    let p = &profile.personal;
    WireProfile {
        profile_uid: some_text(profile.uid.as_str()),
        personal_info: WirePersonalInfo {
            profile_personal_first_name: some_text(&p.first_name),
            profile_personal_last_name: some_text(&p.last_name),
            profile_personal_tag_line: some_text(&p.tag_line),
            profile_personal_short_bio: some_text(&p.short_bio),
            profile_personal_email: some_text(&p.email),
            profile_personal_phone_number: some_text(&p.phone),
            profile_personal_city: some_text(&p.city),
            profile_personal_state: some_text(&p.state),
            profile_personal_image: p.image_url.clone(),
            profile_personal_template: Some(profile.template.to_string()),
            profile_personal_email_is_public: flag(p.email_visibility),
            profile_personal_phone_number_is_public: flag(p.phone_visibility),
            profile_personal_location_is_public: flag(p.location_visibility),
            profile_personal_image_is_public: flag(p.image_visibility),
            profile_personal_experience_is_public: flag(profile.experience.visibility),
            profile_personal_education_is_public: flag(profile.education.visibility),
            profile_personal_expertise_is_public: flag(profile.expertise.visibility),
            profile_personal_wishes_is_public: flag(profile.wishes.visibility),
        },
        experience_info: profile.experience.iter().map(experience_to_wire).collect(),
        education_info: profile.education.iter().map(education_to_wire).collect(),
        expertise_info: profile.expertise.iter().map(expertise_to_wire).collect(),
        wishes_info: profile.wishes.iter().map(wish_to_wire).collect(),
        business_info: profile.businesses.iter().map(business_link_to_wire).collect(),
    }
}

fn personal_from_wire(p: WirePersonalInfo) -> PersonalInfo {
    PersonalInfo {
        first_name: text(p.profile_personal_first_name),
        last_name: text(p.profile_personal_last_name),
        tag_line: text(p.profile_personal_tag_line),
        short_bio: text(p.profile_personal_short_bio),
        email: text(p.profile_personal_email),
        phone: text(p.profile_personal_phone_number),
        city: text(p.profile_personal_city),
        state: text(p.profile_personal_state),
        image_url: optional_text(p.profile_personal_image),
        email_visibility: visibility(p.profile_personal_email_is_public),
        phone_visibility: visibility(p.profile_personal_phone_number_is_public),
        location_visibility: visibility(p.profile_personal_location_is_public),
        image_visibility: visibility(p.profile_personal_image_is_public),
    }
}

fn experience_from_wire(w: WireExperience) -> Experience {
    Experience {
        state: record(w.profile_experience_uid),
        company: text(w.profile_experience_company_name),
        title: text(w.profile_experience_position),
        start_date: text(w.profile_experience_start_date),
        end_date: text(w.profile_experience_end_date),
        visibility: visibility(w.profile_experience_is_public),
    }
}

fn experience_to_wire(e: &Experience) -> WireExperience {
    WireExperience {
        profile_experience_uid: record_uid(&e.state),
        profile_experience_company_name: some_text(&e.company),
        profile_experience_position: some_text(&e.title),
        profile_experience_start_date: some_text(&e.start_date),
        profile_experience_end_date: some_text(&e.end_date),
        profile_experience_is_public: flag(e.visibility),
    }
}

fn education_from_wire(w: WireEducation) -> Education {
    Education {
        state: record(w.profile_education_uid),
        school: text(w.profile_education_school_name),
        degree: text(w.profile_education_degree),
        start_date: text(w.profile_education_start_date),
        end_date: text(w.profile_education_end_date),
        visibility: visibility(w.profile_education_is_public),
    }
}

fn education_to_wire(e: &Education) -> WireEducation {
    WireEducation {
        profile_education_uid: record_uid(&e.state),
        profile_education_school_name: some_text(&e.school),
        profile_education_degree: some_text(&e.degree),
        profile_education_start_date: some_text(&e.start_date),
        profile_education_end_date: some_text(&e.end_date),
        profile_education_is_public: flag(e.visibility),
    }
}

fn expertise_from_wire(w: WireExpertise) -> Expertise {
    // Money strings are kept verbatim; the codec reads them at edit time.
    Expertise {
        state: record(w.profile_expertise_uid),
        title: text(w.profile_expertise_title),
        description: text(w.profile_expertise_description),
        cost: MoneyField::new(w.profile_expertise_cost.unwrap_or_default()),
        bounty: MoneyField::new(w.profile_expertise_bounty.unwrap_or_default()),
        visibility: visibility(w.profile_expertise_is_public),
    }
}

fn expertise_to_wire(e: &Expertise) -> WireExpertise {
    WireExpertise {
        profile_expertise_uid: record_uid(&e.state),
        profile_expertise_title: some_text(&e.title),
        profile_expertise_description: some_text(&e.description),
        profile_expertise_cost: some_text(e.cost.as_str()),
        profile_expertise_bounty: some_text(e.bounty.as_str()),
        profile_expertise_is_public: flag(e.visibility),
    }
}

fn wish_from_wire(w: WireWish) -> Wish {
    Wish {
        state: record(w.profile_wish_uid),
        title: text(w.profile_wish_title),
        description: text(w.profile_wish_description),
        amount: MoneyField::new(w.profile_wish_amount.unwrap_or_default()),
        visibility: visibility(w.profile_wish_is_public),
    }
}

fn wish_to_wire(w: &Wish) -> WireWish {
    WireWish {
        profile_wish_uid: record_uid(&w.state),
        profile_wish_title: some_text(&w.title),
        profile_wish_description: some_text(&w.description),
        profile_wish_amount: some_text(w.amount.as_str()),
        profile_wish_is_public: flag(w.visibility),
    }
}

fn business_link_from_wire(w: WireBusinessLink) -> Option<BusinessLink> {
    let Some(business_uid) = w
        .profile_business_business_id
        .as_deref()
        .and_then(|raw| BusinessUid::new(raw).ok())
    else {
        tracing::warn!(
            link_uid = ?w.profile_business_uid,
            "Dropping business link without business id"
        );
        return None;
    };

    Some(BusinessLink {
        state: record(w.profile_business_uid),
        business_uid,
        role: text(w.profile_business_role),
        visibility: visibility(w.profile_business_is_visible),
    })
}

fn business_link_to_wire(link: &BusinessLink) -> WireBusinessLink {
    WireBusinessLink {
        profile_business_uid: record_uid(&link.state),
        profile_business_business_id: some_text(link.business_uid.as_str()),
        profile_business_role: some_text(&link.role),
        profile_business_is_visible: flag(link.visibility),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Business
// ════════════════════════════════════════════════════════════════════════════

pub fn business_from_wire(wire: WireBusiness) -> Business {
    Business {
        state: record(wire.business_uid),
        name: text(wire.business_name),
        tag_line: text(wire.business_tag_line),
        short_bio: text(wire.business_short_bio),
        website: text(wire.business_website),
        phone: text(wire.business_phone_number),
        email: text(wire.business_email_id),
        location: text(wire.business_location),
        image_url: optional_text(wire.business_profile_img),
        visibility: visibility(wire.business_is_public),
        services: EntryList::new(wire.services.into_iter().map(service_from_wire).collect()),
    }
}

pub fn business_to_wire(business: &Business) -> WireBusiness {
    WireBusiness {
        business_uid: record_uid(&business.state),
        business_name: some_text(&business.name),
        business_tag_line: some_text(&business.tag_line),
        business_short_bio: some_text(&business.short_bio),
        business_website: some_text(&business.website),
        business_phone_number: some_text(&business.phone),
        business_email_id: some_text(&business.email),
        business_location: some_text(&business.location),
        business_profile_img: business.image_url.clone(),
        business_is_public: flag(business.visibility),
        services: business.services.iter().map(service_to_wire).collect(),
    }
}

fn service_from_wire(w: WireBusinessService) -> BusinessService {
    BusinessService {
        state: record(w.bs_uid),
        name: text(w.bs_service_name),
        description: text(w.bs_service_desc),
        cost: MoneyField::new(w.bs_cost.unwrap_or_default()),
        bounty: MoneyField::new(w.bs_bounty.unwrap_or_default()),
        visibility: visibility(w.bs_is_visible),
    }
}

fn service_to_wire(s: &BusinessService) -> WireBusinessService {
    WireBusinessService {
        bs_uid: record_uid(&s.state),
        bs_service_name: some_text(&s.name),
        bs_service_desc: some_text(&s.description),
        bs_cost: some_text(s.cost.as_str()),
        bs_bounty: some_text(s.bounty.as_str()),
        bs_is_visible: flag(s.visibility),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Search
// ════════════════════════════════════════════════════════════════════════════

/// Search hit to domain result; hits without a profile uid are dropped.
pub fn search_result_from_wire(wire: WireSearchResult) -> Option<SearchResult> {
    let profile_uid = ProfileUid::new(wire.profile_uid?).ok()?;
    let name = format!(
        "{} {}",
        text(wire.profile_personal_first_name),
        text(wire.profile_personal_last_name)
    )
    .trim()
    .to_string();

    Some(SearchResult {
        profile_uid,
        name,
        tag_line: text(wire.profile_personal_tag_line),
        image_url: optional_text(wire.profile_personal_image),
        degree: wire.degree,
        matched_expertise: wire.matched_expertise,
    })
}
