//! every-circle - prints the signed-in user's profile summary.

use std::error::Error;
use std::sync::Arc;

use serde::Serialize;

use every_circle::adapters::{FileSessionStorage, RestClient};
use every_circle::application::{LoadProfileHandler, LoadProfileQuery, SessionStore};
use every_circle::config::AppConfig;
use every_circle::domain::profile::Profile;
use every_circle::telemetry;

#[derive(Debug, Serialize)]
struct ProfileSummary {
    profile_uid: String,
    name: String,
    tag_line: String,
    expertise: Vec<ExpertiseSummary>,
    wishes: Vec<WishSummary>,
}

#[derive(Debug, Serialize)]
struct ExpertiseSummary {
    title: String,
    cost: String,
    cost_unit: String,
    bounty: String,
    bounty_unit: String,
}

#[derive(Debug, Serialize)]
struct WishSummary {
    title: String,
    amount: String,
    unit: String,
}

impl From<&Profile> for ProfileSummary {
    fn from(profile: &Profile) -> Self {
        Self {
            profile_uid: profile.uid.to_string(),
            name: profile.personal.display_name(),
            tag_line: profile.personal.tag_line.clone(),
            expertise: profile
                .expertise
                .iter()
                .filter(|e| e.visibility.is_public())
                .map(|e| ExpertiseSummary {
                    title: e.title.clone(),
                    cost: e.cost.display_amount(),
                    cost_unit: e.cost.unit(),
                    bounty: e.bounty.display_amount(),
                    bounty_unit: e.bounty.unit(),
                })
                .collect(),
            wishes: profile
                .wishes
                .iter()
                .filter(|w| w.visibility.is_public())
                .map(|w| WishSummary {
                    title: w.title.clone(),
                    amount: w.amount.display_amount(),
                    unit: w.amount.unit(),
                })
                .collect(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.logging)?;

    let storage = Arc::new(FileSessionStorage::new(&config.session.storage_path));
    let session = SessionStore::new(storage).with_max_age_days(config.session.max_age_days);
    let current = session.init().await?;

    let Some(profile_uid) = current.profile_uid().cloned() else {
        tracing::info!(
            path = %config.session.storage_path.display(),
            "No signed-in user; nothing to show"
        );
        return Ok(());
    };

    let client = Arc::new(RestClient::new(config.api.client_config())?);
    let handler = LoadProfileHandler::new(client);
    let profile = handler.handle(LoadProfileQuery { profile_uid }).await?;

    let summary = ProfileSummary::from(&profile);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
