//! REST client for the Every Circle backend.
//!
//! Implements `ProfileApi`, `BusinessApi` and `SearchApi` over reqwest.
//! Each port call is a single request; there are no retries and no
//! cancellation. Callers surface failures to the user, who retries.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RestClientConfig::new("https://api.everycircle.example");
//! let client = RestClient::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use crate::domain::business::Business;
use crate::domain::foundation::{BusinessUid, ProfileUid};
use crate::domain::profile::{ImageUpload, Profile};
use crate::ports::{ApiError, BusinessApi, ProfileApi, SearchApi, SearchResult};

use super::dto::{WireBusiness, WireImageUploaded, WireProfile, WireSearchResult};
use super::mapper;

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Backend connection settings.
#[derive(Clone)]
pub struct RestClientConfig {
    /// Base URL, without trailing slash.
    base_url: String,

    /// Per-request timeout.
    timeout: Duration,

    /// Bearer token sent on every request, if any.
    token: Option<SecretString>,
}

impl RestClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// reqwest-backed implementation of the backend ports.
pub struct RestClient {
    config: RestClientConfig,
    http_client: reqwest::Client,
}

impl RestClient {
    /// Build the client.
    ///
    /// # Errors
    ///
    /// `ApiError::Transport` if the TLS backend cannot be initialized.
    pub fn new(config: RestClientConfig) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            config,
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    /// Send a request and decode the JSON body.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = self
            .authorize(request)
            .build()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        let method = request.method().clone();
        let url = request.url().to_string();
        tracing::debug!(%method, %url, "Sending backend request");

        let response = self.http_client.execute(request).await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "Backend request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(url));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%method, %url, status = status.as_u16(), body = %body, "Backend rejected request");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "Failed to decode backend response");
            ApiError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl ProfileApi for RestClient {
    async fn fetch_profile(&self, uid: &ProfileUid) -> Result<Profile, ApiError> {
        let url = self.url(&format!("profile/{}", uid));
        let wire: WireProfile = self.send(self.http_client.get(url)).await?;
        mapper::profile_from_wire(wire)
    }

    async fn save_profile(&self, profile: &Profile) -> Result<Profile, ApiError> {
        let url = self.url(&format!("profile/{}", profile.uid));
        let body = mapper::profile_to_wire(profile);
        let wire: WireProfile = self.send(self.http_client.put(url).json(&body)).await?;
        mapper::profile_from_wire(wire)
    }

    async fn upload_profile_image(
        &self,
        uid: &ProfileUid,
        image: &ImageUpload,
    ) -> Result<String, ApiError> {
        let url = self.url(&format!("profile/{}/image", uid));
        let part = multipart::Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.content_type())
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        let form = multipart::Form::new().part("profile_image", part);

        let uploaded: WireImageUploaded =
            self.send(self.http_client.post(url).multipart(form)).await?;
        Ok(uploaded.image_url)
    }
}

#[async_trait]
impl BusinessApi for RestClient {
    async fn fetch_business(&self, uid: &BusinessUid) -> Result<Business, ApiError> {
        let url = self.url(&format!("business/{}", uid));
        let wire: WireBusiness = self.send(self.http_client.get(url)).await?;
        Ok(mapper::business_from_wire(wire))
    }

    async fn create_business(&self, business: &Business) -> Result<Business, ApiError> {
        let url = self.url("business");
        let body = mapper::business_to_wire(business);
        let wire: WireBusiness = self.send(self.http_client.post(url).json(&body)).await?;
        Ok(mapper::business_from_wire(wire))
    }

    async fn update_business(&self, business: &Business) -> Result<Business, ApiError> {
        let uid = business.state.id().ok_or_else(|| {
            ApiError::InvalidRequest("cannot update a business that was never saved".to_string())
        })?;
        let url = self.url(&format!("business/{}", uid));
        let body = mapper::business_to_wire(business);
        let wire: WireBusiness = self.send(self.http_client.put(url).json(&body)).await?;
        Ok(mapper::business_from_wire(wire))
    }
}

#[async_trait]
impl SearchApi for RestClient {
    async fn search(
        &self,
        searcher: &ProfileUid,
        query: &str,
    ) -> Result<Vec<SearchResult>, ApiError> {
        let url = self.url(&format!("search/{}", searcher));
        let request = self.http_client.get(url).query(&[("query", query)]);
        let hits: Vec<WireSearchResult> = self.send(request).await?;
        Ok(hits
            .into_iter()
            .filter_map(mapper::search_result_from_wire)
            .collect())
    }
}
