//! Truth Engine client: the only place the viewer talks to the upstream API.
//!
//! One GET per page view, no retries. Every failure is logged here and then
//! collapsed to `None` so callers only ever see "profile or nothing".

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::HANDLE_ENV;
use crate::models::profile::Profile;

const USER_AGENT: &str = concat!("truth-engine-viewer/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("TRUTH_ENGINE_HANDLE environment variable is not set")]
    ConfigurationMissing,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can produce the profile for one page view.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Returns the profile, or `None` after logging why it is unavailable.
    async fn fetch_profile(&self) -> Option<Profile>;
}

/// `{apiBase}/api/u/{handle}/json`
pub fn profile_api_url(api_base: &str, handle: &str) -> String {
    format!("{}/api/u/{handle}/json", trim_base(api_base))
}

/// `{apiBase}/u/{handle}.json`, the raw profile document.
pub fn raw_json_url(api_base: &str, handle: &str) -> String {
    format!("{}/u/{handle}.json", trim_base(api_base))
}

/// `{apiBase}/u/{handle}.jsonld`, the linked-data document.
pub fn json_ld_url(api_base: &str, handle: &str) -> String {
    format!("{}/u/{handle}.jsonld", trim_base(api_base))
}

fn trim_base(api_base: &str) -> &str {
    api_base.trim_end_matches('/')
}

#[derive(Clone)]
pub struct TruthEngineClient {
    client: Client,
    api_base: String,
    handle: Option<String>,
}

impl TruthEngineClient {
    pub fn new(api_base: String, handle: Option<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            api_base,
            handle,
        })
    }

    /// Performs the fetch and reports exactly which tier failed.
    /// No request is made when the handle is unset or empty.
    pub async fn fetch(&self) -> Result<Profile, FetchError> {
        let handle = self
            .handle
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or(FetchError::ConfigurationMissing)?;

        let url = profile_api_url(&self.api_base, handle);
        debug!("Fetching profile from {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        // Read the body first so a malformed document surfaces as Parse, not Http.
        let body = response.bytes().await?;
        let profile: Profile = serde_json::from_slice(&body)?;
        Ok(profile)
    }
}

#[async_trait]
impl ProfileSource for TruthEngineClient {
    async fn fetch_profile(&self) -> Option<Profile> {
        match self.fetch().await {
            Ok(profile) => Some(profile),
            Err(FetchError::ConfigurationMissing) => {
                error!("Error: {HANDLE_ENV} environment variable is not set.");
                None
            }
            Err(e) => {
                let url = profile_api_url(&self.api_base, self.handle.as_deref().unwrap_or(""));
                error!("Failed to fetch profile from {url}: {e}");
                None
            }
        }
    }
}
