//! reqwest implementation of `CharacterSource` against `GET {base_url}/people/`.
//!
//! Only the first page is read. `next` is parsed so it shows up in the logs,
//! but never followed.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::core::character::CharacterRecord;
use crate::swapi::{CharacterSource, FetchError};

/// One page of the people endpoint.
#[derive(Deserialize, Debug)]
pub struct PeoplePage {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<CharacterRecord>,
}

pub struct SwapiClient {
    base_url: String,
    client: reqwest::Client,
}

impl SwapiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout ({}), using defaults", e);
                reqwest::Client::new()
            });
        Self { base_url, client }
    }

    pub fn people_url(&self) -> String {
        format!("{}/people/", self.base_url)
    }
}

#[async_trait]
impl CharacterSource for SwapiClient {
    fn name(&self) -> &str {
        "swapi"
    }

    async fn fetch_characters(&self) -> Result<Vec<CharacterRecord>, FetchError> {
        let url = self.people_url();
        info!("Fetching characters from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("SWAPI response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("SWAPI error: {} - {}", status, body);
            return Err(FetchError::Api {
                status,
                message: body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let page: PeoplePage =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        info!(
            "Fetched {} characters (count={:?}, next={:?})",
            page.results.len(),
            page.count,
            page.next
        );
        Ok(page.results)
    }
}
