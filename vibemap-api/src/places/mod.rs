//! Foursquare places client
//!
//! Thin typed wrapper over the legacy v2 venue endpoints. The adapter
//! (see [`adapter`]) owns the mapping into the venue model; this module
//! owns transport, auth parameters, and error triage.

use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use vibemap_common::geo::Coordinates;

pub mod adapter;
pub mod types;

pub use types::RawVenue;

const FOURSQUARE_BASE_URL: &str = "https://api.foursquare.com/v2";
const API_VERSION: &str = "20231010";
const COFFEE_CATEGORY_ID: &str = "4bf58dd8d48988d116941735";
const USER_AGENT: &str = "vibemap/0.1.0";
const PROVIDER_MAX_LIMIT: u32 = 50;

/// Places provider errors
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Venue not found: {0}")]
    VenueNotFound(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Foursquare v2 API client
pub struct FoursquareClient {
    http_client: reqwest::Client,
    client_id: String,
    base_url: String,
}

impl FoursquareClient {
    pub fn new(client_id: impl Into<String>) -> Result<Self, PlacesError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| PlacesError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            client_id: client_id.into(),
            base_url: FOURSQUARE_BASE_URL.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, PlacesError> {
        let url = format!("{}{}", self.base_url, path);

        // Legacy v2 auth travels as query parameters
        let mut query: Vec<(&str, String)> = vec![
            ("client_id", self.client_id.clone()),
            ("client_secret", String::new()),
            ("v", API_VERSION.to_string()),
        ];
        query.extend(params.iter().cloned());

        tracing::debug!(url = %url, "querying places provider");

        let response = self
            .http_client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| PlacesError::Network(e.to_string()))?;

        let status = response.status();

        if status == 429 {
            return Err(PlacesError::RateLimited);
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PlacesError::Api(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| PlacesError::Parse(e.to_string()))
    }

    /// Search coffee shops around a reference point
    pub async fn search_coffee_shops(
        &self,
        reference: Coordinates,
        radius_m: u32,
        limit: u32,
    ) -> Result<Vec<RawVenue>, PlacesError> {
        let params = [
            ("categoryId", COFFEE_CATEGORY_ID.to_string()),
            (
                "ll",
                format!("{},{}", reference.latitude, reference.longitude),
            ),
            ("radius", radius_m.to_string()),
            ("limit", limit.min(PROVIDER_MAX_LIMIT).to_string()),
            ("intent", "browse".to_string()),
        ];

        let response: types::SearchResponse = self.get_json("/venues/search", &params).await?;
        tracing::info!(
            count = response.response.venues.len(),
            "retrieved venues from places provider"
        );
        Ok(response.response.venues)
    }

    /// Free-text venue search around a reference point
    pub async fn search_by_query(
        &self,
        query: &str,
        reference: Coordinates,
        radius_m: u32,
        limit: u32,
    ) -> Result<Vec<RawVenue>, PlacesError> {
        let params = [
            ("query", query.to_string()),
            (
                "ll",
                format!("{},{}", reference.latitude, reference.longitude),
            ),
            ("radius", radius_m.to_string()),
            ("limit", limit.min(PROVIDER_MAX_LIMIT).to_string()),
            ("intent", "browse".to_string()),
        ];

        let response: types::SearchResponse = self.get_json("/venues/search", &params).await?;
        Ok(response.response.venues)
    }

    /// Fetch the full detail record for one venue
    pub async fn venue_details(&self, id: &str) -> Result<RawVenue, PlacesError> {
        let path = format!("/venues/{}", id);
        let response: Result<types::DetailsResponse, PlacesError> =
            self.get_json(&path, &[]).await;

        match response {
            Ok(details) => Ok(details.response.venue),
            Err(PlacesError::Api(404, _)) => Err(PlacesError::VenueNotFound(id.to_string())),
            Err(e) => Err(e),
        }
    }
}
