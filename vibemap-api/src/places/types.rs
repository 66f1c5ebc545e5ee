//! Raw Foursquare response schema
//!
//! Strict field enumeration with explicit defaulting: every optional
//! provider field is `Option` or `#[serde(default)]`, so a response
//! missing them still deserializes and the adapter decides what to do.

use serde::Deserialize;

/// Envelope for venue search responses
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub response: SearchBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    #[serde(default)]
    pub venues: Vec<RawVenue>,
}

/// Envelope for single-venue detail responses
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub response: DetailsBody,
}

#[derive(Debug, Deserialize)]
pub struct DetailsBody {
    pub venue: RawVenue,
}

/// One venue as the provider returns it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVenue {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: RawLocation,
    #[serde(default)]
    pub categories: Vec<RawCategory>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub stats: Option<RawStats>,
    #[serde(default)]
    pub price: Option<RawPrice>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub contact: Option<RawContact>,
    #[serde(default)]
    pub hours: Option<RawHours>,
    #[serde(default)]
    pub photos: Option<RawPhotoGroups>,
    #[serde(default)]
    pub tips: Option<RawTipGroups>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocation {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub formatted_address: Vec<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategory {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStats {
    #[serde(default)]
    pub checkins_count: Option<i64>,
    #[serde(default)]
    pub users_count: Option<i64>,
    #[serde(default)]
    pub tip_count: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPrice {
    #[serde(default)]
    pub tier: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContact {
    #[serde(default)]
    pub formatted_phone: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHours {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_open: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPhotoGroups {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub groups: Vec<RawPhotoGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPhotoGroup {
    #[serde(default)]
    pub items: Vec<RawPhoto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPhoto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTipGroups {
    #[serde(default)]
    pub groups: Vec<RawTipGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTipGroup {
    #[serde(default)]
    pub items: Vec<RawTip>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTip {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: Option<i64>,
}
