//! Venue data model
//!
//! Venues enter the system as a [`VenueDraft`] (everything except the vibe
//! score) and are validated into a [`Venue`] whose score is computed at
//! construction. The score is derived state: it is never set from outside
//! and is recomputed whenever a scoring input changes.

use crate::error::{Error, Result};
use crate::geo::Coordinates;
use crate::score::{compute_vibe_score, ScoreInputs, ScorePolicy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Symbolic price level, one of four fixed tiers
///
/// Unrecognized tier strings parse to `None` and contribute zero to the
/// vibe score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceTier {
    /// "$" - cheapest tier
    #[serde(rename = "$")]
    Budget,

    /// "$$" - the scoring sweet spot
    #[serde(rename = "$$")]
    Moderate,

    /// "$$$"
    #[serde(rename = "$$$")]
    Upscale,

    /// "$$$$" - most expensive tier
    #[serde(rename = "$$$$")]
    TopShelf,
}

impl PriceTier {
    /// Parse tier from its dollar-sign representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "$" => Some(PriceTier::Budget),
            "$$" => Some(PriceTier::Moderate),
            "$$$" => Some(PriceTier::Upscale),
            "$$$$" => Some(PriceTier::TopShelf),
            _ => None,
        }
    }

    /// Map a provider's numeric tier (1-4) onto the symbolic scale
    pub fn from_provider_tier(tier: i64) -> Option<Self> {
        match tier {
            1 => Some(PriceTier::Budget),
            2 => Some(PriceTier::Moderate),
            3 => Some(PriceTier::Upscale),
            4 => Some(PriceTier::TopShelf),
            _ => None,
        }
    }

    /// Fixed ascending rank for price sorting: $ < $$ < $$$ < $$$$
    pub fn rank(&self) -> u8 {
        match self {
            PriceTier::Budget => 1,
            PriceTier::Moderate => 2,
            PriceTier::Upscale => 3,
            PriceTier::TopShelf => 4,
        }
    }

    /// Dollar-sign representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Budget => "$",
            PriceTier::Moderate => "$$",
            PriceTier::Upscale => "$$$",
            PriceTier::TopShelf => "$$$$",
        }
    }

    /// Get all tier variants in ascending rank order
    pub fn all_variants() -> &'static [PriceTier] {
        &[
            PriceTier::Budget,
            PriceTier::Moderate,
            PriceTier::Upscale,
            PriceTier::TopShelf,
        ]
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized representation of one discoverable place
///
/// `vibe_score` is always present and always a function of the other
/// fields at the time of computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub address: String,
    pub neighborhood: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f64,
    pub review_count: u32,
    pub price_level: Option<PriceTier>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub opening_hours: BTreeMap<String, String>,
    /// Derived 0-100 desirability score; recomputed on any scoring-input change
    pub vibe_score: u8,
}

/// Venue fields prior to validation and scoring
///
/// The adapter boundary builds drafts; [`Venue::from_draft`] is the only
/// path to a scored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueDraft {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub neighborhood: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub price_level: Option<PriceTier>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub opening_hours: BTreeMap<String, String>,
}

/// Partial update to a venue; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct VenueUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub neighborhood: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub price_level: Option<PriceTier>,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub opening_hours: Option<BTreeMap<String, String>>,
}

impl Venue {
    /// Validate a draft and compute its vibe score
    ///
    /// Coercions: blank id is replaced with a generated UUID, non-finite or
    /// negative ratings become 0.0, ratings above 10.0 are capped. Records
    /// with a blank name or out-of-range coordinates are rejected.
    pub fn from_draft(draft: VenueDraft, policy: &ScorePolicy) -> Result<Self> {
        if draft.name.trim().is_empty() {
            return Err(Error::InvalidInput("venue name must not be blank".into()));
        }
        if !draft.latitude.is_finite() || !(-90.0..=90.0).contains(&draft.latitude) {
            return Err(Error::InvalidInput(format!(
                "latitude out of range: {}",
                draft.latitude
            )));
        }
        if !draft.longitude.is_finite() || !(-180.0..=180.0).contains(&draft.longitude) {
            return Err(Error::InvalidInput(format!(
                "longitude out of range: {}",
                draft.longitude
            )));
        }

        let id = if draft.id.trim().is_empty() {
            Uuid::new_v4().to_string()
        } else {
            draft.id
        };

        let rating = if draft.rating.is_finite() {
            draft.rating.clamp(0.0, 10.0)
        } else {
            0.0
        };

        let mut venue = Venue {
            id,
            name: draft.name,
            address: draft.address,
            neighborhood: draft.neighborhood,
            latitude: draft.latitude,
            longitude: draft.longitude,
            rating,
            review_count: draft.review_count,
            price_level: draft.price_level,
            tags: draft.tags,
            image_url: draft.image_url,
            phone: draft.phone,
            website: draft.website,
            opening_hours: draft.opening_hours,
            vibe_score: 0,
        };
        venue.vibe_score = compute_vibe_score(&venue.score_inputs(), policy);
        Ok(venue)
    }

    /// Scoring inputs derived from this record
    ///
    /// Photo counts and review text are detail-level signals and are not
    /// held on the base record; callers scoring with details supply them.
    pub fn score_inputs(&self) -> ScoreInputs<'_> {
        ScoreInputs {
            rating: self.rating,
            review_count: self.review_count,
            price_level: self.price_level,
            tags: &self.tags,
            name: Some(&self.name),
            photo_count: None,
            review_text: None,
        }
    }

    /// Geographic position of this venue
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Apply a partial update, recomputing the vibe score if any scoring
    /// input (rating, review count, price tier, tags) changed
    pub fn apply_update(&mut self, update: VenueUpdate, policy: &ScorePolicy) {
        let mut rescore = false;

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(neighborhood) = update.neighborhood {
            self.neighborhood = neighborhood;
        }
        if let Some(rating) = update.rating {
            self.rating = if rating.is_finite() {
                rating.clamp(0.0, 10.0)
            } else {
                0.0
            };
            rescore = true;
        }
        if let Some(review_count) = update.review_count {
            self.review_count = review_count;
            rescore = true;
        }
        if let Some(price_level) = update.price_level {
            self.price_level = Some(price_level);
            rescore = true;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
            rescore = true;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(website) = update.website {
            self.website = Some(website);
        }
        if let Some(opening_hours) = update.opening_hours {
            self.opening_hours = opening_hours;
        }

        if rescore {
            self.vibe_score = compute_vibe_score(&self.score_inputs(), policy);
        }
    }
}

/// A venue photo reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// A review excerpt attached to a venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewExcerpt {
    pub text: String,
    pub date: String,
}

/// One open/close period within structured hours
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursPeriod {
    pub day: u8,
    pub open: String,
    pub close: String,
}

/// Structured opening hours for the detail view
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredHours {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub periods: Vec<HoursPeriod>,
}

/// Extended per-venue record for single-venue views
///
/// Fetched lazily and cached indefinitely once obtained.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueDetails {
    #[serde(flatten)]
    pub venue: Venue,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub reviews: Vec<ReviewExcerpt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<StructuredHours>,
}
