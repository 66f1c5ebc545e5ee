//! Venue listing, search, and lookup handlers
//!
//! The list endpoint composes the ranking/filtering layer over a store
//! snapshot: optional substring search, optional category chip, sort
//! mode, top-pick tagging, and distance annotation when a reference
//! point is supplied.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
use tracing::{info, warn};
use vibemap_common::geo::{haversine_km, Coordinates};
use vibemap_common::model::Venue;
use vibemap_common::rank::{self, SortMode};
use vibemap_common::score::score_label;

use crate::cache::search_key;
use crate::places::adapter;
use crate::AppState;

/// Query parameters for the venue list
#[derive(Debug, Deserialize)]
pub struct VenueListQuery {
    /// Sort mode: vibe (default), price, or distance
    pub sort: Option<String>,

    /// Reference latitude (requires lng)
    pub lat: Option<f64>,

    /// Reference longitude (requires lat)
    pub lng: Option<f64>,

    /// Substring search over name, neighborhood, and tags
    pub q: Option<String>,

    /// Category chip: quiet, wifi, or study
    pub category: Option<String>,
}

/// Query parameters for the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Venue annotated for presentation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueView {
    #[serde(flatten)]
    pub venue: Venue,
    pub vibe_label: &'static str,
    pub top_pick: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// GET /api/venues?sort=vibe|price|distance&lat=..&lng=..&q=..&category=..
pub async fn list_venues(
    State(state): State<AppState>,
    Query(query): Query<VenueListQuery>,
) -> Result<Json<Vec<VenueView>>, VenueError> {
    let mode = match &query.sort {
        Some(s) => SortMode::from_str(s).ok_or_else(|| VenueError::InvalidSort(s.clone()))?,
        None => SortMode::default(),
    };

    let reference = match (query.lat, query.lng) {
        (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
        (None, None) => None,
        _ => return Err(VenueError::IncompleteReference),
    };

    if let Some(reference) = reference {
        refresh_from_provider(&state, reference).await;
    }

    let mut venues = state.store.read().await.all();

    if let Some(q) = &query.q {
        venues = rank::search_filter(&venues, q);
    }
    if let Some(category) = &query.category {
        let keywords = rank::category_keywords(category)
            .ok_or_else(|| VenueError::InvalidCategory(category.clone()))?;
        venues = rank::tag_filter(&venues, keywords);
    }

    let ranked = rank::rank(venues, mode, reference);
    Ok(Json(annotate(ranked, reference)))
}

/// GET /api/venues/search?q=pattern
///
/// Plain substring search over the stored venue set, vibe-ordered.
pub async fn search_venues(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<VenueView>> {
    let venues = state.store.read().await.search(&query.q);
    Json(annotate(venues, None))
}

/// GET /api/venues/:id
pub async fn get_venue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Venue>, VenueError> {
    state
        .store
        .read()
        .await
        .get(&id)
        .map(Json)
        .ok_or(VenueError::NotFound(id))
}

/// Annotate a ranked snapshot with labels, top picks, and distances
fn annotate(venues: Vec<Venue>, reference: Option<Coordinates>) -> Vec<VenueView> {
    let top_picks: HashSet<String> = rank::top_pick_ids(&venues).into_iter().collect();

    venues
        .into_iter()
        .map(|venue| VenueView {
            vibe_label: score_label(venue.vibe_score),
            top_pick: top_picks.contains(&venue.id),
            distance_km: reference.map(|r| haversine_km(r, venue.coordinates())),
            venue,
        })
        .collect()
}

/// Refresh the store from the places provider for one cache window
///
/// Best effort: provider failures and empty results leave the current
/// data in place (previously cached or seed data keeps serving).
pub(crate) async fn refresh_from_provider(state: &AppState, reference: Coordinates) {
    let Some(client) = &state.places else { return };
    let key = search_key(reference);

    {
        let mut cache = state.fetch_cache.lock().await;
        if let Some(venues) = cache.get(&key) {
            state.store.write().await.refresh(venues);
            return;
        }
    }

    let raw_venues = match client
        .search_coffee_shops(reference, state.config.radius_m, state.config.limit)
        .await
    {
        Ok(raw_venues) => raw_venues,
        Err(e) => {
            warn!("places fetch failed: {}; serving cached data", e);
            return;
        }
    };

    let mut venues = Vec::with_capacity(raw_venues.len());
    for raw in &raw_venues {
        let venue = adapter::draft_from_raw(raw)
            .and_then(|draft| Venue::from_draft(draft, &state.policy));
        match venue {
            Ok(venue) => venues.push(venue),
            Err(e) => warn!("skipping malformed provider venue: {}", e),
        }
    }

    if venues.is_empty() {
        info!("provider returned no usable venues; keeping current data");
        return;
    }

    state.fetch_cache.lock().await.insert(key, venues.clone());
    state.store.write().await.refresh(venues);
}

/// Venue endpoint errors
#[derive(Debug)]
pub enum VenueError {
    InvalidSort(String),
    InvalidCategory(String),
    IncompleteReference,
    NotFound(String),
}

impl IntoResponse for VenueError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            VenueError::InvalidSort(mode) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid sort mode (expected vibe, price, or distance): {}", mode),
            ),
            VenueError::InvalidCategory(category) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid category (expected quiet, wifi, or study): {}", category),
            ),
            VenueError::IncompleteReference => (
                StatusCode::BAD_REQUEST,
                "Both lat and lng are required for a reference point".to_string(),
            ),
            VenueError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Venue not found: {}", id))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
