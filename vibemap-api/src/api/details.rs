//! Single-venue detail handler
//!
//! Details are fetched lazily per venue and cached indefinitely once
//! obtained. Without a provider (or when the fetch fails) the view is
//! synthesized from the stored record.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::warn;
use vibemap_common::model::VenueDetails;

use super::venues::VenueError;
use crate::places::adapter;
use crate::AppState;

/// GET /api/venues/:id/details
pub async fn get_venue_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VenueDetails>, VenueError> {
    let Some(venue) = state.store.read().await.get(&id) else {
        return Err(VenueError::NotFound(id));
    };

    if let Some(details) = state.detail_cache.lock().await.get(&id) {
        return Ok(Json(details));
    }

    let details = match &state.places {
        Some(client) => match client.venue_details(&id).await {
            Ok(raw) => {
                let mut details = adapter::details_from_raw(&raw, venue);
                adapter::score_with_details(&mut details, &state.policy);
                details
            }
            Err(e) => {
                warn!(
                    "detail fetch for {} failed: {}; synthesizing from stored record",
                    id, e
                );
                adapter::synthesized_details(venue)
            }
        },
        None => adapter::synthesized_details(venue),
    };

    state.detail_cache.lock().await.insert(id, details.clone());
    Ok(Json(details))
}
