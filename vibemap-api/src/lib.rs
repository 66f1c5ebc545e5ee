//! vibemap-api library - venue discovery HTTP service
//!
//! Serves scored, rankable venue listings over an in-memory store that
//! refreshes from the places provider one cache window at a time.

use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use vibemap_common::model::{Venue, VenueDetails};
use vibemap_common::score::ScorePolicy;
use vibemap_common::time::{Clock, SystemClock};

pub mod api;
pub mod cache;
pub mod config;
pub mod places;
pub mod seed;
pub mod store;

use cache::TtlCache;
use config::Config;
use places::FoursquareClient;
use store::VenueStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Venue store, seeded at startup
    pub store: Arc<RwLock<VenueStore>>,
    /// Time-bounded provider search cache, keyed by rounded coordinate
    pub fetch_cache: Arc<Mutex<TtlCache<String, Vec<Venue>>>>,
    /// Indefinite per-venue detail cache
    pub detail_cache: Arc<Mutex<TtlCache<String, VenueDetails>>>,
    /// Places provider client; absent when no API key is configured
    pub places: Option<Arc<FoursquareClient>>,
    /// Active scoring policy
    pub policy: Arc<ScorePolicy>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state on the system clock
    pub fn new(config: Config, policy: ScorePolicy, places: Option<FoursquareClient>) -> Self {
        Self::with_clock(config, policy, places, Arc::new(SystemClock))
    }

    /// Create application state with an injected clock (tests)
    pub fn with_clock(
        config: Config,
        policy: ScorePolicy,
        places: Option<FoursquareClient>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let policy = Arc::new(policy);
        let ttl = chrono::Duration::seconds(config.cache_ttl_secs as i64);

        Self {
            store: Arc::new(RwLock::new(VenueStore::seeded(policy.clone()))),
            fetch_cache: Arc::new(Mutex::new(TtlCache::with_ttl(ttl, clock.clone()))),
            detail_cache: Arc::new(Mutex::new(TtlCache::unbounded(clock))),
            places: places.map(Arc::new),
            policy,
            config: Arc::new(config),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/venues", get(api::list_venues))
        .route("/api/venues/search", get(api::search_venues))
        .route("/api/venues/:id", get(api::get_venue))
        .route("/api/venues/:id/details", get(api::get_venue_details))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
