//! HTTP API handlers for vibemap-api

pub mod details;
pub mod health;
pub mod venues;

pub use details::get_venue_details;
pub use health::health_routes;
pub use venues::{get_venue, list_venues, search_venues};
