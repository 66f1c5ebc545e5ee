//! # Vibemap Common Library
//!
//! Shared code for the Vibemap backend including:
//! - Venue data model and validation
//! - Vibe score engine with injectable scoring policies
//! - Ranking and filtering over venue collections
//! - Great-circle distance math
//! - Clock abstraction for deterministic time handling

pub mod error;
pub mod geo;
pub mod model;
pub mod rank;
pub mod score;
pub mod time;

pub use error::{Error, Result};
pub use model::{PriceTier, Venue, VenueDetails, VenueDraft};
pub use rank::SortMode;
pub use score::{compute_vibe_score, ScoreInputs, ScorePolicy};
