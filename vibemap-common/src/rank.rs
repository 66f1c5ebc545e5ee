//! Ranking and filtering over venue collections
//!
//! All operations take snapshots and return new vectors; input records are
//! never mutated. Sorts are stable: records with equal keys keep their
//! relative input order.

use crate::geo::{haversine_km, Coordinates};
use crate::model::Venue;

/// Sort modes for venue listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Vibe score, descending (default)
    VibeScore,
    /// Price tier rank, ascending; venues with no known tier sort last
    Price,
    /// Great-circle distance from a reference point, ascending
    Distance,
}

impl SortMode {
    /// Parse mode from a query-parameter value
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "vibe" | "vibescore" | "vibe_score" | "vibe-score" => Some(SortMode::VibeScore),
            "price" => Some(SortMode::Price),
            "distance" => Some(SortMode::Distance),
            _ => None,
        }
    }

    /// Canonical query-parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::VibeScore => "vibe",
            SortMode::Price => "price",
            SortMode::Distance => "distance",
        }
    }

    /// Get all sort mode variants
    pub fn all_variants() -> &'static [SortMode] {
        &[SortMode::VibeScore, SortMode::Price, SortMode::Distance]
    }
}

impl Default for SortMode {
    fn default() -> Self {
        SortMode::VibeScore
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Produce an ordered view over the given venues
///
/// Distance mode without a reference point is a no-op preserving input
/// order. The operation is idempotent: ranking an already ranked list
/// under the same mode yields the same ordering.
pub fn rank(mut venues: Vec<Venue>, mode: SortMode, reference: Option<Coordinates>) -> Vec<Venue> {
    match mode {
        SortMode::VibeScore => {
            venues.sort_by(|a, b| b.vibe_score.cmp(&a.vibe_score));
        }
        SortMode::Price => {
            venues.sort_by_key(|v| v.price_level.map(|t| t.rank()).unwrap_or(u8::MAX));
        }
        SortMode::Distance => {
            if let Some(reference) = reference {
                venues.sort_by(|a, b| {
                    let da = haversine_km(reference, a.coordinates());
                    let db = haversine_km(reference, b.coordinates());
                    da.total_cmp(&db)
                });
            }
        }
    }
    venues
}

/// Case-insensitive substring search over name, neighborhood, and tags
///
/// A blank query matches everything.
pub fn search_filter(venues: &[Venue], query: &str) -> Vec<Venue> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return venues.to_vec();
    }

    venues
        .iter()
        .filter(|v| {
            v.name.to_lowercase().contains(&query)
                || v.neighborhood.to_lowercase().contains(&query)
                || v.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Retain venues with any tag containing any of the given substrings
/// (case-insensitive)
pub fn tag_filter(venues: &[Venue], keywords: &[&str]) -> Vec<Venue> {
    if keywords.is_empty() {
        return venues.to_vec();
    }

    venues
        .iter()
        .filter(|v| {
            v.tags.iter().any(|tag| {
                let tag = tag.to_lowercase();
                keywords.iter().any(|k| tag.contains(&k.to_lowercase()))
            })
        })
        .cloned()
        .collect()
}

/// Tag substrings backing each category filter chip
pub fn category_keywords(category: &str) -> Option<&'static [&'static str]> {
    match category.to_lowercase().as_str() {
        "quiet" => Some(&["quiet", "cozy"]),
        "wifi" => Some(&["wifi"]),
        "study" => Some(&["study", "quiet", "wifi"]),
        _ => None,
    }
}

/// Identifiers of the top 3 venues by vibe score
///
/// Independent of any active sort mode; ties keep input order.
pub fn top_pick_ids(venues: &[Venue]) -> Vec<String> {
    let mut by_score: Vec<&Venue> = venues.iter().collect();
    by_score.sort_by(|a, b| b.vibe_score.cmp(&a.vibe_score));
    by_score.iter().take(3).map(|v| v.id.clone()).collect()
}
