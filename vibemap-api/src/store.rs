//! In-memory venue store
//!
//! Exclusively owns the venue records, indexed by identifier. Handlers
//! read snapshots; nothing outside the store mutates a record. Score
//! recomputation on update is enforced by the model layer.

use std::collections::HashMap;
use std::sync::Arc;
use vibemap_common::model::{Venue, VenueDraft, VenueUpdate};
use vibemap_common::rank::{self, SortMode};
use vibemap_common::score::ScorePolicy;
use vibemap_common::Result;

pub struct VenueStore {
    venues: HashMap<String, Venue>,
    policy: Arc<ScorePolicy>,
}

impl VenueStore {
    pub fn new(policy: Arc<ScorePolicy>) -> Self {
        Self {
            venues: HashMap::new(),
            policy,
        }
    }

    /// Store pre-populated with the static seed set
    pub fn seeded(policy: Arc<ScorePolicy>) -> Self {
        let mut store = Self::new(policy);
        for draft in crate::seed::seed_drafts() {
            // Seed data is known-valid; a rejected draft is a programming error
            if let Err(e) = store.insert(draft) {
                tracing::error!("seed venue rejected: {}", e);
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<Venue> {
        self.venues.get(id).cloned()
    }

    /// Validate a draft, score it, and index it by id
    pub fn insert(&mut self, draft: VenueDraft) -> Result<Venue> {
        let venue = Venue::from_draft(draft, &self.policy)?;
        self.venues.insert(venue.id.clone(), venue.clone());
        Ok(venue)
    }

    /// Apply a partial update; the score recomputes when scoring inputs change
    pub fn update(&mut self, id: &str, update: VenueUpdate) -> Option<Venue> {
        let venue = self.venues.get_mut(id)?;
        venue.apply_update(update, &self.policy);
        Some(venue.clone())
    }

    /// Replace the full record set with a freshly fetched snapshot
    ///
    /// Called at the end of a cache window; live provider data supersedes
    /// whatever was held before (seed data included).
    pub fn refresh(&mut self, venues: Vec<Venue>) {
        self.venues = venues.into_iter().map(|v| (v.id.clone(), v)).collect();
    }

    /// Deterministic snapshot of every record, ordered by identifier
    pub fn all(&self) -> Vec<Venue> {
        let mut venues: Vec<Venue> = self.venues.values().cloned().collect();
        venues.sort_by(|a, b| a.id.cmp(&b.id));
        venues
    }

    /// Snapshot ordered by vibe score, descending
    pub fn all_by_vibe(&self) -> Vec<Venue> {
        rank::rank(self.all(), SortMode::VibeScore, None)
    }

    /// Substring search over name, neighborhood, and tags, vibe-ordered
    pub fn search(&self, query: &str) -> Vec<Venue> {
        rank::search_filter(&self.all_by_vibe(), query)
    }
}
