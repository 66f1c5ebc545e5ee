//! Time-bounded fetch cache
//!
//! An explicit cache abstraction with an injected clock and an explicit
//! TTL, so expiry is deterministically testable. A TTL of `None` means
//! entries never expire (the detail cache). Expired entries are evicted
//! lazily on access.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use vibemap_common::geo::Coordinates;
use vibemap_common::time::Clock;

struct Entry<V> {
    value: V,
    inserted_at: DateTime<Utc>,
}

/// Key/value cache with optional time-to-live
pub struct TtlCache<K, V> {
    entries: HashMap<K, Entry<V>>,
    ttl: Option<Duration>,
    clock: Arc<dyn Clock>,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    /// Cache whose entries expire after `ttl`
    pub fn with_ttl(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            ttl: Some(ttl),
            clock,
        }
    }

    /// Cache whose entries never expire
    pub fn unbounded(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            ttl: None,
            clock,
        }
    }

    pub fn insert(&mut self, key: K, value: V) {
        let inserted_at = self.clock.now();
        self.entries.insert(key, Entry { value, inserted_at });
    }

    /// Get a live entry, evicting it if the TTL has elapsed
    pub fn get(&mut self, key: &K) -> Option<V> {
        let expired = match self.entries.get(key) {
            None => return None,
            Some(entry) => match self.ttl {
                Some(ttl) => self.clock.now() - entry.inserted_at >= ttl,
                None => false,
            },
        };

        if expired {
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Drop every expired entry
    pub fn purge_expired(&mut self) {
        let Some(ttl) = self.ttl else { return };
        let now = self.clock.now();
        self.entries.retain(|_, entry| now - entry.inserted_at < ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cache key for a provider search: the reference coordinate rounded to
/// two decimal places (~1 km), so nearby requests share a window
pub fn search_key(reference: Coordinates) -> String {
    format!("{:.2},{:.2}", reference.latitude, reference.longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibemap_common::time::ManualClock;

    fn manual_clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(Utc::now()))
    }

    #[test]
    fn test_entry_live_within_ttl() {
        let clock = manual_clock();
        let mut cache: TtlCache<String, u32> =
            TtlCache::with_ttl(Duration::hours(1), clock.clone());

        cache.insert("k".to_string(), 7);
        clock.advance(Duration::minutes(59));
        assert_eq!(cache.get(&"k".to_string()), Some(7));
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let clock = manual_clock();
        let mut cache: TtlCache<String, u32> =
            TtlCache::with_ttl(Duration::hours(1), clock.clone());

        cache.insert("k".to_string(), 7);
        clock.advance(Duration::hours(1));
        assert_eq!(cache.get(&"k".to_string()), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_reinsert_resets_window() {
        let clock = manual_clock();
        let mut cache: TtlCache<String, u32> =
            TtlCache::with_ttl(Duration::hours(1), clock.clone());

        cache.insert("k".to_string(), 7);
        clock.advance(Duration::minutes(45));
        cache.insert("k".to_string(), 8);
        clock.advance(Duration::minutes(45));
        assert_eq!(cache.get(&"k".to_string()), Some(8));
    }

    #[test]
    fn test_unbounded_never_expires() {
        let clock = manual_clock();
        let mut cache: TtlCache<String, u32> = TtlCache::unbounded(clock.clone());

        cache.insert("k".to_string(), 7);
        clock.advance(Duration::days(365));
        assert_eq!(cache.get(&"k".to_string()), Some(7));
    }

    #[test]
    fn test_purge_expired() {
        let clock = manual_clock();
        let mut cache: TtlCache<String, u32> =
            TtlCache::with_ttl(Duration::hours(1), clock.clone());

        cache.insert("old".to_string(), 1);
        clock.advance(Duration::minutes(50));
        cache.insert("new".to_string(), 2);
        clock.advance(Duration::minutes(20));

        cache.purge_expired();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"new".to_string()), Some(2));
    }

    #[test]
    fn test_search_key_rounds_coordinates() {
        let a = search_key(Coordinates::new(43.2557, -79.8711));
        let b = search_key(Coordinates::new(43.2612, -79.8689));
        assert_eq!(a, "43.26,-79.87");
        assert_eq!(a, b);

        let c = search_key(Coordinates::new(43.6532, -79.3832));
        assert_ne!(a, c);
    }
}
