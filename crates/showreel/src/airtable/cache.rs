use std::sync::RwLock;
use std::time::{Duration, Instant};

use showreel_core::content::Record;

/// Cache-aside store for the most recent good upstream record batch.
///
/// Read-mostly; a poisoned lock is treated as a miss rather than a failure,
/// since the worst case is one extra upstream fetch.
pub struct RecordCache {
    ttl: Duration,
    slot: RwLock<Option<Entry>>,
}

struct Entry {
    fetched_at: Instant,
    records: Vec<Record>,
}

impl RecordCache {
    /// Records are treated as valid for one hour, matching the upstream
    /// revalidation interval.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// The cached batch, unless missing or past its TTL.
    pub fn get(&self) -> Option<Vec<Record>> {
        let guard = self.slot.read().ok()?;
        let entry = guard.as_ref()?;
        if entry.fetched_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entry.records.clone())
    }

    pub fn put(&self, records: Vec<Record>) {
        if let Ok(mut guard) = self.slot.write() {
            *guard = Some(Entry {
                fetched_at: Instant::now(),
                records,
            });
        }
    }

    pub fn invalidate(&self) {
        if let Ok(mut guard) = self.slot.write() {
            *guard = None;
        }
    }
}

impl Default for RecordCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showreel_core::content::{Record, RecordFields};

    fn record(id: &str) -> Record {
        Record {
            id: id.to_string(),
            fields: RecordFields::default(),
        }
    }

    #[test]
    fn test_empty_cache_misses() {
        let cache = RecordCache::default();
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_put_then_get_within_ttl() {
        let cache = RecordCache::default();
        cache.put(vec![record("rec1"), record("rec2")]);

        let cached = cache.get().unwrap();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0].id, "rec1");
    }

    #[test]
    fn test_zero_ttl_always_expires() {
        let cache = RecordCache::new(Duration::ZERO);
        cache.put(vec![record("rec1")]);
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_invalidate_clears_entry() {
        let cache = RecordCache::default();
        cache.put(vec![record("rec1")]);
        cache.invalidate();
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_put_replaces_previous_batch() {
        let cache = RecordCache::default();
        cache.put(vec![record("old")]);
        cache.put(vec![record("new")]);

        let cached = cache.get().unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].id, "new");
    }
}
