//! Per-index outcome cache.
//!
//! Uses `moka::sync::Cache` with an LRU eviction policy. Misses go through
//! moka's entry API, so concurrent requests for the same uncached code run
//! the rules once and share the result, while other keys proceed unblocked.
//! Tracks hits/misses for the lifetime of the cache.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use hsn_core::models::{CacheStats, ValidationOutcome};
use moka::policy::EvictionPolicy;
use moka::sync::Cache;
use tracing::trace;

use crate::index::HierarchyIndex;
use crate::rules;

/// Memoized outcomes for one `HierarchyIndex`.
///
/// A cache is bound to the index it was created with. Loading a new catalog
/// means creating a new cache, so outcomes computed against a superseded
/// catalog can never be served.
pub struct ValidationCache {
    index: Arc<HierarchyIndex>,
    entries: Cache<String, Arc<ValidationOutcome>>,
    capacity: u64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ValidationCache {
    /// Create an empty cache holding at most `capacity` outcomes.
    pub fn new(index: Arc<HierarchyIndex>, capacity: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(capacity)
            .eviction_policy(EvictionPolicy::lru())
            .build();
        Self {
            index,
            entries,
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the outcome for `code`, computing and storing it on a miss.
    pub fn get(&self, code: &str) -> Arc<ValidationOutcome> {
        let entry = self
            .entries
            .entry_by_ref(code)
            .or_insert_with(|| Arc::new(rules::evaluate(code, &self.index)));

        if entry.is_fresh() {
            self.misses.fetch_add(1, Ordering::Relaxed);
            // Apply eviction now so capacity holds after every insert.
            self.entries.run_pending_tasks();
            trace!(code, "validation cache miss");
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        entry.into_value()
    }

    /// Whether an outcome for `code` is currently cached. Does not touch
    /// recency or the hit/miss counters.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Drop every cached outcome. Counters keep running.
    pub fn clear(&self) {
        self.entries.invalidate_all();
        self.entries.run_pending_tasks();
    }

    /// Snapshot of size, hits, misses, and capacity.
    pub fn stats(&self) -> CacheStats {
        self.entries.run_pending_tasks();
        CacheStats {
            size: self.entries.entry_count(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            capacity: self.capacity,
        }
    }

    /// The index this cache validates against.
    pub fn index(&self) -> &Arc<HierarchyIndex> {
        &self.index
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }
}

impl std::fmt::Debug for ValidationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationCache")
            .field("catalog_codes", &self.index.len())
            .field("capacity", &self.capacity)
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}
