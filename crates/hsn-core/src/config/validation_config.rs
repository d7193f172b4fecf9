use serde::{Deserialize, Serialize};

use super::defaults;

/// Validation engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum number of cached outcomes per loaded catalog (LRU eviction).
    pub cache_capacity: u64,
    /// Fan batch work out across the rayon thread pool.
    pub parallel_batch: bool,
    /// Codes validated between cancellation checks.
    pub batch_chunk_size: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
            parallel_batch: defaults::DEFAULT_PARALLEL_BATCH,
            batch_chunk_size: defaults::DEFAULT_BATCH_CHUNK_SIZE,
        }
    }
}
