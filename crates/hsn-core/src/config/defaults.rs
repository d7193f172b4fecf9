// Single source of truth for all default values.

// --- Validation ---
pub const DEFAULT_CACHE_CAPACITY: u64 = 1_000;
pub const DEFAULT_PARALLEL_BATCH: bool = true;
pub const DEFAULT_BATCH_CHUNK_SIZE: usize = 256;

// --- Catalog ---
pub const DEFAULT_CODE_COLUMN: &str = "HSNCode";
pub const DEFAULT_DESCRIPTION_COLUMN: &str = "Description";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
