//! Data model shared by the validation engine, adapters, and loaders.

pub mod batch;
pub mod cache_stats;
pub mod catalog;
pub mod input;
pub mod outcome;

pub use batch::BatchResult;
pub use cache_stats::CacheStats;
pub use catalog::{CatalogEntry, CatalogMap};
pub use input::{CodeInput, ValidationRequest, ValidationResponse};
pub use outcome::{LengthViolation, RuleName, RuleResult, ValidationOutcome};
