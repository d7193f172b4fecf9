//! # hsn-core
//!
//! Foundation crate for HSN code validation.
//! Defines the outcome types, errors, config, constants, and traits shared by
//! the validation engine and the catalog loader.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod observability;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::HsnConfig;
pub use errors::{HsnError, HsnResult};
pub use models::{
    BatchResult, CacheStats, CatalogEntry, CatalogMap, CodeInput, LengthViolation, RuleName,
    RuleResult, ValidationOutcome, ValidationRequest, ValidationResponse,
};
