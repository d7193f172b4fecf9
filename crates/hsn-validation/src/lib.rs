//! # hsn-validation
//!
//! Validates HSN codes against a reference catalog and reports an ordered
//! audit trail of rule outcomes.
//!
//! ## Rules
//! 1. **Numeric**: every character is a decimal digit
//! 2. **Length**: 2 to 8 digits, even
//! 3. **Hierarchy**: the code and every even-length prefix exist in the catalog
//!
//! ## Components
//! - `index`: immutable `HierarchyIndex` with precomputed ancestor sets
//! - `rules`: the three pure rules and the outcome pipeline
//! - `cache`: per-index LRU outcome cache with single-flight computation
//! - `engine`: `ValidationEngine`: single and batch validation, catalog reloads
//! - `report`: human-readable analysis of outcomes
//! - `tool`: JSON response shapes for tool-calling adapters

pub mod cache;
pub mod engine;
pub mod index;
pub mod report;
pub mod rules;
pub mod tool;

pub use cache::ValidationCache;
pub use engine::ValidationEngine;
pub use index::HierarchyIndex;
pub use report::ReportFormatter;
