//! # hsn-catalog
//!
//! Reads HSN reference catalogs from CSV or JSON files into the
//! code → description map the validation engine consumes.

pub mod code;
pub mod csv;
pub mod json;
pub mod loader;
pub mod source;

pub use loader::{CatalogFormat, CatalogLoader};
pub use source::FileCatalogSource;
