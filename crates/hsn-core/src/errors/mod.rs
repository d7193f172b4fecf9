//! Error handling for HSN validation.
//! One error enum per subsystem, `thiserror` only.
//!
//! Per-code rule failures are not errors: they are reported inside
//! `ValidationOutcome`. Only structural misuse surfaces here.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod hsn_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::HsnErrorCode;
pub use hsn_error::{HsnError, HsnResult};
