//! Configuration for HSN validation.
//! TOML-based, 3-layer resolution: env > config file > defaults.

pub mod catalog_config;
pub mod defaults;
pub mod hsn_config;
pub mod observability_config;
pub mod validation_config;

pub use catalog_config::CatalogConfig;
pub use hsn_config::HsnConfig;
pub use observability_config::ObservabilityConfig;
pub use validation_config::ValidationConfig;
