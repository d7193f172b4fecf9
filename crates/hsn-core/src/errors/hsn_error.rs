use super::error_code::{self, HsnErrorCode};
use super::{CatalogError, ConfigError};

/// Top-level error for catalog loading and validation calls.
#[derive(Debug, thiserror::Error)]
pub enum HsnError {
    #[error("invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("no catalog loaded; load a catalog before validating")]
    NoCatalogLoaded,

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),
}

pub type HsnResult<T> = Result<T, HsnError>;

impl HsnErrorCode for HsnError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCatalog { .. } => error_code::INVALID_CATALOG,
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::NoCatalogLoaded => error_code::NO_CATALOG,
            Self::Catalog(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::ConcurrencyError(_) => error_code::CONCURRENCY_ERROR,
        }
    }
}
