use super::error_code::{self, HsnErrorCode};

/// Errors raised while reading a catalog source.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog file not found: {path}")]
    FileNotFound { path: String },

    #[error("unsupported catalog format for {path}; expected a .csv or .json file")]
    UnsupportedFormat { path: String },

    #[error("catalog parse error in {path} at line {line}: {message}")]
    ParseError {
        path: String,
        line: usize,
        message: String,
    },

    #[error("catalog {path} has no column named {column}")]
    MissingColumn { path: String, column: String },

    #[error("failed to read catalog {path}: {reason}")]
    Io { path: String, reason: String },
}

impl HsnErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => error_code::UNSUPPORTED_CATALOG,
            _ => error_code::CATALOG_ERROR,
        }
    }
}
