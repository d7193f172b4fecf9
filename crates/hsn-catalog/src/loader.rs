//! File-format dispatch for catalog loading.

use std::path::Path;

use hsn_core::config::CatalogConfig;
use hsn_core::errors::{CatalogError, HsnError, HsnResult};
use hsn_core::models::CatalogMap;
use tracing::info;

use crate::{csv, json};

/// Catalog file formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Csv,
    Json,
}

impl CatalogFormat {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Reads catalogs from disk or from in-memory text.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    config: CatalogConfig,
}

impl CatalogLoader {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Load a `.csv` or `.json` catalog file.
    pub fn load_path(&self, path: &Path) -> HsnResult<CatalogMap> {
        let origin = path.display().to_string();
        let format = CatalogFormat::from_path(path)?;
        if !path.is_file() {
            return Err(CatalogError::FileNotFound { path: origin }.into());
        }
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: origin.clone(),
            reason: e.to_string(),
        })?;

        let catalog = self.load_str(&content, format, &origin)?;
        info!(path = %origin, entries = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Parse catalog text. `origin` names the source in errors and logs.
    pub fn load_str(&self, content: &str, format: CatalogFormat, origin: &str) -> HsnResult<CatalogMap> {
        let catalog = match format {
            CatalogFormat::Csv => csv::parse(content, &self.config, origin)?,
            CatalogFormat::Json => json::parse(content, &self.config, origin)?,
        };
        if catalog.is_empty() {
            return Err(HsnError::InvalidCatalog {
                reason: format!("{origin} contains no catalog entries"),
            });
        }
        Ok(catalog)
    }
}
