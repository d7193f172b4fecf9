use std::path::{Path, PathBuf};

use hsn_core::config::HsnConfig;
use hsn_core::errors::HsnResult;
use hsn_core::models::CatalogMap;
use hsn_core::traits::ICatalogSource;

use crate::loader::CatalogLoader;

/// A catalog file on disk, read on every [`ICatalogSource::load`].
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
    loader: CatalogLoader,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>, loader: CatalogLoader) -> Self {
        Self {
            path: path.into(),
            loader,
        }
    }

    /// Source using the column names from `config.catalog`.
    pub fn from_config(path: impl Into<PathBuf>, config: &HsnConfig) -> Self {
        Self::new(path, CatalogLoader::new(config.catalog.clone()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ICatalogSource for FileCatalogSource {
    fn load(&self) -> HsnResult<CatalogMap> {
        self.loader.load_path(&self.path)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
