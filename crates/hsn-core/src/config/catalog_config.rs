use serde::{Deserialize, Serialize};

use super::defaults;

/// Column names used when reading tabular catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub code_column: String,
    pub description_column: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            code_column: defaults::DEFAULT_CODE_COLUMN.to_string(),
            description_column: defaults::DEFAULT_DESCRIPTION_COLUMN.to_string(),
        }
    }
}
