use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Materialized catalog: code → description. Keys are unique.
pub type CatalogMap = HashMap<String, String>;

/// One row of the reference catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub code: String,
    pub description: String,
}

impl CatalogEntry {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    /// Collect entries into a catalog map. Later duplicates win.
    pub fn into_map<I>(entries: I) -> CatalogMap
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        entries
            .into_iter()
            .map(|e| (e.code, e.description))
            .collect()
    }
}
