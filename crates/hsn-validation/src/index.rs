//! Immutable catalog view with precomputed ancestor sets.

use std::collections::HashMap;
use std::time::Instant;

use hsn_core::constants::LEVEL_WIDTH;
use hsn_core::errors::{HsnError, HsnResult};
use hsn_core::models::CatalogMap;
use tracing::info;

/// Read-only index over one loaded catalog.
///
/// For every catalog code of length L, `ancestors[code]` holds exactly the
/// prefixes of length 2, 4, …, L−2 that are themselves catalog codes, in
/// increasing length. Computed once in [`HierarchyIndex::build`].
#[derive(Debug)]
pub struct HierarchyIndex {
    entries: HashMap<String, String>,
    ancestors: HashMap<String, Vec<String>>,
}

impl HierarchyIndex {
    /// Build the index. Fails on an empty catalog or an empty code.
    pub fn build(catalog: CatalogMap) -> HsnResult<Self> {
        let start = Instant::now();

        if catalog.is_empty() {
            return Err(HsnError::InvalidCatalog {
                reason: "catalog has no entries".to_string(),
            });
        }
        if catalog.keys().any(|code| code.trim().is_empty()) {
            return Err(HsnError::InvalidCatalog {
                reason: "catalog contains an empty code".to_string(),
            });
        }

        let ancestors: HashMap<String, Vec<String>> = catalog
            .keys()
            .map(|code| {
                let present = even_prefixes(code)
                    .filter(|prefix| catalog.contains_key(*prefix))
                    .map(str::to_string)
                    .collect();
                (code.clone(), present)
            })
            .collect();

        let with_missing = catalog
            .keys()
            .filter(|code| ancestors[*code].len() < even_prefixes(code).count())
            .count();

        info!(
            codes = catalog.len(),
            codes_with_missing_ancestors = with_missing,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "hierarchy index built"
        );

        Ok(Self {
            entries: catalog,
            ancestors,
        })
    }

    pub fn exists(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn description(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Ancestor codes present in the catalog, shortest first.
    /// Empty for codes not in the catalog.
    pub fn present_ancestors(&self, code: &str) -> &[String] {
        self.ancestors.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Even-length proper prefixes of `code` absent from the catalog, shortest
    /// first. Empty when `code` itself is absent: hierarchy checks report
    /// "not found" for such codes instead of enumerating ancestors.
    pub fn missing_ancestors(&self, code: &str) -> Vec<String> {
        let Some(present) = self.ancestors.get(code) else {
            return Vec::new();
        };
        even_prefixes(code)
            .filter(|prefix| !present.iter().any(|p| p == prefix))
            .map(str::to_string)
            .collect()
    }

    /// Number of catalog codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a built index; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All catalog codes, unordered.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Proper prefixes of `code` whose length (in characters) is a positive
/// multiple of the level width: lengths 2, 4, …, len−2.
pub fn even_prefixes(code: &str) -> impl Iterator<Item = &str> {
    code.char_indices()
        .enumerate()
        .filter(|(chars, _)| *chars > 0 && chars % LEVEL_WIDTH == 0)
        .map(move |(_, (byte_idx, _))| &code[..byte_idx])
}
