//! Validation engine: owns the current index + cache, validates single codes
//! and ordered batches, and swaps catalogs.

use std::sync::{Arc, RwLock};
use std::time::Instant;

use hsn_core::config::ValidationConfig;
use hsn_core::errors::{HsnError, HsnResult};
use hsn_core::models::{
    BatchResult, CacheStats, CatalogMap, CodeInput, ValidationOutcome, ValidationRequest,
    ValidationResponse,
};
use hsn_core::traits::{Cancellable, ICatalogSource, ICodeValidator, NeverCancelled};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::cache::ValidationCache;
use crate::index::HierarchyIndex;

/// The validation orchestrator.
///
/// Holds at most one loaded catalog. Each load builds a fresh
/// `HierarchyIndex` and a fresh `ValidationCache` bound to it; the previous
/// pair is dropped once in-flight calls release it.
pub struct ValidationEngine {
    config: ValidationConfig,
    current: RwLock<Option<Arc<ValidationCache>>>,
}

impl ValidationEngine {
    /// Create an engine with no catalog loaded.
    ///
    /// A zero `cache_capacity` or `batch_chunk_size` is raised to 1.
    pub fn new(mut config: ValidationConfig) -> Self {
        if config.cache_capacity == 0 {
            warn!("cache_capacity of 0 raised to 1");
            config.cache_capacity = 1;
        }
        if config.batch_chunk_size == 0 {
            warn!("batch_chunk_size of 0 raised to 1");
            config.batch_chunk_size = 1;
        }
        Self {
            config,
            current: RwLock::new(None),
        }
    }

    /// Create an engine and load `catalog` into it.
    pub fn with_catalog(config: ValidationConfig, catalog: CatalogMap) -> HsnResult<Self> {
        let engine = Self::new(config);
        engine.load_catalog(catalog)?;
        Ok(engine)
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Build an index from `catalog` and make it current. On error the
    /// previously loaded catalog stays in place.
    pub fn load_catalog(&self, catalog: CatalogMap) -> HsnResult<()> {
        let index = HierarchyIndex::build(catalog)?;
        self.load_index(Arc::new(index))
    }

    /// Make `index` current with an empty cache.
    pub fn load_index(&self, index: Arc<HierarchyIndex>) -> HsnResult<()> {
        let codes = index.len();
        let cache = Arc::new(ValidationCache::new(index, self.config.cache_capacity));
        let mut current = self
            .current
            .write()
            .map_err(|e| HsnError::ConcurrencyError(format!("engine lock: {e}")))?;
        let replaced = current.replace(cache).is_some();
        info!(codes, replaced, "catalog loaded");
        Ok(())
    }

    /// Load a catalog from an external source.
    pub fn load_from(&self, source: &dyn ICatalogSource) -> HsnResult<()> {
        let start = Instant::now();
        let catalog = source.load().inspect_err(|e| {
            warn!(source = %source.describe(), error = %e, "catalog load failed");
        })?;
        self.load_catalog(catalog)?;
        info!(
            source = %source.describe(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "catalog source loaded"
        );
        Ok(())
    }

    pub fn is_loaded(&self) -> HsnResult<bool> {
        self.current
            .read()
            .map(|c| c.is_some())
            .map_err(|e| HsnError::ConcurrencyError(format!("engine lock: {e}")))
    }

    /// The currently loaded index.
    pub fn index(&self) -> HsnResult<Arc<HierarchyIndex>> {
        Ok(Arc::clone(self.snapshot()?.index()))
    }

    /// Validate one code. Integers are coerced to decimal strings.
    pub fn validate_one(&self, code: impl Into<CodeInput>) -> HsnResult<ValidationOutcome> {
        let input = code.into();
        let code = input.as_code();
        let cache = self.snapshot()?;

        let start = Instant::now();
        let outcome = cache.get(&code);
        debug!(
            code = %code,
            is_valid = outcome.is_valid,
            elapsed_us = start.elapsed().as_micros() as u64,
            "single code validated"
        );
        Ok(ValidationOutcome::clone(&outcome))
    }

    /// Validate codes in input order. Duplicates are kept; one outcome per
    /// input position.
    pub fn validate_batch<S: AsRef<str> + Sync>(&self, codes: &[S]) -> HsnResult<BatchResult> {
        self.validate_batch_with_cancel(codes, &NeverCancelled)
    }

    /// Validate codes in input order, checking `cancel` between chunks.
    ///
    /// When cancelled, returns the outcomes produced so far with
    /// `completed = false`. The whole batch runs against one catalog even if
    /// another is loaded concurrently.
    pub fn validate_batch_with_cancel<S: AsRef<str> + Sync>(
        &self,
        codes: &[S],
        cancel: &dyn Cancellable,
    ) -> HsnResult<BatchResult> {
        let cache = self.snapshot()?;
        let start = Instant::now();

        let mut outcomes = Vec::with_capacity(codes.len());
        let mut completed = true;
        for chunk in codes.chunks(self.config.batch_chunk_size) {
            if cancel.is_cancelled() {
                completed = false;
                break;
            }
            if self.config.parallel_batch {
                // Indexed collect writes each result into its input slot.
                let results: Vec<ValidationOutcome> = chunk
                    .par_iter()
                    .map(|code| ValidationOutcome::clone(&cache.get(code.as_ref())))
                    .collect();
                outcomes.extend(results);
            } else {
                outcomes.extend(
                    chunk
                        .iter()
                        .map(|code| ValidationOutcome::clone(&cache.get(code.as_ref()))),
                );
            }
        }

        let batch = BatchResult::new(outcomes, completed);
        if completed {
            info!(
                codes = codes.len(),
                valid = batch.valid_count(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "batch validation completed"
            );
        } else {
            warn!(
                codes = codes.len(),
                produced = batch.len(),
                "batch validation cancelled"
            );
        }
        Ok(batch)
    }

    /// Dispatch a typed request to single or batch validation.
    pub fn validate_request(&self, request: ValidationRequest) -> HsnResult<ValidationResponse> {
        match request {
            ValidationRequest::Single(code) => self.validate_one(code).map(ValidationResponse::Single),
            ValidationRequest::Batch(codes) => {
                let codes: Vec<String> = codes.into_iter().map(CodeInput::into_code).collect();
                self.validate_batch(&codes).map(ValidationResponse::Batch)
            }
        }
    }

    /// Statistics for the current catalog's cache.
    pub fn cache_stats(&self) -> HsnResult<CacheStats> {
        Ok(self.snapshot()?.stats())
    }

    /// Drop cached outcomes for the current catalog.
    pub fn clear_cache(&self) -> HsnResult<()> {
        self.snapshot()?.clear();
        Ok(())
    }

    fn snapshot(&self) -> HsnResult<Arc<ValidationCache>> {
        let current = self
            .current
            .read()
            .map_err(|e| HsnError::ConcurrencyError(format!("engine lock: {e}")))?;
        current.as_ref().map(Arc::clone).ok_or(HsnError::NoCatalogLoaded)
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

impl ICodeValidator for ValidationEngine {
    fn validate(&self, code: &str) -> HsnResult<ValidationOutcome> {
        self.validate_one(code)
    }

    fn validate_many(&self, codes: &[String]) -> HsnResult<BatchResult> {
        self.validate_batch(codes)
    }
}
