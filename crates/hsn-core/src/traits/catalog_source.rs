use crate::errors::HsnResult;
use crate::models::CatalogMap;

/// Supplies a fully materialized catalog to the validation engine.
///
/// Implementations own all format-specific parsing; the engine only sees
/// the finished code → description mapping.
pub trait ICatalogSource: Send + Sync {
    /// Read the catalog.
    fn load(&self) -> HsnResult<CatalogMap>;

    /// Human-readable name of the source, for logs.
    fn describe(&self) -> String;
}
