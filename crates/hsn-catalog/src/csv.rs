//! CSV catalogs with a header row.
//!
//! Columns are found by name, so extra columns and any column order are
//! accepted. Cells are trimmed after unquoting.

use hsn_core::config::CatalogConfig;
use hsn_core::errors::{CatalogError, HsnError, HsnResult};
use hsn_core::models::CatalogMap;
use tracing::{debug, warn};

use crate::code::normalize_code;

fn parse_error(path: &str, err: &csv::Error) -> CatalogError {
    CatalogError::ParseError {
        path: path.to_string(),
        line: err.position().map_or(0, |p| p.line() as usize),
        message: err.to_string(),
    }
}

fn column_index(headers: &csv::StringRecord, column: &str, path: &str) -> Result<usize, CatalogError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| CatalogError::MissingColumn {
            path: path.to_string(),
            column: column.to_string(),
        })
}

/// Parse a CSV catalog using the configured column names.
///
/// Rows with an empty code are skipped. A code that appears twice keeps the
/// description from its last row.
pub fn parse(content: &str, config: &CatalogConfig, path: &str) -> HsnResult<CatalogMap> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(|e| parse_error(path, &e))?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(HsnError::InvalidCatalog {
            reason: format!("{path} has no header row"),
        });
    }
    let code_idx = column_index(&headers, &config.code_column, path)?;
    let desc_idx = column_index(&headers, &config.description_column, path)?;

    let mut catalog = CatalogMap::new();
    let mut skipped = 0usize;
    for result in reader.records() {
        let record = result.map_err(|e| parse_error(path, &e))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, |p| p.line() as usize);
        let (Some(code), Some(description)) = (record.get(code_idx), record.get(desc_idx)) else {
            return Err(CatalogError::ParseError {
                path: path.to_string(),
                line,
                message: format!(
                    "expected at least {} fields, found {}",
                    code_idx.max(desc_idx) + 1,
                    record.len()
                ),
            }
            .into());
        };

        let code = normalize_code(code);
        if code.is_empty() {
            warn!(path, line, "skipping catalog row with empty code");
            skipped += 1;
            continue;
        }
        if let Some(previous) = catalog.insert(code.clone(), description.to_string()) {
            debug!(path, line, code = %code, previous = %previous, "duplicate code overrides earlier row");
        }
    }

    debug!(path, entries = catalog.len(), skipped, "csv catalog parsed");
    Ok(catalog)
}
