//! JSON catalogs: either `{ "code": "description", ... }` or an array of row
//! objects keyed by the configured column names.

use hsn_core::config::CatalogConfig;
use hsn_core::errors::{CatalogError, HsnError, HsnResult};
use hsn_core::models::CatalogMap;
use serde_json::Value;
use tracing::{debug, warn};

use crate::code::normalize_code;

fn row_error(path: &str, row: usize, message: String) -> HsnError {
    CatalogError::ParseError {
        path: path.to_string(),
        line: row,
        message,
    }
    .into()
}

/// Render a JSON scalar as a catalog cell. Numbers use their decimal form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}

/// Parse a JSON catalog.
///
/// Row-level errors report the 1-based row index in `line`.
pub fn parse(content: &str, config: &CatalogConfig, path: &str) -> HsnResult<CatalogMap> {
    let value: Value = serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
        path: path.to_string(),
        line: e.line(),
        message: e.to_string(),
    })?;

    let catalog = match value {
        Value::Object(map) => {
            let mut catalog = CatalogMap::with_capacity(map.len());
            for (row, (code, description)) in map.into_iter().enumerate() {
                let description = scalar_text(&description).ok_or_else(|| {
                    row_error(path, row + 1, format!("description for {code} is not a scalar"))
                })?;
                insert(&mut catalog, &code, description, path, row + 1);
            }
            catalog
        }
        Value::Array(rows) => {
            let mut catalog = CatalogMap::with_capacity(rows.len());
            for (idx, row) in rows.iter().enumerate() {
                let Value::Object(fields) = row else {
                    return Err(row_error(path, idx + 1, "row is not an object".to_string()));
                };
                let code = fields.get(&config.code_column).ok_or_else(|| {
                    CatalogError::MissingColumn {
                        path: path.to_string(),
                        column: config.code_column.clone(),
                    }
                })?;
                let description = fields.get(&config.description_column).ok_or_else(|| {
                    CatalogError::MissingColumn {
                        path: path.to_string(),
                        column: config.description_column.clone(),
                    }
                })?;
                let (Some(code), Some(description)) = (scalar_text(code), scalar_text(description))
                else {
                    return Err(row_error(path, idx + 1, "code and description must be scalars".to_string()));
                };
                insert(&mut catalog, &code, description, path, idx + 1);
            }
            catalog
        }
        _ => {
            return Err(HsnError::InvalidCatalog {
                reason: format!("{path} must hold a JSON object or array"),
            })
        }
    };

    debug!(path, entries = catalog.len(), "json catalog parsed");
    Ok(catalog)
}

fn insert(catalog: &mut CatalogMap, raw_code: &str, description: String, path: &str, row: usize) {
    let code = normalize_code(raw_code);
    if code.is_empty() {
        warn!(path, row, "skipping catalog row with empty code");
        return;
    }
    catalog.insert(code, description.trim().to_string());
}
