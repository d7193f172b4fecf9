//! JSON response shapes for tool-calling and agent adapters.
//!
//! Each function is a thin translation of `ValidationOutcome`/`BatchResult`
//! into the payloads agent frameworks expect. Maps keyed by code keep the
//! last outcome for a repeated code; use the batch itself when positional
//! correspondence matters.

use std::fmt::Write;

use hsn_core::errors::{HsnError, HsnErrorCode};
use hsn_core::models::{BatchResult, RuleName, ValidationOutcome, ValidationRequest, ValidationResponse};
use serde_json::{json, Map, Value};

use crate::engine::ValidationEngine;
use crate::index::HierarchyIndex;

/// Format-only verdicts (numeric + length) keyed by code.
pub fn format_results(batch: &BatchResult) -> Map<String, Value> {
    batch
        .iter()
        .map(|outcome| {
            let format_ok = [RuleName::Numeric, RuleName::Length]
                .iter()
                .all(|rule| outcome.rule(*rule).is_some_and(|r| r.passed));
            let value = if format_ok {
                json!({
                    "status": "success",
                    "is_valid": true,
                    "message": "HSN code format is valid.",
                })
            } else {
                json!({
                    "status": "error",
                    "error_message": "HSN code format is invalid.",
                })
            };
            (outcome.code.clone(), value)
        })
        .collect()
}

/// Hierarchy verdicts keyed by code, with descriptions for codes that pass.
pub fn hierarchy_results(batch: &BatchResult, index: &HierarchyIndex) -> Map<String, Value> {
    batch
        .iter()
        .map(|outcome| {
            let value = match outcome.rule(RuleName::Hierarchy) {
                Some(r) if r.passed => json!({
                    "status": "success",
                    "message": "Valid hierarchy",
                    "description": index.description(&outcome.code).unwrap_or_default(),
                }),
                Some(r) => json!({
                    "status": "error",
                    "message": r.message,
                }),
                None => json!({
                    "status": "error",
                    "message": "hierarchy rule did not run",
                }),
            };
            (outcome.code.clone(), value)
        })
        .collect()
}

/// Session-state record for one outcome.
pub fn session_state(outcome: &ValidationOutcome) -> Value {
    let details: Vec<Value> = outcome
        .rule_results
        .iter()
        .map(|r| json!([r.rule.as_str(), r.message]))
        .collect();
    json!({
        "is_valid": outcome.is_valid,
        "code": outcome.code,
        "description": outcome.description,
        "validation_details": details,
    })
}

/// Plain-text agent reply for one outcome.
pub fn agent_reply(outcome: &ValidationOutcome) -> String {
    let mut text = format!(
        "Code: {}\nDescription: {}\nIs Valid: {}\n\nValidation Results:",
        outcome.code, outcome.description, outcome.is_valid
    );
    for r in &outcome.rule_results {
        let _ = write!(text, "\n{}: {}", r.rule, r.message);
    }
    text
}

/// Error payload for structural failures.
pub fn error_response(err: &HsnError) -> Value {
    json!({
        "status": "error",
        "error_code": err.error_code(),
        "error_message": err.to_string(),
    })
}

/// Parse a dynamic request, validate it, and return a JSON payload.
///
/// Single codes return the session-state record; batches return
/// `{"status": "success", "completed", "results": [...]}` in input order.
/// Structural errors (unsupported input shape, no catalog) return
/// [`error_response`] rather than failing the call.
pub fn handle_request(engine: &ValidationEngine, request: &Value) -> Value {
    let response = ValidationRequest::from_json(request)
        .and_then(|req| engine.validate_request(req));
    match response {
        Ok(ValidationResponse::Single(outcome)) => session_state(&outcome),
        Ok(ValidationResponse::Batch(batch)) => json!({
            "status": "success",
            "completed": batch.completed,
            "results": batch.iter().map(session_state).collect::<Vec<_>>(),
        }),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;
    use hsn_core::config::ValidationConfig;
    use hsn_core::models::CatalogMap;

    fn catalog() -> CatalogMap {
        [
            ("01", "Live animals"),
            ("0101", "Live horses, asses, mules and hinnies"),
            ("010110", "Pure-bred breeding animals"),
        ]
        .into_iter()
        .map(|(c, d)| (c.to_string(), d.to_string()))
        .collect()
    }

    #[test]
    fn format_and_hierarchy_maps() {
        let index = HierarchyIndex::build(catalog()).unwrap();
        let batch = BatchResult::new(
            vec![
                rules::evaluate("010110", &index),
                rules::evaluate("999999", &index),
                rules::evaluate("12AB", &index),
            ],
            true,
        );

        let format = format_results(&batch);
        assert_eq!(format["010110"]["status"], "success");
        assert_eq!(format["999999"]["status"], "success");
        assert_eq!(format["12AB"]["error_message"], "HSN code format is invalid.");

        let hierarchy = hierarchy_results(&batch, &index);
        assert_eq!(hierarchy["010110"]["description"], "Pure-bred breeding animals");
        assert_eq!(hierarchy["999999"]["status"], "error");
        assert_eq!(hierarchy["999999"]["message"], "code not found in hierarchy: 999999");
    }

    #[test]
    fn session_state_and_reply() {
        let index = HierarchyIndex::build(catalog()).unwrap();
        let outcome = rules::evaluate("0101", &index);

        let state = session_state(&outcome);
        assert_eq!(state["is_valid"], true);
        assert_eq!(state["validation_details"][0][0], "number_validator");
        assert_eq!(state["validation_details"][3][1], "Code is valid");

        let reply = agent_reply(&outcome);
        assert!(reply.starts_with("Code: 0101\nDescription: Live horses"));
        assert!(reply.ends_with("final_result: Code is valid"));
    }

    #[test]
    fn handle_request_shapes() {
        let engine = ValidationEngine::with_catalog(ValidationConfig::default(), catalog()).unwrap();

        let single = handle_request(&engine, &json!("010110"));
        assert_eq!(single["is_valid"], true);

        let batch = handle_request(&engine, &json!(["01", "ABC"]));
        assert_eq!(batch["results"][0]["code"], "01");
        assert_eq!(batch["results"][1]["is_valid"], false);

        let rejected = handle_request(&engine, &json!(101));
        assert_eq!(rejected["error_code"], "INVALID_INPUT");
    }

    #[test]
    fn handle_request_without_catalog() {
        let engine = ValidationEngine::default();
        let response = handle_request(&engine, &json!("01"));
        assert_eq!(response["error_code"], "NO_CATALOG");
    }
}
