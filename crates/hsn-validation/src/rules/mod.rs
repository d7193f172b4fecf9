//! The three validation rules and the pipeline that assembles an outcome.
//!
//! Rules never fail the call: a malformed code simply fails its rules and
//! the failure is recorded in the trail.

pub mod hierarchy;
pub mod length;
pub mod numeric;

use hsn_core::constants::{DESCRIPTION_NOT_FOUND, FINAL_INVALID_MESSAGE, FINAL_VALID_MESSAGE};
use hsn_core::models::{RuleName, RuleResult, ValidationOutcome};

use crate::index::HierarchyIndex;

/// Run numeric, length, and hierarchy rules in order and append the final
/// verdict. `is_valid` is the AND of the three rules.
pub fn evaluate(code: &str, index: &HierarchyIndex) -> ValidationOutcome {
    let checks = [
        numeric::validate(code),
        length::validate(code),
        hierarchy::validate(code, index),
    ];
    let is_valid = checks.iter().all(|r| r.passed);

    let mut rule_results = Vec::with_capacity(RuleName::ORDER.len());
    rule_results.extend(checks);
    rule_results.push(if is_valid {
        RuleResult::pass(RuleName::Final, FINAL_VALID_MESSAGE)
    } else {
        RuleResult::fail(RuleName::Final, FINAL_INVALID_MESSAGE)
    });

    ValidationOutcome {
        code: code.to_string(),
        is_valid,
        rule_results,
        description: index
            .description(code)
            .unwrap_or(DESCRIPTION_NOT_FOUND)
            .to_string(),
    }
}
