//! Numeric rule: every character is a decimal digit.

use hsn_core::models::{RuleName, RuleResult};

/// Passes iff `code` is non-empty and all ASCII digits.
pub fn validate(code: &str) -> RuleResult {
    if is_numeric(code) {
        RuleResult::pass(RuleName::Numeric, "Valid number")
    } else if code.is_empty() {
        RuleResult::fail(
            RuleName::Numeric,
            "Invalid number - empty code contains no digits",
        )
    } else {
        RuleResult::fail(
            RuleName::Numeric,
            "Invalid number - contains non-digit characters",
        )
    }
}

pub fn is_numeric(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c.is_ascii_digit())
}
