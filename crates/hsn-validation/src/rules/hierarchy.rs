//! Hierarchy rule: the code and all of its ancestors exist in the catalog.

use hsn_core::models::{RuleName, RuleResult};

use crate::index::HierarchyIndex;

pub fn validate(code: &str, index: &HierarchyIndex) -> RuleResult {
    if !index.exists(code) {
        return RuleResult::fail(
            RuleName::Hierarchy,
            format!("code not found in hierarchy: {code}"),
        );
    }

    let missing = index.missing_ancestors(code);
    if missing.is_empty() {
        RuleResult::pass(RuleName::Hierarchy, "Valid hierarchy - all parent codes exist")
    } else {
        RuleResult::fail(
            RuleName::Hierarchy,
            format!("parent codes {} not found in hierarchy", missing.join(", ")),
        )
    }
}
