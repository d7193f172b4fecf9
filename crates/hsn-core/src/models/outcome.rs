use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DESCRIPTION_NOT_FOUND;

/// The rules of the audit trail, in their fixed evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleName {
    #[serde(rename = "number_validator")]
    Numeric,
    #[serde(rename = "length_validator")]
    Length,
    #[serde(rename = "hierarchical_validator")]
    Hierarchy,
    #[serde(rename = "final_result")]
    Final,
}

impl RuleName {
    /// Every rule in audit-trail order.
    pub const ORDER: [RuleName; 4] = [
        RuleName::Numeric,
        RuleName::Length,
        RuleName::Hierarchy,
        RuleName::Final,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "number_validator",
            Self::Length => "length_validator",
            Self::Hierarchy => "hierarchical_validator",
            Self::Final => "final_result",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a code failed the length rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthViolation {
    TooShort,
    TooLong,
    OddLength,
}

/// One entry of the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule: RuleName,
    pub passed: bool,
    pub message: String,
}

impl RuleResult {
    pub fn pass(rule: RuleName, message: impl Into<String>) -> Self {
        Self {
            rule,
            passed: true,
            message: message.into(),
        }
    }

    pub fn fail(rule: RuleName, message: impl Into<String>) -> Self {
        Self {
            rule,
            passed: false,
            message: message.into(),
        }
    }
}

/// Full result of validating one code.
///
/// `rule_results` always holds numeric, length, hierarchy, and final entries,
/// in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub code: String,
    pub is_valid: bool,
    pub rule_results: Vec<RuleResult>,
    /// Catalog description, or `"not found"`.
    pub description: String,
}

impl ValidationOutcome {
    /// Look up the trail entry for a rule.
    pub fn rule(&self, rule: RuleName) -> Option<&RuleResult> {
        self.rule_results.iter().find(|r| r.rule == rule)
    }

    /// Trail entries for the three checks that did not pass.
    pub fn failed_rules(&self) -> impl Iterator<Item = &RuleResult> {
        self.rule_results
            .iter()
            .filter(|r| r.rule != RuleName::Final && !r.passed)
    }

    /// Whether the code was present in the catalog.
    pub fn found(&self) -> bool {
        self.description != DESCRIPTION_NOT_FOUND
    }
}
