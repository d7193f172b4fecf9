//! Human-readable validation analysis.
//!
//! Pure formatting over outcomes; nothing here validates or prints.

use std::fmt::Write;

use hsn_core::models::{BatchResult, RuleName, ValidationOutcome};

use crate::index::HierarchyIndex;

const HEAVY_RULE: &str = "==============================";
const LIGHT_RULE: &str = "--------------------";

/// Renders outcomes as a sectioned report: format checks, hierarchy checks
/// with parent descriptions, and an overall assessment per code.
pub struct ReportFormatter<'a> {
    index: &'a HierarchyIndex,
}

impl<'a> ReportFormatter<'a> {
    pub fn new(index: &'a HierarchyIndex) -> Self {
        Self { index }
    }

    /// Report for a single outcome, including the title block.
    pub fn render_outcome(&self, outcome: &ValidationOutcome) -> String {
        let mut out = title();
        self.write_section(&mut out, outcome);
        out
    }

    /// Report for a batch, one section per input position, plus a summary.
    pub fn render_batch(&self, batch: &BatchResult) -> String {
        let mut out = title();
        for outcome in batch {
            self.write_section(&mut out, outcome);
        }
        let _ = writeln!(
            out,
            "Summary: {} codes, {} valid, {} invalid",
            batch.len(),
            batch.valid_count(),
            batch.invalid_count()
        );
        if !batch.completed {
            let _ = writeln!(out, "Batch cancelled after {} codes", batch.len());
        }
        out
    }

    fn write_section(&self, out: &mut String, outcome: &ValidationOutcome) {
        let _ = writeln!(out, "Code: {}\n{LIGHT_RULE}", outcome.code);

        let format_issues: Vec<&str> = outcome
            .rule_results
            .iter()
            .filter(|r| matches!(r.rule, RuleName::Numeric | RuleName::Length) && !r.passed)
            .map(|r| r.message.as_str())
            .collect();
        let hierarchy = outcome.rule(RuleName::Hierarchy);
        let hierarchy_ok = hierarchy.is_some_and(|r| r.passed);

        out.push_str("1. Format Validation:\n");
        if format_issues.is_empty() {
            out.push_str("   • Status: success\n");
            out.push_str("   • The code meets the basic format requirements:\n");
            out.push_str("     - Contains only digits\n");
            out.push_str("     - Length is between 2-8 digits\n");
            out.push_str("     - Length is even (2, 4, 6, or 8 digits)\n");
        } else {
            out.push_str("   • Status: error\n");
            for issue in &format_issues {
                let _ = writeln!(out, "   • Issue: {issue}");
            }
        }

        out.push_str("\n2. Hierarchy Validation:\n");
        if hierarchy_ok {
            out.push_str("   • Status: success\n");
            out.push_str("   • The code exists in the HSN hierarchy\n");
            let _ = writeln!(out, "\n   • Description:\n     {}", outcome.description);
            out.push_str("\n   • Parent Codes:\n");
            for parent in self.index.present_ancestors(&outcome.code) {
                let description = self.index.description(parent).unwrap_or_default();
                let _ = writeln!(out, "     - {parent}: {description}");
            }
        } else {
            out.push_str("   • Status: error\n");
            if let Some(r) = hierarchy {
                let _ = writeln!(out, "   • Issue: {}", r.message);
            }
        }

        out.push_str("\n3. Overall Assessment:\n");
        if outcome.is_valid {
            out.push_str("   • The HSN code is completely valid\n");
            out.push_str("   • It meets all format requirements\n");
            out.push_str("   • It exists in the proper hierarchy\n");
            let _ = writeln!(out, "\n   • Final Description:\n     {}", outcome.description);
        } else {
            out.push_str("   • The HSN code requires attention\n");
            if !format_issues.is_empty() {
                out.push_str("   • Please correct the format issues first\n");
            }
            if !hierarchy_ok {
                out.push_str("   • Please verify the code exists in the HSN hierarchy\n");
            }
        }

        let _ = writeln!(out, "\n{HEAVY_RULE}\n");
    }
}

fn title() -> String {
    format!("HSN Code Validation Analysis\n{HEAVY_RULE}\n\n")
}
