//! The stateless validation facade.

use form283_core::FormRecord;

use crate::accessor::leaf_fields;
use crate::report::{build_summary, ValidationReport};
use crate::rules::FormatRuleSet;
use crate::scoring::{score, LeafStatus};

/// Validates extracted Form 283 records.
///
/// Holds only the immutable rule set; `validate` is a pure function of
/// the input record, safe to call repeatedly and concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    rules: FormatRuleSet,
}

impl Validator {
    /// Validator with the default rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator with an explicit rule set (fixed year bounds in tests).
    #[must_use]
    pub const fn with_rules(rules: FormatRuleSet) -> Self {
        Self { rules }
    }

    /// Validate one record: enumerate leaves, apply format rules, score,
    /// and assemble the report.
    #[must_use = "the validation report is the whole point of the call"]
    pub fn validate(&self, record: &FormRecord) -> ValidationReport {
        let corrections = self.rules.check(record);

        let statuses: Vec<LeafStatus<'_>> =
            leaf_fields(record).map(|leaf| LeafStatus::from(&leaf)).collect();
        let scores = score(&statuses, corrections.len());

        let summary = build_summary(&scores, corrections.len());

        ValidationReport {
            accuracy_score: scores.accuracy_score,
            completeness_score: scores.completeness_score,
            filled_count: scores.filled_count,
            total_count: scores.total_count,
            corrections,
            missing_fields: scores.missing_fields,
            summary,
        }
    }
}
