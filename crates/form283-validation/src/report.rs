//! Validation report types and the summary sentence.

use serde::{Deserialize, Serialize};

use crate::scoring::Scores;

/// One detected format violation on a filled field.
///
/// The value is reported as found; the engine never modifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCorrection {
    /// Dotted field path (Hebrew form labels, passed through unmodified).
    pub field: String,
    /// The offending value.
    pub value: String,
    /// Human-readable reason for the violation.
    pub reason: String,
}

/// Quality validation report for one Form 283 record.
///
/// Built once per validation run; immutable; keeps no reference to the
/// source record beyond the field paths it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Percentage of filled data fields without a quality issue (0-100).
    pub accuracy_score: f64,
    /// Percentage of fields that are filled (0-100).
    pub completeness_score: f64,
    /// Number of fields that have data.
    pub filled_count: usize,
    /// Total number of fields in the form.
    pub total_count: usize,
    /// Quality issues found, in schema order.
    pub corrections: Vec<FieldCorrection>,
    /// Field paths that are empty, in schema order.
    pub missing_fields: Vec<String>,
    /// Human-readable summary of the validation results.
    pub summary: String,
}

/// Render the fixed one-sentence summary from the computed metrics.
///
/// Deterministic template; ASCII punctuation only. Kept independent of
/// the rest of the pipeline so it is trivially testable on raw counts.
#[must_use]
pub fn build_summary(scores: &Scores, correction_count: usize) -> String {
    let accurate = scores.data_filled_count.saturating_sub(correction_count);
    format!(
        "Validation passed. {}/{} fields filled ({:.1}%). {}/{} data fields accurate ({:.1}%). {} quality issue(s) detected.",
        scores.filled_count,
        scores.total_count,
        scores.completeness_score,
        accurate,
        scores.data_filled_count,
        scores.accuracy_score,
        correction_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(
        filled: usize,
        total: usize,
        completeness: f64,
        data_filled: usize,
        accuracy: f64,
    ) -> Scores {
        Scores {
            completeness_score: completeness,
            accuracy_score: accuracy,
            filled_count: filled,
            total_count: total,
            data_filled_count: data_filled,
            missing_fields: Vec::new(),
        }
    }

    #[test]
    fn test_summary_matches_fixed_template() {
        let summary = build_summary(&scores(18, 23, 78.3, 22, 95.5), 1);
        assert_eq!(
            summary,
            "Validation passed. 18/23 fields filled (78.3%). 21/22 data fields accurate (95.5%). 1 quality issue(s) detected."
        );
    }

    #[test]
    fn test_summary_with_no_issues() {
        let summary = build_summary(&scores(35, 35, 100.0, 16, 100.0), 0);
        assert_eq!(
            summary,
            "Validation passed. 35/35 fields filled (100.0%). 16/16 data fields accurate (100.0%). 0 quality issue(s) detected."
        );
    }

    #[test]
    fn test_summary_is_ascii() {
        let summary = build_summary(&scores(0, 35, 0.0, 0, 100.0), 0);
        assert!(summary.is_ascii());
    }

    #[test]
    fn test_report_serialization_shape() {
        let report = ValidationReport {
            accuracy_score: 94.4,
            completeness_score: 85.7,
            filled_count: 18,
            total_count: 21,
            corrections: vec![FieldCorrection {
                field: "טלפון נייד".to_string(),
                value: "502474947".to_string(),
                reason: "Israeli mobile phone numbers must start with 05".to_string(),
            }],
            missing_fields: vec!["טלפון קווי".to_string(), "כתובת.תא דואר".to_string()],
            summary: "Validation passed. 18/21 fields filled (85.7%). 17/18 data fields accurate (94.4%). 1 quality issue(s) detected.".to_string(),
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: ValidationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        // Hebrew paths survive byte-for-byte
        assert_eq!(back.corrections[0].field, "טלפון נייד");
        assert_eq!(back.missing_fields[1], "כתובת.תא דואר");
    }
}
