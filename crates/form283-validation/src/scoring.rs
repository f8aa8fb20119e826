//! Completeness and accuracy scoring.
//!
//! Scoring is generic over the leaf enumeration rather than tied to the
//! Form 283 schema, so boundary behavior (rounding ties, degenerate
//! empty schemas) is unit-testable with synthetic field sets.

use crate::accessor::LeafField;

/// Presence/rule status of one enumerated leaf, the input to [`score`].
#[derive(Debug, Clone, Copy)]
pub struct LeafStatus<'a> {
    /// Dotted field path.
    pub path: &'a str,
    /// Non-empty after trimming.
    pub filled: bool,
    /// Subject to a format rule.
    pub data_field: bool,
}

impl<'a> From<&LeafField<'a>> for LeafStatus<'static> {
    fn from(leaf: &LeafField<'a>) -> Self {
        Self {
            path: leaf.path,
            filled: leaf.is_filled(),
            data_field: leaf.kind.is_data_field(),
        }
    }
}

/// Computed quality metrics for one validation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Scores {
    /// Percentage of all leaf fields that are filled, one decimal.
    pub completeness_score: f64,
    /// Percentage of filled data fields without a correction, one decimal.
    pub accuracy_score: f64,
    /// Number of filled leaf fields.
    pub filled_count: usize,
    /// Total number of leaf fields in the schema.
    pub total_count: usize,
    /// Number of filled data fields (the accuracy denominator).
    pub data_filled_count: usize,
    /// Paths of unfilled leaves, in schema order.
    pub missing_fields: Vec<String>,
}

/// Score a leaf enumeration against a correction count.
///
/// Pure, deterministic, total. Completeness of an empty schema is
/// defined as 0 (not a division failure); accuracy with no filled data
/// fields is defined as 100.
#[must_use]
pub fn score(leaves: &[LeafStatus<'_>], correction_count: usize) -> Scores {
    let total_count = leaves.len();
    let filled_count = leaves.iter().filter(|l| l.filled).count();
    let data_filled_count = leaves.iter().filter(|l| l.filled && l.data_field).count();

    let missing_fields: Vec<String> = leaves
        .iter()
        .filter(|l| !l.filled)
        .map(|l| l.path.to_string())
        .collect();

    let completeness_score = if total_count == 0 {
        0.0
    } else {
        round1(100.0 * filled_count as f64 / total_count as f64)
    };

    let accuracy_score = if data_filled_count == 0 {
        100.0
    } else {
        let accurate = data_filled_count.saturating_sub(correction_count);
        round1(100.0 * accurate as f64 / data_filled_count as f64)
    };

    Scores {
        completeness_score,
        accuracy_score,
        filled_count,
        total_count,
        data_filled_count,
        missing_fields,
    }
}

/// Round to one decimal place, half away from zero.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic(total: usize, filled: usize, data: usize) -> Vec<LeafStatus<'static>> {
        // First `filled` leaves are filled; first `data` leaves carry rules
        (0..total)
            .map(|i| LeafStatus {
                path: "field",
                filled: i < filled,
                data_field: i < data,
            })
            .collect()
    }

    #[test]
    fn test_completeness_18_of_23() {
        let leaves = synthetic(23, 18, 0);
        let scores = score(&leaves, 0);
        assert_eq!(scores.completeness_score, 78.3);
        assert_eq!(scores.filled_count, 18);
        assert_eq!(scores.total_count, 23);
        assert_eq!(scores.missing_fields.len(), 5);
    }

    #[test]
    fn test_accuracy_denominator_is_filled_data_fields() {
        // 22 filled data fields, 1 correction -> 21/22 = 95.5
        let leaves = synthetic(30, 22, 22);
        let scores = score(&leaves, 1);
        assert_eq!(scores.data_filled_count, 22);
        assert_eq!(scores.accuracy_score, 95.5);
    }

    #[test]
    fn test_completeness_rounds_half_up_on_exact_tie() {
        // 313/400 = 78.25 exactly representable in binary -> 78.3
        let leaves = synthetic(400, 313, 0);
        let scores = score(&leaves, 0);
        assert_eq!(scores.completeness_score, 78.3);
    }

    #[test]
    fn test_empty_schema_completeness_is_zero() {
        let scores = score(&[], 0);
        assert_eq!(scores.completeness_score, 0.0);
        assert_eq!(scores.total_count, 0);
        assert_eq!(scores.accuracy_score, 100.0);
        assert!(scores.missing_fields.is_empty());
    }

    #[test]
    fn test_no_filled_data_fields_is_perfect_accuracy() {
        // Policy: accuracy over zero data fields is 100, not undefined
        let leaves = synthetic(10, 5, 0);
        let scores = score(&leaves, 0);
        assert_eq!(scores.accuracy_score, 100.0);
    }

    #[test]
    fn test_missing_plus_filled_equals_total() {
        for filled in 0..=10 {
            let leaves = synthetic(10, filled, 3);
            let scores = score(&leaves, 0);
            assert_eq!(scores.missing_fields.len() + scores.filled_count, 10);
        }
    }

    #[test]
    fn test_missing_fields_preserve_order() {
        let leaves = [
            LeafStatus { path: "א", filled: true, data_field: false },
            LeafStatus { path: "ב", filled: false, data_field: false },
            LeafStatus { path: "ג", filled: false, data_field: true },
        ];
        let scores = score(&leaves, 0);
        assert_eq!(scores.missing_fields, vec!["ב", "ג"]);
    }

    #[test]
    fn test_accuracy_bounds() {
        // More corrections than filled data fields saturates at 0
        let leaves = synthetic(5, 3, 3);
        let scores = score(&leaves, 5);
        assert_eq!(scores.accuracy_score, 0.0);

        let scores = score(&leaves, 0);
        assert_eq!(scores.accuracy_score, 100.0);
    }

    #[test]
    fn test_full_record_scores_100() {
        let leaves = synthetic(35, 35, 16);
        let scores = score(&leaves, 0);
        assert_eq!(scores.completeness_score, 100.0);
        assert_eq!(scores.accuracy_score, 100.0);
        assert!(scores.missing_fields.is_empty());
    }
}
