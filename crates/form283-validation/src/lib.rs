//! Quality validation and scoring for extracted Form 283 records.
//!
//! Given a [`FormRecord`](form283_core::FormRecord) produced by the
//! extraction pipeline, this crate decides which fields are present,
//! which present values violate the form's format rules, and produces
//! completeness/accuracy scores plus a human-readable summary.
//!
//! The engine observes; it never corrects values, re-queries a service,
//! or infers missing data. Missing fields are a first-class outcome, not
//! an error. Every component is a pure function of its input, so any
//! number of validations may run concurrently on independent records.
//!
//! # Components
//!
//! - [`accessor`] — enumerates every leaf field with its dotted path, in
//!   the fixed schema order.
//! - [`rules`] — [`FormatRuleSet`]: per-field format checks (ID check
//!   digit, phone prefixes/lengths, leap-year-aware dates, postal code).
//! - [`scoring`] — completeness and accuracy percentages, missing-field
//!   list.
//! - [`report`] — [`ValidationReport`] assembly and the fixed summary
//!   sentence.
//! - [`validator`] — the [`Validator`] facade tying the above together.
//!
//! # Example
//!
//! ```
//! use form283_core::FormRecord;
//! use form283_validation::Validator;
//!
//! let record: FormRecord = serde_json::from_str(
//!     r#"{"שם משפחה": "כהן", "טלפון נייד": "650-123-4567"}"#,
//! ).unwrap();
//!
//! let report = Validator::new().validate(&record);
//!
//! assert_eq!(report.filled_count, 2);
//! assert_eq!(report.corrections.len(), 1);
//! assert!(report.corrections[0].reason.contains("05"));
//! ```

pub mod accessor;
pub mod report;
pub mod rules;
pub mod scoring;
pub mod validator;

pub use accessor::{leaf_fields, LeafField};
pub use report::{FieldCorrection, ValidationReport};
pub use rules::FormatRuleSet;
pub use scoring::{LeafStatus, Scores};
pub use validator::Validator;
