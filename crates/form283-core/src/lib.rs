//! # Form 283 Core - Data Model and Field Schema
//!
//! Core types for the Israeli National Insurance Form 283 extraction
//! pipeline ("Application for Medical Treatment for Self-Employed Work
//! Injury").
//!
//! This crate defines:
//!
//! - [`FormRecord`] and its composite sub-records ([`DateValue`],
//!   [`AddressValue`], [`MedicalInfo`]) — the structured record produced
//!   by the upstream extraction step, with Hebrew serde keys that
//!   round-trip byte-for-byte against the form's field labels.
//! - The static field schema ([`FIELD_SPECS`]) — an ordered table of
//!   dotted field paths, format-rule kinds, and pure getters. Traversal
//!   order is fixed by field declaration order and is load-bearing for
//!   downstream scoring.
//! - [`Form283Error`] — the shared error type for the pipeline.
//!
//! # Example
//!
//! ```
//! use form283_core::{FormRecord, FIELD_SPECS, TOTAL_FIELDS};
//!
//! let record: FormRecord = serde_json::from_str(
//!     r#"{"שם משפחה": "כהן", "מספר זהות": "123456782"}"#,
//! ).unwrap();
//!
//! assert_eq!(record.last_name, "כהן");
//! assert_eq!(FIELD_SPECS.len(), TOTAL_FIELDS);
//! ```

pub mod error;
pub mod record;
pub mod schema;

pub use error::{Form283Error, Result};
pub use record::{AddressValue, DateValue, FormRecord, MedicalInfo};
pub use schema::{DateComponent, FieldKind, FieldSpec, FIELD_SPECS, TOTAL_FIELDS};
