//! Leaf enumeration over the static field schema.

use form283_core::{FieldKind, FormRecord, FIELD_SPECS};

/// A transient view of one leaf field: its dotted path, current value,
/// and the format rule it is subject to.
///
/// Produced on demand by [`leaf_fields`]; borrows from the record and is
/// never persisted.
#[derive(Debug, Clone, Copy)]
pub struct LeafField<'a> {
    /// Dotted path from the record root (Hebrew form labels).
    pub path: &'static str,
    /// Raw leaf value; empty string means missing.
    pub value: &'a str,
    /// Rule assignment from the schema.
    pub kind: FieldKind,
}

impl LeafField<'_> {
    /// A field counts as filled iff non-empty after trimming.
    #[inline]
    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

/// Enumerate every leaf field of `record` in schema declaration order.
///
/// Deterministic and total: the order is fixed by the schema table, not
/// by the record's construction order, and the traversal never fails.
pub fn leaf_fields(record: &FormRecord) -> impl Iterator<Item = LeafField<'_>> {
    FIELD_SPECS.iter().map(move |spec| LeafField {
        path: spec.path,
        value: (spec.get)(record),
        kind: spec.kind,
    })
}
