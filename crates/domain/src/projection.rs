//! Allow-list projection of records into transport documents.
//!
//! Every record kind declares a fixed, ordered list of output fields. A
//! projection copies exactly those fields, in that order, with no renaming.
//! Anything else a record carries (store metadata such as `created_at`)
//! can never reach the wire because it has no [`Field`] variant.

use serde_json::Value;

/// An insertion-ordered JSON object produced by [`project`].
pub type Document = serde_json::Map<String, Value>;

/// A named column of a record kind.
pub trait Field: Copy + 'static {
    /// Wire name of the field.
    fn name(self) -> &'static str;
}

/// A record that can be projected through an allow-list.
pub trait Projectable {
    /// Field enumeration of this record kind.
    type Field: Field;

    /// Ordered allow-list used by [`project`].
    const ALLOW_LIST: &'static [Self::Field];

    /// JSON value of a single field.
    fn value_of(&self, field: Self::Field) -> Value;
}

/// Project `record` through an explicit ordered field list.
pub fn project_fields<T: Projectable>(record: &T, fields: &[T::Field]) -> Document {
    fields
        .iter()
        .map(|&field| (field.name().to_string(), record.value_of(field)))
        .collect()
}

/// Project `record` through its kind's allow-list.
pub fn project<T: Projectable>(record: &T) -> Document {
    project_fields(record, T::ALLOW_LIST)
}

/// Project every record, keeping the input order.
pub fn project_many<T: Projectable>(records: &[T]) -> Vec<Document> {
    records.iter().map(project).collect()
}
