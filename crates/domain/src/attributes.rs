//! Creation payloads: an untyped field → value map checked against a schema.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::ValidationError;
use crate::time::parse_date;

/// Raw attributes supplied to a `create` call.
pub type Attributes = serde_json::Map<String, Value>;

/// Consumes [`Attributes`] field by field, rejecting anything the schema does
/// not declare.
pub(crate) struct AttributeReader {
    attributes: Attributes,
}

impl AttributeReader {
    /// Check every key against `declared` before any field is read.
    ///
    /// `id` is reported as [`ValidationError::ReadOnlyField`], every other
    /// undeclared key as [`ValidationError::UnknownField`].
    pub(crate) fn new(
        entity: &'static str,
        declared: &[&'static str],
        attributes: Attributes,
    ) -> Result<Self, ValidationError> {
        for key in attributes.keys() {
            if key == "id" {
                return Err(ValidationError::ReadOnlyField { field: "id" });
            }
            if !declared.contains(&key.as_str()) {
                return Err(ValidationError::UnknownField {
                    entity,
                    field: key.clone(),
                });
            }
        }
        Ok(Self { attributes })
    }

    pub(crate) fn text(&mut self, field: &'static str) -> Result<String, ValidationError> {
        match self.attributes.remove(field) {
            None => Err(ValidationError::MissingField { field }),
            Some(Value::String(value)) => Ok(value),
            Some(_) => Err(ValidationError::InvalidType {
                field,
                expected: "a string",
            }),
        }
    }

    pub(crate) fn date(&mut self, field: &'static str) -> Result<NaiveDate, ValidationError> {
        let raw = self.text(field).map_err(|err| match err {
            ValidationError::InvalidType { field, .. } => ValidationError::InvalidType {
                field,
                expected: "a YYYY-MM-DD date string",
            },
            other => other,
        })?;
        parse_date(&raw).map_err(|_| ValidationError::InvalidDate { field, value: raw })
    }
}
