//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RosterError`] via `From`, so callers only ever match on one enum.

use std::fmt;

/// Top-level error returned by every application operation.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The caller supplied attributes or filters the schema does not accept.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A lookup that must yield at least one record yielded none.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Rejections raised while turning caller input into domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The payload names a field the entity does not declare.
    #[error("{entity} has no field named `{field}`")]
    UnknownField { entity: &'static str, field: String },

    /// The payload tries to set a field the store assigns itself.
    #[error("`{field}` is assigned by the store and cannot be set")]
    ReadOnlyField { field: &'static str },

    /// A required field is absent.
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    /// A field holds a JSON value of the wrong type.
    #[error("field `{field}` must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// A date field could not be parsed as `YYYY-MM-DD`.
    #[error("field `{field}` is not a valid YYYY-MM-DD date: {value:?}")]
    InvalidDate { field: &'static str, value: String },

    /// An identifier could not be parsed as an integer.
    #[error("invalid identifier: {value:?}")]
    InvalidId { value: String },

    /// A filter names the same field twice.
    #[error("field `{field}` is constrained more than once")]
    DuplicateField { field: &'static str },

    /// The query string is not valid percent-encoded UTF-8.
    #[error("malformed query string: {0}")]
    MalformedQuery(String),

    /// The request body could not be read as a JSON object.
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// A filtered lookup matched no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundError {
    /// Entity kind that was queried (e.g. `"Person"`).
    pub entity: &'static str,
    /// Human-readable rendering of the filter that matched nothing.
    pub filter: String,
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.filter.is_empty() {
            write!(f, "no {} found", self.entity)
        } else {
            write!(f, "no {} found matching {}", self.entity, self.filter)
        }
    }
}

impl std::error::Error for NotFoundError {}
