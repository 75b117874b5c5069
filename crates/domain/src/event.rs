//! Event: a named occurrence, listed alphabetically.

use serde_json::Value;

use crate::attributes::{AttributeReader, Attributes};
use crate::error::ValidationError;
use crate::id::EventId;
use crate::projection::{Field, Projectable};
use crate::time::Timestamp;

const ENTITY: &str = "Event";

/// A stored event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    /// Set by the store on insert; never serialized.
    pub created_at: Timestamp,
}

/// An event that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
}

impl NewEvent {
    /// Parse a creation payload. `name` is required and is the only
    /// writable field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] on undeclared fields, `id`, a missing
    /// `name`, or a non-string `name`.
    pub fn from_attributes(attributes: Attributes) -> Result<Self, ValidationError> {
        let mut reader = AttributeReader::new(ENTITY, &[EventField::Name.name()], attributes)?;
        Ok(Self {
            name: reader.text(EventField::Name.name())?,
        })
    }

    /// Attach the identity and creation time assigned by the store.
    #[must_use]
    pub fn into_event(self, id: EventId, created_at: Timestamp) -> Event {
        Event {
            id,
            name: self.name,
            created_at,
        }
    }
}

/// Serializable and sortable columns of an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    Id,
    Name,
}

impl EventField {
    /// Every field, in allow-list order.
    pub const ALL: &'static [Self] = &[Self::Id, Self::Name];
}

impl Field for EventField {
    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
        }
    }
}

impl Projectable for Event {
    type Field = EventField;
    const ALLOW_LIST: &'static [EventField] = EventField::ALL;

    fn value_of(&self, field: EventField) -> Value {
        match field {
            EventField::Id => Value::from(self.id.as_raw()),
            EventField::Name => Value::from(self.name.clone()),
        }
    }
}
