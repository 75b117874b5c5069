//! Event service: use-cases for creating and listing events.

use roster_domain::attributes::Attributes;
use roster_domain::error::RosterError;
use roster_domain::event::{Event, EventField, NewEvent};

use crate::ports::EventRepository;

/// Field every event listing is sorted by.
pub const EVENT_ORDER: EventField = EventField::Name;

/// Application service for event operations.
pub struct EventService<R> {
    repo: R,
}

impl<R: EventRepository> EventService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Parse `attributes` and store the resulting event.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Validation`] if the payload does not fit the
    /// event schema, or a storage error propagated from the repository.
    pub async fn create_event(&self, attributes: Attributes) -> Result<Event, RosterError> {
        let event = NewEvent::from_attributes(attributes)?;
        let created = self.repo.create(event).await?;
        tracing::debug!(id = %created.id, name = %created.name, "event created");
        Ok(created)
    }

    /// List every event, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_events(&self) -> Result<Vec<Event>, RosterError> {
        self.repo.list(EVENT_ORDER).await
    }
}
