//! Storage port: repository traits for persistence.
//!
//! Repositories are the sole authority for identity: `create` receives a
//! record without an id and returns it with a freshly assigned one that is
//! never handed out again for the same kind.

use std::future::Future;

use roster_domain::error::RosterError;
use roster_domain::event::{Event, EventField, NewEvent};
use roster_domain::person::{NewPerson, Person, PersonField, PersonFilter};

/// Repository for persisting and querying [`Person`]s.
pub trait PersonRepository {
    /// Persist a new person and assign its id.
    fn create(&self, person: NewPerson)
    -> impl Future<Output = Result<Person, RosterError>> + Send;

    /// List people matching every constraint of `filter`, ascending by
    /// `order_by` with ties broken by ascending id.
    fn list(
        &self,
        filter: &PersonFilter,
        order_by: PersonField,
    ) -> impl Future<Output = Result<Vec<Person>, RosterError>> + Send;
}

/// Repository for persisting and querying [`Event`]s.
pub trait EventRepository {
    /// Persist a new event and assign its id.
    fn create(&self, event: NewEvent) -> impl Future<Output = Result<Event, RosterError>> + Send;

    /// List every event, ascending by `order_by` with ties broken by
    /// ascending id.
    fn list(
        &self,
        order_by: EventField,
    ) -> impl Future<Output = Result<Vec<Event>, RosterError>> + Send;
}
