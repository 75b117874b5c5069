//! Shared application state for axum handlers.

use std::sync::Arc;

use roster_app::ports::{EventRepository, PersonRepository};
use roster_app::services::event_service::EventService;
use roster_app::services::person_service::PersonService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<PR, ER> {
    /// Person use-cases.
    pub person_service: Arc<PersonService<PR>>,
    /// Event use-cases.
    pub event_service: Arc<EventService<ER>>,
}

impl<PR, ER> Clone for AppState<PR, ER> {
    fn clone(&self) -> Self {
        Self {
            person_service: Arc::clone(&self.person_service),
            event_service: Arc::clone(&self.event_service),
        }
    }
}

impl<PR, ER> AppState<PR, ER>
where
    PR: PersonRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(person_service: PersonService<PR>, event_service: EventService<ER>) -> Self {
        Self {
            person_service: Arc::new(person_service),
            event_service: Arc::new(event_service),
        }
    }
}
