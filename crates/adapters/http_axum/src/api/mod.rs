//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod events;
#[allow(clippy::missing_errors_doc)]
pub mod people;

use axum::Router;
use axum::routing::get;

use roster_app::ports::{EventRepository, PersonRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<PR, ER>() -> Router<AppState<PR, ER>>
where
    PR: PersonRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    Router::new()
        // People
        .route(
            "/people",
            get(people::list::<PR, ER>).post(people::create::<PR, ER>),
        )
        .route("/person", get(people::find::<PR, ER>))
        // Events
        .route(
            "/events",
            get(events::list::<PR, ER>).post(events::create::<PR, ER>),
        )
}
