//! JSON REST handlers for events.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};

use roster_app::ports::{EventRepository, PersonRepository};
use roster_domain::attributes::Attributes;
use roster_domain::projection::{Document, project, project_many};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Document>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok(Json<Document>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/events`
pub async fn list<PR, ER>(
    State(state): State<AppState<PR, ER>>,
) -> Result<ListResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let events = state.event_service.list_events().await?;
    Ok(ListResponse::Ok(Json(project_many(&events))))
}

/// `POST /api/events`
pub async fn create<PR, ER>(
    State(state): State<AppState<PR, ER>>,
    body: Result<Json<Attributes>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let Json(attributes) = body?;
    let event = state.event_service.create_event(attributes).await?;
    Ok(CreateResponse::Ok(Json(project(&event))))
}
