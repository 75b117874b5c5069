//! JSON REST handlers for people.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, RawQuery, State};
use axum::response::{IntoResponse, Response};

use roster_app::ports::{EventRepository, PersonRepository};
use roster_domain::attributes::Attributes;
use roster_domain::error::ValidationError;
use roster_domain::person::PersonFilter;
use roster_domain::projection::{Document, project, project_many};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list and lookup endpoints.
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

/// `GET /api/people`
pub async fn list<PR, ER>(
    State(state): State<AppState<PR, ER>>,
) -> Result<ListResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let people = state.person_service.list_people().await?;
    Ok(ListResponse::Ok(Json(project_many(&people))))
}

/// `GET /api/person?<field>=<value>&…`
///
/// Responds `404` instead of an empty array when nobody matches. Every
/// parameter is kept, so a repeated key is rejected rather than collapsed.
pub async fn find<PR, ER>(
    State(state): State<AppState<PR, ER>>,
    RawQuery(raw): RawQuery,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    ensure_utf8_query(raw.as_deref())?;
    let Query(params) = params?;
    let filter = PersonFilter::from_query(&params)?;
    let people = state.person_service.find_people(filter).await?;
    Ok(ListResponse::Ok(Json(project_many(&people))))
}

/// `POST /api/people`
pub async fn create<PR, ER>(
    State(state): State<AppState<PR, ER>>,
    body: Result<Json<Attributes>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let Json(attributes) = body?;
    let person = state.person_service.create_person(attributes).await?;
    Ok(CreateResponse::Ok(Json(project(&person))))
}

/// The query extractor decodes lossily, so invalid UTF-8 is caught on the raw
/// string before it can turn into replacement characters.
fn ensure_utf8_query(raw: Option<&str>) -> Result<(), ValidationError> {
    match raw {
        Some(raw) => urlencoding::decode(raw)
            .map(|_| ())
            .map_err(|err| ValidationError::MalformedQuery(err.to_string())),
        None => Ok(()),
    }
}
