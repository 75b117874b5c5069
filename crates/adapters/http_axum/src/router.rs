//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use roster_app::ports::{EventRepository, PersonRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api`, page shells at `/`, and serves the
/// frontend bundle from `static_dir` under `/static`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<PR, ER>(state: AppState<PR, ER>, static_dir: &Path) -> Router
where
    PR: PersonRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::pages::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use roster_app::services::event_service::EventService;
    use roster_app::services::person_service::PersonService;
    use roster_domain::error::RosterError;
    use roster_domain::event::{Event, EventField, NewEvent};
    use roster_domain::id::{EventId, PersonId};
    use roster_domain::person::{NewPerson, Person, PersonField, PersonFilter};
    use tower::ServiceExt;

    /// Echoes creates back with id 1 and lists nobody.
    struct StubPersonRepo;
    /// Echoes creates back with id 1 and lists two fixed events.
    struct StubEventRepo;

    impl PersonRepository for StubPersonRepo {
        async fn create(&self, person: NewPerson) -> Result<Person, RosterError> {
            Ok(person.into_person(PersonId::from_raw(1), roster_domain::time::now()))
        }
        async fn list(
            &self,
            _filter: &PersonFilter,
            _order_by: PersonField,
        ) -> Result<Vec<Person>, RosterError> {
            Ok(vec![])
        }
    }

    impl EventRepository for StubEventRepo {
        async fn create(&self, event: NewEvent) -> Result<Event, RosterError> {
            Ok(event.into_event(EventId::from_raw(1), roster_domain::time::now()))
        }
        async fn list(&self, _order_by: EventField) -> Result<Vec<Event>, RosterError> {
            Ok(vec![
                NewEvent {
                    name: "Kickoff".to_string(),
                }
                .into_event(EventId::from_raw(2), roster_domain::time::now()),
                NewEvent {
                    name: "Launch".to_string(),
                }
                .into_event(EventId::from_raw(1), roster_domain::time::now()),
            ])
        }
    }

    fn app() -> Router {
        let state = AppState::new(
            PersonService::new(StubPersonRepo),
            EventService::new(StubEventRepo),
        );
        build(state, Path::new("static"))
    }

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let resp = app().oneshot(request).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_return_empty_array_when_listing_no_people() {
        let (status, body) = send(get("/api/people")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn should_return_404_when_person_lookup_matches_nobody() {
        let (status, body) = send(get("/api/person?first_name=Nonexistent")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("first_name=Nonexistent"));
    }

    #[tokio::test]
    async fn should_return_400_when_lookup_names_unknown_field() {
        let (status, _) = send(get("/api/person?nickname=Ada")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_serialize_created_person_in_allow_list_order() {
        let (status, body) = send(post_json(
            "/api/people",
            r#"{"country_of_origin":"UK","date_of_birth":"1815-12-10","ethnicity":"British","last_name":"Lovelace","first_name":"Ada"}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            r#"{"id":1,"first_name":"Ada","last_name":"Lovelace","ethnicity":"British","date_of_birth":"1815-12-10","country_of_origin":"UK"}"#
        );
    }

    #[tokio::test]
    async fn should_return_400_when_body_is_not_an_object() {
        let (status, body) = send(post_json("/api/people", "[1, 2]")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("malformed request body"));
    }

    #[tokio::test]
    async fn should_return_400_when_body_is_not_json() {
        let (status, _) = send(post_json("/api/events", "name=Launch")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_400_when_event_has_unknown_field() {
        let (status, _) = send(post_json("/api/events", r#"{"name":"Launch","venue":"x"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_list_events_without_store_metadata() {
        let (status, body) = send(get("/api/events")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"[{"id":2,"name":"Kickoff"},{"id":1,"name":"Launch"}]"#);
    }

    #[tokio::test]
    async fn should_render_page_shells() {
        let (status, body) = send(get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"data-component="Home""#));

        let (status, body) = send(get("/example/7")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"{"id":7}"#));

        let (status, body) = send(get("/map/3")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"data-component="Map""#));
    }

    #[tokio::test]
    async fn should_reject_non_integer_page_id() {
        let (status, _) = send(get("/example/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
