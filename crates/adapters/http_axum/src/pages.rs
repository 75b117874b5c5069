//! Page shells for the frontend router.
//!
//! Every page is the same near-empty HTML document: the frontend bundle
//! reads `data-component` to pick the component to mount and the embedded
//! JSON props to initialise it.

use askama::Template;
use axum::Router;
use axum::extract::Path;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde_json::{Value, json};

use roster_app::ports::{EventRepository, PersonRepository};

use crate::state::AppState;

/// HTML shell template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct ShellTemplate {
    title: &'static str,
    component_name: &'static str,
    component_props: String,
}

impl ShellTemplate {
    fn new(title: &'static str, component_name: &'static str, props: &Value) -> Self {
        Self {
            title,
            component_name,
            component_props: script_safe_json(props),
        }
    }
}

impl IntoResponse for ShellTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Serialize `value` for embedding inside a `<script>` element.
///
/// `</` is escaped so no string inside the props can close the element.
fn script_safe_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// `GET /`
pub async fn index() -> ShellTemplate {
    ShellTemplate::new("Home page", "Home", &json!({}))
}

/// `GET /example/{id}`
pub async fn example(Path(example_id): Path<i64>) -> ShellTemplate {
    ShellTemplate::new("Example ID page", "ExampleId", &json!({ "id": example_id }))
}

/// `GET /map/{id}`
pub async fn map(Path(map_id): Path<i64>) -> ShellTemplate {
    tracing::trace!(map_id, "rendering map page");
    ShellTemplate::new("Map page", "Map", &json!({}))
}

/// Build the page-shell sub-router.
pub fn routes<PR, ER>() -> Router<AppState<PR, ER>>
where
    PR: PersonRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/example/{id}", get(example))
        .route("/map/{id}", get(map))
}
