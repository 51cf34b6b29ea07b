//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Emulates the hosted store's REST read path under `/content` and serves the
//! built client for everything else, so the site runs end to end locally.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::Router;
use axum::extract::{Path as UrlPath, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use serde::Serialize;
use serde_json::{Value, json};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full dev host: content API plus the static site at `site_dir`.
pub fn app(state: AppState, site_dir: &Path) -> Router {
    let site = ServeDir::new(site_dir)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(site_dir.join("index.html")));

    api_routes(state)
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/content/{*path}", get(read_subtree))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// `GET /content/{path}.json`: the subtree at `path`, or `null` when absent.
async fn read_subtree(State(state): State<AppState>, UrlPath(path): UrlPath<String>) -> Response {
    let Some(key) = path.strip_suffix(".json") else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "content paths must end in .json" }))).into_response();
    };
    let value = state.content.subtree(key).cloned().unwrap_or(Value::Null);
    tracing::debug!(%key, found = !value.is_null(), "content read");
    Json(value).into_response()
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    sections: Vec<String>,
}

async fn healthz(State(state): State<AppState>) -> Json<Health> {
    Json(Health { status: "ok", sections: state.content.sections() })
}
