use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;
use crate::store::ContentStore;

fn test_state() -> AppState {
    AppState::new(ContentStore::new(json!({
        "hero": { "name": "Ada Lovelace", "subtitle": "Analyst", "backgroundImage": "/bg.jpg" },
        "projects": {
            "items": { "0": { "title": "Engine", "img": "/engine.png" } }
        }
    })))
}

static SITE_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn test_app() -> Router {
    let n = SITE_COUNTER.fetch_add(1, Ordering::Relaxed);
    let site = std::env::temp_dir().join(format!("portfolio-site-{}-{n}", std::process::id()));
    std::fs::create_dir_all(&site).unwrap();
    std::fs::write(site.join("index.html"), "<!DOCTYPE html><title>Portfolio</title>").unwrap();
    app(test_state(), &site)
}

async fn fetch(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = fetch(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn content_read_returns_section_subtree() {
    let (status, body) = get_json(test_app(), "/content/hero.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["backgroundImage"], "/bg.jpg");
}

#[tokio::test]
async fn content_read_of_missing_path_is_null() {
    let (status, body) = get_json(test_app(), "/content/certifications.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn content_read_walks_nested_paths() {
    let (status, body) = get_json(test_app(), "/content/projects/items/0/title.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Engine"));
}

#[tokio::test]
async fn content_read_requires_json_suffix() {
    let (status, body) = get_json(test_app(), "/content/hero").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn healthz_lists_sections() {
    let (status, body) = get_json(test_app(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["sections"], json!(["hero", "projects"]));
}

#[tokio::test]
async fn unknown_paths_fall_back_to_site_index() {
    let (status, body) = fetch(test_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("<title>Portfolio</title>"));
}
