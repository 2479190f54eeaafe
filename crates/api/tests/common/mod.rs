#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use shipdash_core::countries::lookup::CountryLookup;
use tower::ServiceExt;

use shipdash_api::config::{SearchLimits, ServerConfig};
use shipdash_api::router::build_app_router;
use shipdash_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and the default search limits.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        search: SearchLimits::default(),
    }
}

/// Build the full application router backed by the built-in country table.
pub fn build_test_app() -> Router {
    build_test_app_with(CountryLookup::from_builtin().unwrap())
}

/// Build the full application router backed by a substitute country table.
pub fn build_test_app_with(countries: CountryLookup) -> Router {
    build_test_app_from(test_config(), countries)
}

/// Build the full application router from an explicit config and table.
pub fn build_test_app_from(config: ServerConfig, countries: CountryLookup) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        countries: Arc::new(countries),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
