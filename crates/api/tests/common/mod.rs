#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use starwars_core::repository::PlanetRepository;
use starwars_core::service::PlanetService;
use starwars_core::testing::InMemoryPlanetRepo;
use tower::ServiceExt;

use starwars_api::config::ServerConfig;
use starwars_api::router::build_app_router;
use starwars_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
    }
}

/// Build the full application router over a fresh in-memory repository.
///
/// The returned router is cheap to clone; clones share the same store.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(InMemoryPlanetRepo::new()))
}

/// Build the full application router over the given repository.
pub fn build_test_app_with(repo: Arc<dyn PlanetRepository>) -> Router {
    let state = AppState {
        planets: PlanetService::new(repo),
    };
    build_app_router(state, &test_config())
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: String) -> Response<Body> {
    send(
        app,
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create the three reference planets and return their ids in order.
pub async fn seed(app: &Router) -> Vec<i64> {
    let mut ids = Vec::new();
    for planet in [
        serde_json::json!({"name": "Tatooine", "climate": "arid", "terrain": "desert"}),
        serde_json::json!({"name": "Alderaan", "climate": "temperate", "terrain": "grasslands, mountains"}),
        serde_json::json!({"name": "Yavin IV", "climate": "temperate, tropical", "terrain": "jungle, rainforests"}),
    ] {
        let json = body_json(post_json(app, "/planets", planet).await).await;
        ids.push(json["id"].as_i64().unwrap());
    }
    ids
}
