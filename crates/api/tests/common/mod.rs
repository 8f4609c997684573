#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use trainerhub_api::config::ServerConfig;
use trainerhub_api::router::build_app_router;
use trainerhub_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("POST", uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("PUT", uri, body)).await
}

/// POST a raw body with an arbitrary content type.
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: &'static str,
) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

pub async fn post_form(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    post_raw(app, uri, "application/x-www-form-urlencoded", body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a subject and return its id.
pub async fn create_subject(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/subjects/create/",
        serde_json::json!({ "subject_name": name }),
    )
    .await;
    body_json(response).await["subject"]["subject_id"]
        .as_i64()
        .unwrap()
}

/// Create a trainer from a JSON payload and return its code.
pub async fn create_trainer(pool: &PgPool, body: serde_json::Value) -> String {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/trainer/create/", body).await;
    body_json(response).await["trainer"]["trainer_code"]
        .as_str()
        .unwrap()
        .to_string()
}
