//! Shared helpers for API integration tests.
//!
//! Builds the real application router (same middleware stack as the
//! binary) on top of a per-test database and drives it with
//! `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

use hostelease_api::config::ServerConfig;
use hostelease_api::router::build_app_router;
use hostelease_api::state::AppState;

/// Principal tuple: (user id, role) forwarded as gateway headers.
pub type Principal = (i64, &'static str);

/// The test admin principal. Admins are identified by role alone, so
/// the id does not need a matching resident row.
pub const ADMIN: Principal = (1, "admin");

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send one request through a clone of the app.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    principal: Option<Principal>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some((user_id, role)) = principal {
        builder = builder
            .header("x-user-id", user_id.to_string())
            .header("x-user-role", role);
    }
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_as(app: &Router, uri: &str, principal: Principal) -> Response<Body> {
    send(app, Method::GET, uri, Some(principal), None).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    principal: Option<Principal>,
    body: Value,
) -> Response<Body> {
    send(app, Method::POST, uri, principal, Some(body)).await
}

pub async fn put_json(
    app: &Router,
    uri: &str,
    principal: Option<Principal>,
    body: Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, principal, Some(body)).await
}

pub async fn put_empty(app: &Router, uri: &str, principal: Principal) -> Response<Body> {
    send(app, Method::PUT, uri, Some(principal), None).await
}

pub async fn delete_as(app: &Router, uri: &str, principal: Principal) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(principal), None).await
}

pub async fn delete_json(
    app: &Router,
    uri: &str,
    principal: Principal,
    body: Value,
) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(principal), Some(body)).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A complete, valid registration payload for `email`.
pub fn registration_payload(email: &str) -> Value {
    json!({
        "firstName": "Asha",
        "lastName": "Verma",
        "email": email,
        "phone": "9876543210",
        "password": "secret1",
        "confirmPassword": "secret1",
        "checkInDate": "2026-09-01",
        "address": "42 MG Road",
        "city": "Pune",
        "state": "Maharashtra",
        "profession": "Student",
        "companyName": "Fergusson College",
        "emergencyContact": "9123456780",
        "idProof": "uploads/asha-id.png",
        "roomPreference": "double",
    })
}

/// Register a resident and return the created record.
pub async fn register_resident(app: &Router, email: &str) -> Value {
    let response = post_json(app, "/api/v1/register", None, registration_payload(email)).await;
    assert_eq!(response.status(), 201, "registration should succeed");
    body_json(response).await
}

/// Create a room as admin and return the created record.
pub async fn create_room(app: &Router, number: &str, capacity: i64) -> Value {
    let response = post_json(
        app,
        "/api/v1/admin/rooms",
        Some(ADMIN),
        json!({ "roomNumber": number, "roomType": "double", "capacity": capacity, "price": 8500 }),
    )
    .await;
    assert_eq!(response.status(), 201, "room creation should succeed");
    body_json(response).await
}

/// Register and approve a resident (no room), returning their id.
pub async fn active_resident(app: &Router, email: &str) -> i64 {
    let resident = register_resident(app, email).await;
    let id = resident["id"].as_i64().unwrap();
    let response = put_empty(app, &format!("/api/v1/admin/users/{id}/approve"), ADMIN).await;
    assert_eq!(response.status(), 200, "approval should succeed");
    id
}
