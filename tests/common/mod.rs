//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{ConnectOptions, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt;

use user_directory::api::{create_router, AppState};
use user_directory::infra::{Database, InMemoryUserStore, Migrator, UserRepository};
use user_directory::NewUser;

pub const JOHN_EMAIL: &str = "john.doe@example.com";

pub fn john() -> NewUser {
    NewUser::new("John", "Doe", JOHN_EMAIL, "password")
}

pub fn jane() -> NewUser {
    NewUser::new("Jane", "Doe", "jane.doe@example.com", "password")
}

/// Fresh in-memory SQLite connection with migrations applied.
pub async fn sqlite_connection() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // A single connection keeps every query on the same in-memory database
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = sea_orm::Database::connect(options)
        .await
        .expect("sqlite connection");
    Migrator::up(&db, None).await.expect("migrations");
    db
}

/// Router over an in-memory store seeded with John Doe.
pub async fn memory_app() -> (Router, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::new());
    store.save(john()).await.expect("seed user");
    (create_router(AppState::in_memory(store.clone())), store)
}

/// Router over the SeaORM store on SQLite seeded with John Doe.
pub async fn sqlite_app() -> Router {
    let database = Arc::new(Database::from_connection(sqlite_connection().await));
    let state = AppState::from_database(database);
    state
        .user_service
        .create_user(john())
        .await
        .expect("seed user");
    create_router(state)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request and collect status and raw body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

/// Send a request and parse the body as JSON.
pub async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(app, request).await;
    let value = serde_json::from_slice(&body)
        .unwrap_or_else(|e| panic!("invalid JSON body ({}): {:?}", e, String::from_utf8_lossy(&body)));
    (status, value)
}
