//! Shared helpers for API integration tests.
//!
//! `build_test_app` uses the same router builder as `main.rs`, so tests
//! exercise the full middleware stack (CORS, request ID, timeout, tracing,
//! panic recovery) that production uses.

// Each integration test binary compiles this module separately and not every
// binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use atoll_api::auth::jwt::JwtConfig;
use atoll_api::config::ServerConfig;
use atoll_api::router::build_app_router;
use atoll_api::state::AppState;
use atoll_db::models::island::{CreateIsland, Island};
use atoll_db::models::user::{CreateUser, User};
use atoll_db::repositories::{IslandRepo, UserRepo};

/// Fixed signing secret for tests so tokens can be minted directly.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults and a known JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            token_expiry_mins: 15,
            login_token_expiry_mins: 30,
        },
    }
}

/// Build the full application router over the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Mint a bearer token for the given email using the test secret.
pub fn test_token(email: &str) -> String {
    atoll_api::auth::jwt::generate_access_token(email, None, &test_config().jwt)
        .expect("token generation should succeed")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body (the login endpoint).
pub async fn post_form(app: Router, uri: &str, form: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user directly through the repository and return the row plus the
/// plaintext password used.
pub async fn seed_user(pool: &PgPool, email: &str, is_admin: bool) -> (User, String) {
    let password = "test_password_123";
    let hashed =
        atoll_api::auth::password::hash_password(password).expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            name: Some("Test User".to_string()),
            password_hash: hashed,
            is_admin,
        },
    )
    .await
    .expect("user creation should succeed");
    (user, password.to_string())
}

/// Insert an island with sensible defaults, overriding only name and type.
pub async fn seed_island(pool: &PgPool, name: &str, island_type: &str) -> Island {
    IslandRepo::create(
        pool,
        &CreateIsland {
            name: name.to_string(),
            atoll: "Kaafu Atoll".to_string(),
            latitude: 3.9423,
            longitude: 73.4907,
            island_type: island_type.to_string(),
            population: Some(3000),
            description: Some("Test island".to_string()),
            tags: vec!["beach".to_string()],
            image_urls: vec![],
            size_km2: Some(1.2),
            amenities: vec!["guesthouse".to_string()],
            water_activities: vec!["snorkeling".to_string()],
            transfer_options: vec!["ferry".to_string()],
        },
    )
    .await
    .expect("island creation should succeed")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
