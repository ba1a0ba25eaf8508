//! HTTP-level integration tests for registration, login, and the current-user
//! endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_form, post_json, seed_user};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Successful registration returns 201 with the safe user representation.
#[sqlx::test(migrations = "../db/migrations")]
async fn register_returns_created_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "newuser@example.com",
        "name": "New User",
        "password": "pw1"
    });
    let response = post_json(app, "/api/users", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["email"], "newuser@example.com");
    assert_eq!(json["name"], "New User");
    assert_eq!(json["is_admin"], false);
    assert!(json["id"].is_string());
    // No credential material may ever appear in a response.
    assert!(json.get("password").is_none());
    assert!(json.get("password_hash").is_none());
    assert!(json.get("hashed_password").is_none());
}

/// Registering an already-taken email fails with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn register_duplicate_email_rejected(pool: PgPool) {
    seed_user(&pool, "taken@example.com", false).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "taken@example.com",
        "password": "pw1"
    });
    let response = post_json(app, "/api/users", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Email already registered");
}

/// A malformed email fails validation with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn register_invalid_email_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "not-an-email",
        "password": "pw1"
    });
    let response = post_json(app, "/api/users", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// A registered user can log in with the password they registered with and
/// receives a bearer token.
#[sqlx::test(migrations = "../db/migrations")]
async fn register_then_login_roundtrip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "email": "roundtrip@example.com",
        "password": "pw1"
    });
    let response = post_json(app, "/api/users", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_form(
        app,
        "/api/token",
        "username=roundtrip%40example.com&password=pw1",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["token_type"], "bearer");
}

/// The wrong password is rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_wrong_password_rejected(pool: PgPool) {
    seed_user(&pool, "user@example.com", false).await;
    let app = common::build_test_app(pool);

    let response = post_form(
        app,
        "/api/token",
        "username=user%40example.com&password=wrong",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Wrong-password and unknown-email failures are indistinguishable.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_failures_are_indistinguishable(pool: PgPool) {
    seed_user(&pool, "user@example.com", false).await;

    let app = common::build_test_app(pool.clone());
    let wrong_pw = post_form(
        app,
        "/api/token",
        "username=user%40example.com&password=wrong",
    )
    .await;
    assert_eq!(wrong_pw.status(), StatusCode::UNAUTHORIZED);
    let wrong_pw_body = body_json(wrong_pw).await;

    let app = common::build_test_app(pool);
    let unknown = post_form(
        app,
        "/api/token",
        "username=ghost%40example.com&password=wrong",
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    let unknown_body = body_json(unknown).await;

    assert_eq!(wrong_pw_body, unknown_body);
    assert_eq!(wrong_pw_body["error"], "Incorrect email or password");
}

// ---------------------------------------------------------------------------
// Current user
// ---------------------------------------------------------------------------

/// GET /users/me returns the caller's profile without credential material.
#[sqlx::test(migrations = "../db/migrations")]
async fn me_returns_current_user(pool: PgPool) {
    let (user, _password) = seed_user(&pool, "me@example.com", false).await;
    let app = common::build_test_app(pool);

    let token = common::test_token("me@example.com");
    let response = get_auth(app, "/api/users/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], user.id.to_string());
    assert_eq!(json["email"], "me@example.com");
    assert!(json.get("password_hash").is_none());
}

/// GET /users/me without a token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn me_without_token_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/users/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A syntactically valid token signed with the wrong secret is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn me_with_garbage_token_rejected(pool: PgPool) {
    seed_user(&pool, "me@example.com", false).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/users/me", "not.a.token").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A valid token whose subject no longer exists is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn me_with_vanished_user_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let token = common::test_token("vanished@example.com");
    let response = get_auth(app, "/api/users/me", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
