//! HTTP-level integration tests for the public island catalog.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, seed_island};
use sqlx::PgPool;

/// Islands can be created through the public endpoint.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_island_publicly(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Thoddoo",
        "atoll": "Alif Alif",
        "latitude": 4.4372,
        "longitude": 72.9578,
        "type": "inhabited",
        "population": 1500,
        "tags": ["fruit farms"]
    });
    let response = post_json(app, "/api/islands", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Thoddoo");
    assert_eq!(json["type"], "inhabited");
    assert!(json["id"].is_string());
}

/// Listing returns all islands ordered by name.
#[sqlx::test(migrations = "../db/migrations")]
async fn list_islands_ordered_by_name(pool: PgPool) {
    seed_island(&pool, "Veligandu", "resort").await;
    seed_island(&pool, "Dhiffushi", "inhabited").await;
    seed_island(&pool, "Maafushi", "inhabited").await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/islands").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Dhiffushi", "Maafushi", "Veligandu"]);
}

/// skip/limit paginate the listing.
#[sqlx::test(migrations = "../db/migrations")]
async fn list_islands_paginated(pool: PgPool) {
    seed_island(&pool, "Alpha", "inhabited").await;
    seed_island(&pool, "Bravo", "inhabited").await;
    seed_island(&pool, "Charlie", "inhabited").await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/islands?skip=1&limit=1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let islands = json.as_array().unwrap();
    assert_eq!(islands.len(), 1);
    assert_eq!(islands[0]["name"], "Bravo");
}

/// Fetching an island by id returns the full record with the `type` key.
#[sqlx::test(migrations = "../db/migrations")]
async fn get_island_by_id(pool: PgPool) {
    let island = seed_island(&pool, "Baros", "resort").await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/islands/{}", island.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], island.id.to_string());
    assert_eq!(json["name"], "Baros");
    assert_eq!(json["type"], "resort");
    assert_eq!(json["atoll"], "Kaafu Atoll");
}

/// Unknown island ids return 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn get_unknown_island_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(
        app,
        "/api/islands/00000000-0000-0000-0000-000000000000",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
