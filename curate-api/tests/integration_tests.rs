//! Integration tests for the curate API endpoints
//!
//! These drive the full router, auth middleware included, over an
//! in-memory SQLite database.

use axum::http::StatusCode;
use axum_test::TestServer;
use curate_api::{create_router, AppState, AuthClaims, JwtConfig};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;

const TEST_SECRET: &str = "test-secret-for-integration-tests-only";

/// Create test app state with in-memory database
async fn create_test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    AppState::new(pool, JwtConfig::for_testing(TEST_SECRET))
        .await
        .unwrap()
}

/// Create test server
async fn create_test_server() -> (TestServer, AppState) {
    let state = create_test_state().await;
    let router = create_router(state.clone());
    (TestServer::new(router).unwrap(), state)
}

/// Seed one identity directly; the API never creates users
async fn seed_user(state: &AppState, username: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (username, email, created_at) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(username)
    .bind(format!("{}@example.com", username))
    .bind(chrono::Utc::now())
    .fetch_one(state.database.pool())
    .await
    .unwrap()
}

/// Mint a bearer token for the given user id
fn token_for(user_id: i64) -> String {
    let claims = AuthClaims {
        sub: user_id.to_string(),
        exp: (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp() as u64,
        iat: chrono::Utc::now().timestamp() as u64,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

async fn create_list(
    server: &TestServer,
    token: &str,
    name: &str,
    is_public: bool,
    contributors: Vec<i64>,
) -> serde_json::Value {
    let response = server
        .post("/lists")
        .authorization_bearer(token)
        .json(&json!({
            "name": name,
            "is_public": is_public,
            "contributors": contributors,
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json()
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn test_health_check() {
    let (server, _) = create_test_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_ready_check() {
    let (server, _) = create_test_server().await;

    let response = server.get("/ready").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
}

// ============ Auth Tests ============

#[tokio::test]
async fn test_lists_require_auth() {
    let (server, _) = create_test_server().await;

    let response = server.get("/lists").await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = server.post("/lists").json(&json!({"name": "x"})).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_bearer_rejected() {
    let (server, _) = create_test_server().await;

    let response = server
        .get("/lists")
        .authorization_bearer("not-a-token")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

// ============ List Endpoint Tests ============

#[tokio::test]
async fn test_create_and_get_list() {
    let (server, state) = create_test_server().await;
    let owner = seed_user(&state, "owner").await;
    let token = token_for(owner);

    let created = create_list(&server, &token, "groceries", false, vec![]).await;
    assert_eq!(created["name"], "groceries");
    assert_eq!(created["owner_id"], owner);
    assert_eq!(created["is_public"], false);

    let response = server
        .get(&format!("/lists/{}", created["id"]))
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_private_list_not_found_for_other_user() {
    let (server, state) = create_test_server().await;
    let owner = seed_user(&state, "owner").await;
    let other = seed_user(&state, "other").await;

    let created = create_list(&server, &token_for(owner), "secret", false, vec![]).await;

    let response = server
        .get(&format!("/lists/{}", created["id"]))
        .authorization_bearer(&token_for(other))
        .await;

    // Not-owned is indistinguishable from non-existent
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_public_list_visible_to_other_user() {
    let (server, state) = create_test_server().await;
    let owner = seed_user(&state, "owner").await;
    let other = seed_user(&state, "other").await;

    let created = create_list(&server, &token_for(owner), "movies", true, vec![]).await;

    let response = server
        .get(&format!("/lists/{}", created["id"]))
        .authorization_bearer(&token_for(other))
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_get_list_not_found() {
    let (server, state) = create_test_server().await;
    let owner = seed_user(&state, "owner").await;

    let response = server
        .get("/lists/9999")
        .authorization_bearer(&token_for(owner))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_create_tolerates_invalid_contributor_seeds() {
    let (server, state) = create_test_server().await;
    let owner = seed_user(&state, "owner").await;
    let friend = seed_user(&state, "friend").await;
    let token = token_for(owner);

    // 9999 does not exist; creation still succeeds
    let created = create_list(&server, &token, "shared", true, vec![friend, 9999]).await;

    let response = server
        .get(&format!("/lists/{}/contributors", created["id"]))
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["contributor_id"], friend);
}

#[tokio::test]
async fn test_update_list_owner_only() {
    let (server, state) = create_test_server().await;
    let owner = seed_user(&state, "owner").await;
    let other = seed_user(&state, "other").await;

    let created = create_list(&server, &token_for(owner), "movies", true, vec![]).await;
    let path = format!("/lists/{}", created["id"]);

    // Public and existing, but not owned: still not found
    let response = server
        .patch(&path)
        .authorization_bearer(&token_for(other))
        .json(&json!({"name": "hijacked"}))
        .await;
    response.assert_status_not_found();

    // Owner gets the refreshed record back
    let response = server
        .patch(&path)
        .authorization_bearer(&token_for(owner))
        .json(&json!({"name": "films", "is_public": false}))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "films");
    assert_eq!(body["is_public"], false);
}

#[tokio::test]
async fn test_delete_list_cascades() {
    let (server, state) = create_test_server().await;
    let owner = seed_user(&state, "owner").await;
    let friend = seed_user(&state, "friend").await;
    let token = token_for(owner);

    let created = create_list(&server, &token, "doomed", false, vec![friend]).await;
    let path = format!("/lists/{}", created["id"]);

    let response = server.delete(&path).authorization_bearer(&token).await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server.get(&path).authorization_bearer(&token).await;
    response.assert_status_not_found();

    // The relationship page is gone with the list
    let response = server
        .get(&format!("{}/contributors", path))
        .authorization_bearer(&token)
        .await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_list_pagination() {
    let (server, state) = create_test_server().await;
    let owner = seed_user(&state, "owner").await;
    let token = token_for(owner);

    for i in 0..15 {
        create_list(&server, &token, &format!("list-{:02}", i), false, vec![]).await;
    }

    let response = server
        .get("/lists?page=2&limit=10")
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
    assert_eq!(body["total"], 15);
    assert_eq!(body["page"], 2);
    assert_eq!(body["total_pages"], 2);
}

#[tokio::test]
async fn test_list_pagination_rejects_bad_bounds() {
    let (server, state) = create_test_server().await;
    let owner = seed_user(&state, "owner").await;
    let token = token_for(owner);

    let response = server
        .get("/lists?page=0")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .get("/lists?limit=500")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

// ============ Contributor Endpoint Tests ============

#[tokio::test]
async fn test_contributor_search() {
    let (server, state) = create_test_server().await;
    let caller = seed_user(&state, "caller").await;
    seed_user(&state, "alice").await;
    seed_user(&state, "alicia").await;
    seed_user(&state, "bob").await;

    let response = server
        .get("/lists/contributors?q=alic")
        .authorization_bearer(&token_for(caller))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_bulk_add_all_or_nothing() {
    let (server, state) = create_test_server().await;
    let owner = seed_user(&state, "owner").await;
    let friend = seed_user(&state, "friend").await;
    let token = token_for(owner);

    let created = create_list(&server, &token, "team", false, vec![]).await;
    let path = format!("/lists/{}/contributors", created["id"]);

    // One bad id fails the whole request
    let response = server
        .post(&path)
        .authorization_bearer(&token)
        .json(&json!({"contributors": [friend, 9999]}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // No partial-success payload was returned, but the valid sibling write
    // stays committed
    let response = server.get(&path).authorization_bearer(&token).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_bulk_add_success() {
    let (server, state) = create_test_server().await;
    let owner = seed_user(&state, "owner").await;
    let a = seed_user(&state, "a").await;
    let b = seed_user(&state, "b").await;
    let token = token_for(owner);

    let created = create_list(&server, &token, "team", false, vec![]).await;

    let response = server
        .post(&format!("/lists/{}/contributors", created["id"]))
        .authorization_bearer(&token)
        .json(&json!({"contributors": [a, b]}))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_bulk_add_requires_ownership() {
    let (server, state) = create_test_server().await;
    let owner = seed_user(&state, "owner").await;
    let other = seed_user(&state, "other").await;

    let created = create_list(&server, &token_for(owner), "public", true, vec![]).await;

    let response = server
        .post(&format!("/lists/{}/contributors", created["id"]))
        .authorization_bearer(&token_for(other))
        .json(&json!({"contributors": [other]}))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_remove_contributor_relationship() {
    let (server, state) = create_test_server().await;
    let owner = seed_user(&state, "owner").await;
    let friend = seed_user(&state, "friend").await;
    let token = token_for(owner);

    let created = create_list(&server, &token, "team", false, vec![friend]).await;
    let contributors_path = format!("/lists/{}/contributors", created["id"]);

    let response = server
        .get(&contributors_path)
        .authorization_bearer(&token)
        .await;
    let body: serde_json::Value = response.json();
    let relationship_id = body["items"][0]["id"].as_i64().unwrap();

    let path = format!("{}/{}", contributors_path, relationship_id);
    let response = server.delete(&path).authorization_bearer(&token).await;
    response.assert_status(StatusCode::NO_CONTENT);

    // Gone now
    let response = server.delete(&path).authorization_bearer(&token).await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_list_contributors_needs_visibility() {
    let (server, state) = create_test_server().await;
    let owner = seed_user(&state, "owner").await;
    let other = seed_user(&state, "other").await;

    let created = create_list(&server, &token_for(owner), "private", false, vec![]).await;

    let response = server
        .get(&format!("/lists/{}/contributors", created["id"]))
        .authorization_bearer(&token_for(other))
        .await;

    response.assert_status_not_found();
}
