/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Test database setup (connection + migrations)
/// - In-process router construction
/// - Request/response helpers
/// - Unique test-data generation

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use shopcore_api::app::{build_router, AppState};
use shopcore_api::config::Config;
use sqlx::PgPool;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context with a migrated database
    pub async fn new() -> anyhow::Result<Self> {
        // Load test configuration (DATABASE_URL from the environment)
        let config = Config::from_env()?;

        // Connect to database
        let db = PgPool::connect(&config.database.url).await?;

        // Run migrations (path relative to Cargo.toml, not this file)
        sqlx::migrate!("../migrations").run(&db).await?;

        // Build app
        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }
}

/// Returns an email address that is unique across test runs
pub fn unique_email(prefix: &str) -> String {
    format!(
        "{}-{}@example.com",
        prefix,
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    )
}

/// Builds a JSON request
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a bodyless request
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Reads a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Helper to create a user via the API, returning its id
pub async fn create_test_user(ctx: &TestContext, email: &str) -> anyhow::Result<i32> {
    use tower::Service as _;

    let request = json_request(
        "POST",
        "/users",
        serde_json::json!({
            "name": "Test User",
            "email": email,
            "address": "1 Test Lane"
        }),
    );

    let response = ctx.app.clone().call(request).await?;
    anyhow::ensure!(
        response.status() == axum::http::StatusCode::CREATED,
        "user create failed: {}",
        response.status()
    );

    let json = body_json(response).await;
    Ok(json["id"].as_i64().unwrap() as i32)
}

/// Helper to create a product via the API, returning its id
pub async fn create_test_product(ctx: &TestContext, name: &str, price: f64) -> anyhow::Result<i32> {
    use tower::Service as _;

    let request = json_request(
        "POST",
        "/products",
        serde_json::json!({
            "product_name": name,
            "price": price
        }),
    );

    let response = ctx.app.clone().call(request).await?;
    anyhow::ensure!(
        response.status() == axum::http::StatusCode::CREATED,
        "product create failed: {}",
        response.status()
    );

    let json = body_json(response).await;
    Ok(json["id"].as_i64().unwrap() as i32)
}

/// Helper to create an order for a user via the API, returning its id
pub async fn create_test_order(ctx: &TestContext, user_id: i32) -> anyhow::Result<i32> {
    use tower::Service as _;

    let request = json_request("POST", "/orders", serde_json::json!({ "user_id": user_id }));

    let response = ctx.app.clone().call(request).await?;
    anyhow::ensure!(
        response.status() == axum::http::StatusCode::CREATED,
        "order create failed: {}",
        response.status()
    );

    let json = body_json(response).await;
    Ok(json["id"].as_i64().unwrap() as i32)
}

/// Removes test rows; user deletion cascades to orders and links
pub async fn cleanup(ctx: &TestContext, user_ids: &[i32], product_ids: &[i32]) {
    for id in user_ids {
        let _ = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&ctx.db)
            .await;
    }
    for id in product_ids {
        let _ = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&ctx.db)
            .await;
    }
}
