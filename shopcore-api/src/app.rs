/// Application state and router builder
///
/// This module defines the shared application state and provides a function
/// to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use shopcore_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = shopcore_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                                    # Health check
/// ├── /users                                     # POST create, GET list
/// ├── /users/:id                                 # GET, PUT, DELETE
/// ├── /products                                  # POST create, GET list
/// ├── /products/:id                              # GET, PUT, DELETE
/// ├── /orders                                    # POST create
/// ├── /orders/:order_id/add_product/:product_id  # POST link product
/// ├── /orders/:order_id/products                 # GET linked products
/// ├── /orders/user/:user_id                      # GET a user's orders
/// └── /orders/:order_id/remove_product           # DELETE the order
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let user_routes = Router::new()
        .route("/", post(routes::users::create_user))
        .route("/", get(routes::users::list_users))
        .route("/:id", get(routes::users::get_user))
        .route("/:id", put(routes::users::update_user))
        .route("/:id", delete(routes::users::delete_user));

    let product_routes = Router::new()
        .route("/", post(routes::products::create_product))
        .route("/", get(routes::products::list_products))
        .route("/:id", get(routes::products::get_product))
        .route("/:id", put(routes::products::update_product))
        .route("/:id", delete(routes::products::delete_product));

    // "/user/:user_id" and "/:order_id/..." coexist because axum prefers the
    // literal segment over the capture
    let order_routes = Router::new()
        .route("/", post(routes::orders::create_order))
        .route(
            "/:order_id/add_product/:product_id",
            post(routes::orders::add_product_to_order),
        )
        .route("/:order_id/products", get(routes::orders::list_order_products))
        .route("/user/:user_id", get(routes::orders::list_user_orders))
        .route(
            "/:order_id/remove_product",
            delete(routes::orders::delete_order),
        );

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(health_routes)
        .nest("/users", user_routes)
        .nest("/products", product_routes)
        .nest("/orders", order_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
