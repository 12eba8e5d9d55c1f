pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod greeting;
pub mod models;
pub mod routes;
pub mod stats;

pub const STATIC_HASH: &str = env!("STATIC_HASH");

use axum::http::{HeaderValue, header};
use axum::{Router, routing::get};
use sqlx::SqlitePool;
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::Config;
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Build the full Axum application router.
///
/// Caller is responsible for running database migrations on `pool`
/// beforehand. This function assembles all route modules, middleware, and
/// state. The greeting catch-all sits below the fixed `/health`, `/admin`,
/// and `/static` surfaces in match priority.
pub fn build_app(pool: SqlitePool, config: Config) -> Router {
    let state = AppState { db: pool, config };

    Router::new()
        .route("/health", get(health))
        .merge(routes::admin::router())
        .merge(routes::greeting::router())
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=86400"),
                ))
                .service(ServeDir::new("static")),
        )
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
