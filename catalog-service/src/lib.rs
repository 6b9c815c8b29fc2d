//! Read-only book catalog service.
//!
//! Raw scraped rows are normalized into typed [`models::book::Book`] records
//! once at startup and collected into an immutable [`models::catalog::Catalog`].
//! Every route except health sits behind the shared-secret gate in
//! [`middleware::require_api_key`].

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use routes::{
    books::{get_book, list_books, list_categories, top_rated},
    health::health_check,
    stats::{stats_by_category, stats_overview},
};
use state::AppState;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub fn app(state: AppState, request_timeout: Duration) -> Router {
    let protected = Router::new()
        .route("/api/v1/books", get(list_books))
        .route("/api/v1/books/search", get(list_books))
        .route("/api/v1/books/top-rated", get(top_rated))
        .route("/api/v1/books/:id", get(get_book))
        .route("/api/v1/categories", get(list_categories))
        .route("/api/v1/stats/overview", get(stats_overview))
        .route("/api/v1/stats/categories", get(stats_by_category))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::require_api_key,
        ));

    Router::new()
        .route("/api/v1/health", get(health_check))
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}
