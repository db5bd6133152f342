//! API route definitions

use axum::{extract::Extension, middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::*;
use assetgraph_observability::routes::monitoring_routes;

/// Create the main API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Page
        .route("/", get(index))

        // Graph routes
        .route("/api/graph", get(get_graph))
        .route("/api/analysis", get(get_analysis))
        .route("/api/view", get(get_view))
        .route("/api/entity", get(get_entity))

        // Health and monitoring routes
        .route("/health", get(health_check))
        .nest("/monitoring", monitoring_routes(state.monitoring.clone()))

        // Apply middleware
        .layer(middleware::from_fn(count_requests))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}
