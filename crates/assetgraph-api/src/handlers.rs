//! API request handlers

use axum::{
    extract::{Extension, Query, Request},
    middleware::Next,
    response::{Html, Json as JsonResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::config::ServerConfig;
use crate::models::*;
use crate::page::render_page;
use assetgraph_core::{GraphRead, GraphStore};
use assetgraph_observability::{HealthMonitor, RequestCounter};
use assetgraph_view::{
    analyze, category_of, label_of, node_color, project, properties_of, severity_of, Category, GraphProjection,
    OrganizationReport, SeverityFilter,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<GraphStore>,
    pub config: Arc<ServerConfig>,
    pub monitoring: Arc<dyn HealthMonitor>,
    pub requests: Arc<RequestCounter>,
    pub start_time: Instant,
}

impl AppState {
    fn severity_filter(&self, query: &SeverityQuery) -> Result<SeverityFilter, ErrorResponse> {
        Ok(self.config.invalid_severity.resolve(query.severity.as_deref())?)
    }

    fn projection(&self, filter: SeverityFilter) -> GraphProjection {
        project(self.graph.as_ref(), filter, &self.config.view)
    }

    fn analysis(&self, filter: SeverityFilter) -> Vec<OrganizationReport> {
        analyze(self.graph.as_ref(), filter)
    }
}

/// Counts every request for the metrics endpoint
pub async fn count_requests(Extension(state): Extension<Arc<AppState>>, request: Request, next: Next) -> Response {
    state.requests.increment();
    next.run(request).await
}

/// Interactive graph page
pub async fn index(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<SeverityQuery>,
) -> Result<Html<String>, ErrorResponse> {
    let filter = state.severity_filter(&query)?;
    let projection = state.projection(filter);
    let analysis = state.analysis(filter);

    let page = render_page(&projection, &analysis, filter).map_err(ApiError::from)?;
    Ok(Html(page))
}

/// Projected nodes and edges
pub async fn get_graph(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<SeverityQuery>,
) -> Result<JsonResponse<ApiResponse<GraphProjection>>, ErrorResponse> {
    let filter = state.severity_filter(&query)?;
    Ok(JsonResponse(ApiResponse::success(state.projection(filter))))
}

/// Organization → application → vulnerability roll-up
pub async fn get_analysis(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<SeverityQuery>,
) -> Result<JsonResponse<ApiResponse<Vec<OrganizationReport>>>, ErrorResponse> {
    let filter = state.severity_filter(&query)?;
    Ok(JsonResponse(ApiResponse::success(state.analysis(filter))))
}

/// Projection and roll-up computed under the same filter
pub async fn get_view(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<SeverityQuery>,
) -> Result<JsonResponse<ApiResponse<ViewResponse>>, ErrorResponse> {
    let filter = state.severity_filter(&query)?;
    let GraphProjection { nodes, edges } = state.projection(filter);
    let analysis = state.analysis(filter);

    debug!("View with {} nodes, {} edges, {} organizations", nodes.len(), edges.len(), analysis.len());

    Ok(JsonResponse(ApiResponse::success(ViewResponse {
        nodes,
        edges,
        analysis,
        severity: filter.severity(),
    })))
}

/// Details for one entity, whether or not it is drawn
pub async fn get_entity(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<EntityQuery>,
) -> Result<JsonResponse<ApiResponse<EntityResponse>>, ErrorResponse> {
    let graph = state.graph.as_ref();
    let uri = query.uri.as_str();
    if !graph.mentions(uri) {
        return Err(ApiError::EntityNotFound(query.uri).into());
    }

    let category = category_of(graph, uri);
    let severity = match category {
        Category::Vulnerability => Some(severity_of(graph, uri)),
        _ => None,
    };

    Ok(JsonResponse(ApiResponse::success(EntityResponse {
        id: uri.to_string(),
        label: label_of(graph, uri),
        category,
        group: category.group(),
        color: node_color(graph, uri).to_string(),
        severity,
        properties: properties_of(graph, uri, state.config.view.property_mode),
    })))
}

/// Health check handler
pub async fn health_check(Extension(state): Extension<Arc<AppState>>) -> JsonResponse<ApiResponse<HealthResponse>> {
    let uptime = state.start_time.elapsed();

    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime.as_secs(),
    };

    JsonResponse(ApiResponse::success(response))
}
