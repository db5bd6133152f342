//! API data models

use assetgraph_view::{Category, Edge, Node, OrganizationReport, Property, Severity};
use axum::{http::StatusCode, response::Json as JsonResponse};
use serde::{Deserialize, Serialize};

/// API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub timestamp: i64,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// Rejection shape shared by every fallible handler
pub type ErrorResponse = (StatusCode, JsonResponse<ApiResponse<String>>);

/// `?severity=` on the page and the view endpoints
#[derive(Debug, Default, Deserialize)]
pub struct SeverityQuery {
    pub severity: Option<String>,
}

/// `?uri=` on the entity endpoint
#[derive(Debug, Deserialize)]
pub struct EntityQuery {
    pub uri: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Everything the page needs in one payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ViewResponse {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub analysis: Vec<OrganizationReport>,
    /// The level the response was filtered on, if any
    pub severity: Option<Severity>,
}

/// Side-panel details for a single entity
#[derive(Debug, Serialize, Deserialize)]
pub struct EntityResponse {
    pub id: String,
    pub label: String,
    pub category: Category,
    pub group: u8,
    pub color: String,
    /// Present for vulnerabilities only
    pub severity: Option<Severity>,
    pub properties: Vec<Property>,
}

/// Error types for API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid severity: {0}")]
    InvalidSeverity(String),

    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidSeverity(_) => StatusCode::BAD_REQUEST,
            ApiError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        (err.status_code(), JsonResponse(ApiResponse::error(err.to_string())))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_mapping() {
        let (status, JsonResponse(body)) = ErrorResponse::from(ApiError::EntityNotFound("urn:x".to_string()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Entity not found: urn:x"));

        let (status, _) = ErrorResponse::from(ApiError::InvalidSeverity("Urgent".to_string()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_success_envelope() {
        let response = ApiResponse::success(3);
        assert!(response.success);
        assert_eq!(response.data, Some(3));
        assert!(response.error.is_none());
    }
}
