use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::debug;

/// Every failure a request can end in. Rendered as `{"error": <message>}`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Invalid JSON: {0}")]
    MalformedBody(String),
    #[error("Not Found")]
    UnmatchedRoute,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::UnmatchedRoute => StatusCode::NOT_FOUND,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => ApiError::InvalidInput(msg),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.to_string();
        debug!(%status, error = %msg, "request rejected");
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_http_taxonomy() {
        let e: ApiError = ServiceError::Validation("Missing required fields".into()).into();
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
        assert_eq!(e.to_string(), "Missing required fields");

        let e: ApiError = ServiceError::not_found("Book").into();
        assert_eq!(e.status(), StatusCode::NOT_FOUND);
        assert_eq!(e.to_string(), "Book not found");
    }

    #[test]
    fn malformed_body_surfaces_reason() {
        let e = ApiError::MalformedBody("expected value at line 1 column 1".into());
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
        assert!(e.to_string().starts_with("Invalid JSON"));
        assert!(e.to_string().contains("line 1 column 1"));
    }

    #[test]
    fn unmatched_route_is_generic_not_found() {
        assert_eq!(ApiError::UnmatchedRoute.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::UnmatchedRoute.to_string(), "Not Found");
    }
}
