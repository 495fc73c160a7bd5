use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

use super::views::{self, ViewContext};
use crate::services::DirectoryError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    DatabaseError(String),

    ValidationError(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    "The page you are looking for does not exist.".to_string(),
                )
            }
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        error_page(status, &message)
    }
}

/// Renders the view for `status`, falling back to plain text if the
/// template itself fails.
fn error_page(status: StatusCode, message: &str) -> Response {
    let template = match status {
        StatusCode::NOT_FOUND => "404.html",
        StatusCode::INTERNAL_SERVER_ERROR => "500.html",
        _ => "error.html",
    };

    let mut ctx = ViewContext::new();
    ctx.insert("status", &status.as_u16());
    ctx.insert("message", message);

    match views::render(template, &ctx) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render error page: {:#}", e);
            (status, message.to_string()).into_response()
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::NotFound(msg) => ApiError::NotFound(msg),
            DirectoryError::Validation(msg) => ApiError::ValidationError(msg),
            DirectoryError::Database(msg) => ApiError::DatabaseError(msg),
            DirectoryError::Internal(msg) => ApiError::InternalError(msg),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(format!("{err:#}"))
    }
}

impl ApiError {
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        ApiError::NotFound(format!("{} {} not found", resource, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_renders_404_view() {
        let response = ApiError::not_found("Profile", "acme").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_database_error_hides_details() {
        let response = ApiError::from(DirectoryError::Database("disk I/O error".to_string()))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_text(response).await;
        assert!(body.contains("Something went wrong"));
        assert!(!body.contains("disk I/O error"));
    }

    #[tokio::test]
    async fn test_validation_error_uses_generic_view() {
        let response =
            ApiError::ValidationError("Company name cannot be empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("Company name cannot be empty"));
    }
}
