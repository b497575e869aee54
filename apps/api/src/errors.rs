use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::news::feed::FeedError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Wire contract: every error body is a JSON object with an `error` string;
/// `UnknownRole` additionally carries `availableRoles` as a recovery hint.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Role not found in predefined list")]
    UnknownRole { available_roles: Vec<String> },

    #[error("Feed unavailable: {0}")]
    FeedUnavailable(#[from] FeedError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MissingParameter(msg) => {
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
            AppError::UnknownRole { available_roles } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "Role not found in predefined list",
                    "availableRoles": available_roles,
                }),
            ),
            AppError::FeedUnavailable(e) => {
                tracing::error!("Feed error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to fetch news" }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_maps_to_400() {
        let response =
            AppError::MissingParameter("targetRole is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unknown_role_maps_to_404() {
        let response = AppError::UnknownRole {
            available_roles: vec!["Backend Developer".to_string()],
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = AppError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
