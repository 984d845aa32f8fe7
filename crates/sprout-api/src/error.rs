//! Request boundary error normalization.
//!
//! Handlers return `Result<_, ApiError>` and never format failures
//! themselves; `IntoResponse` below is the single point where an
//! in-flight failure becomes a client-visible response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// One field-level violation of a request schema.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// API error type. Two failure kinds reach the client: structured
/// validation failures and everything else.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation Error")]
    Validation(Vec<FieldViolation>),

    #[error("{0}")]
    Internal(String),
}

impl From<sprout_core::SproutError> for ApiError {
    fn from(err: sprout_core::SproutError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "error": "Validation Error",
                    "details": details,
                })),
            )
                .into_response(),
            Self::Internal(message) => {
                // Recorded once for operator visibility; the client only
                // sees the message, never internal detail.
                tracing::error!(error = %message, "request failed");
                let message = if message.is_empty() {
                    "Server Error".to_string()
                } else {
                    message
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": message })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_envelope() {
        let err = ApiError::Validation(vec![
            FieldViolation::new("message", "Message is required"),
            FieldViolation::new("user_id", "User id is required"),
        ]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Validation Error"));
        assert_eq!(body["details"].as_array().unwrap().len(), 2);
        assert_eq!(body["details"][0]["field"], json!("message"));
        assert_eq!(body["details"][0]["message"], json!("Message is required"));
    }

    #[tokio::test]
    async fn test_generic_envelope_passes_the_message_through() {
        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "success": false, "error": "boom" }));
    }

    #[tokio::test]
    async fn test_generic_envelope_falls_back_when_message_is_empty() {
        let response = ApiError::Internal(String::new()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "success": false, "error": "Server Error" }));
    }

    #[tokio::test]
    async fn test_domain_errors_normalize_to_the_generic_kind() {
        let err: ApiError = sprout_core::SproutError::UserNotFound("u1".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("User not found: u1"));
    }
}
