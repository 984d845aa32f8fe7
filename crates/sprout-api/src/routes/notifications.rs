//! Notification route handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::error::{ApiError, FieldViolation};
use crate::state::AppState;
use sprout_core::notification::model::Notification;

const MESSAGE_MAX: usize = 500;
const TITLE_MAX: usize = 100;

/// List the caller's notifications, most recent first.
pub async fn list_notifications(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let notifications = sprout_core::notification::list_for_user(&state.db, &user.id).await?;
    Ok(Json(notifications))
}

#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    pub user_id: String,
    pub title: Option<String>,
    pub message: String,
}

fn validate(req: &CreateNotificationRequest) -> Result<(), ApiError> {
    let mut violations = Vec::new();

    if req.user_id.trim().is_empty() {
        violations.push(FieldViolation::new("user_id", "User id is required"));
    }
    if req.message.trim().is_empty() {
        violations.push(FieldViolation::new("message", "Message is required"));
    } else if req.message.chars().count() > MESSAGE_MAX {
        violations.push(FieldViolation::new(
            "message",
            format!("Message cannot be more than {} characters", MESSAGE_MAX),
        ));
    }
    if let Some(title) = &req.title {
        if title.chars().count() > TITLE_MAX {
            violations.push(FieldViolation::new(
                "title",
                format!("Title cannot be more than {} characters", TITLE_MAX),
            ));
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(violations))
    }
}

/// Producer ingress: store a notification for a user.
pub async fn create_notification(
    State(state): State<AppState>,
    Json(req): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<Notification>), ApiError> {
    validate(&req)?;

    let notification = sprout_core::notification::create_notification(
        &state.db,
        &req.user_id,
        req.title.as_deref(),
        &req.message,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(notification)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateNotificationRequest {
        CreateNotificationRequest {
            user_id: "u1".to_string(),
            title: Some("Allowance".to_string()),
            message: "Your weekly allowance arrived".to_string(),
        }
    }

    #[test]
    fn test_valid_body_passes() {
        assert!(validate(&valid_request()).is_ok());
    }

    #[test]
    fn test_missing_fields_are_reported_per_field() {
        let req = CreateNotificationRequest {
            user_id: "  ".to_string(),
            title: None,
            message: String::new(),
        };
        let Err(ApiError::Validation(details)) = validate(&req) else {
            panic!("expected a validation error");
        };
        let fields: Vec<&str> = details.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["user_id", "message"]);
    }

    #[test]
    fn test_overlong_message_is_rejected() {
        let mut req = valid_request();
        req.message = "x".repeat(MESSAGE_MAX + 1);
        let Err(ApiError::Validation(details)) = validate(&req) else {
            panic!("expected a validation error");
        };
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].field, "message");
    }

    #[test]
    fn test_overlong_title_is_rejected() {
        let mut req = valid_request();
        req.title = Some("t".repeat(TITLE_MAX + 1));
        let Err(ApiError::Validation(details)) = validate(&req) else {
            panic!("expected a validation error");
        };
        assert_eq!(details[0].field, "title");
    }
}
