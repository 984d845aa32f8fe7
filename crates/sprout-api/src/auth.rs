//! Bearer-token auth middleware.
//!
//! Session issuance lives upstream; this layer only resolves a presented
//! token to a stored user and places the identity in request context.
//! Rejections here short-circuit before the error envelope, matching the
//! dedicated auth status codes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;
use sprout_core::user::model::Role;

/// Authenticated identity, inserted into request extensions by
/// [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub role: Role,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().cloned().ok_or_else(|| {
            ApiError::Internal("user identity missing from request context".to_string())
        })
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Unauthorized" })),
    )
        .into_response()
}

/// Resolve the bearer token and attach the user identity to the request.
pub async fn require_auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string);

    let Some(token) = token else {
        return unauthorized();
    };

    match sprout_core::user::get_by_token(&state.db, &token).await {
        Ok(Some(user)) if user.is_active => {
            req.extensions_mut().insert(AuthUser {
                id: user.id,
                role: user.role,
            });
            next.run(req).await
        }
        Ok(Some(_)) => (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "User not found or inactive" })),
        )
            .into_response(),
        Ok(None) => unauthorized(),
        Err(e) => {
            tracing::error!(error = %e, "auth lookup failed");
            unauthorized()
        }
    }
}
