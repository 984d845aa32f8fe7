//! Sprout API Server
//!
//! Axum-based backend for the client application. All handler failures
//! normalize through [`error::ApiError`] into one response envelope.

pub mod auth;
pub mod error;
pub mod routes;
pub mod state;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use sprout_db::DbPool;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/notifications", get(routes::notifications::list_notifications))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ))
        .with_state(state.clone());

    // Producer ingress, not part of the authenticated client API
    let internal_routes = Router::new()
        .route(
            "/internal/notifications",
            post(routes::notifications::create_notification),
        )
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::health::status))
        .nest("/api", api_routes)
        .merge(internal_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Run the API server.
pub async fn run_server(db: Arc<DbPool>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(db);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("API server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
