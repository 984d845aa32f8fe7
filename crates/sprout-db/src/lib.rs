//! Sprout Data Layer
//!
//! Async Redis-based persistence for notifications and user accounts.

pub mod client;
pub mod queries;

pub use client::{init_pool, DbError, DbPool, DbResult};
pub use queries::notifications;
pub use queries::users;

/// Initialize a pool reading `SPROUT_REDIS_URL` from the environment
/// (or the local default).
pub async fn init_pool_from_env() -> DbResult<DbPool> {
    let url = std::env::var("SPROUT_REDIS_URL")
        .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
    client::init_pool(&url).await
}
