//! Centralized error types for Sprout.

use thiserror::Error;

/// Main error type for Sprout domain operations.
#[derive(Error, Debug)]
pub enum SproutError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Notification not found: {0}")]
    NotificationNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sprout_db::DbError),
}

/// Result type for Sprout domain operations.
pub type SproutResult<T> = Result<T, SproutError>;
