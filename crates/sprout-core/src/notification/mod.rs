//! Notification operations.

pub mod model;

use crate::error::{SproutError, SproutResult};
use model::Notification;
use sprout_db::queries::notifications as queries;
use sprout_db::{DbError, DbPool};
use uuid::Uuid;

/// Create a notification for a user.
pub async fn create_notification(
    pool: &DbPool,
    user_id: &str,
    title: Option<&str>,
    message: &str,
) -> SproutResult<Notification> {
    let id = Uuid::new_v4().to_string();

    queries::create_notification(pool, &id, user_id, title, message).await?;

    let notification = get_notification(pool, user_id, &id).await?;
    tracing::debug!(user_id = %user_id, notification_id = %id, "Notification created");
    Ok(notification)
}

/// Get one notification by owner and id.
pub async fn get_notification(
    pool: &DbPool,
    user_id: &str,
    id: &str,
) -> SproutResult<Notification> {
    match queries::get_notification(pool, user_id, id).await {
        Ok(row) => Ok(Notification::from_row(row)),
        Err(DbError::NotFound(_)) => Err(SproutError::NotificationNotFound(id.to_string())),
        Err(e) => Err(e.into()),
    }
}

/// List a user's notifications, most recent first.
///
/// The listing is restricted to the given user's own records; ordering
/// comes from the creation-time index in the data layer.
pub async fn list_for_user(pool: &DbPool, user_id: &str) -> SproutResult<Vec<Notification>> {
    let rows = queries::list_notifications(pool, user_id).await?;
    Ok(rows.into_iter().map(Notification::from_row).collect())
}
