//! Notification domain models.

use serde::{Deserialize, Serialize};
use sprout_db::notifications::NotificationRow;

/// A notification delivered to one user.
///
/// Notifications are produced outside the listing path (trade events,
/// allowance deposits, parental actions) and are read-only once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub title: Option<String>,
    pub message: String,
    pub read: bool,
    pub created_at: String,
}

impl Notification {
    /// Create a Notification from a database row.
    pub fn from_row(row: NotificationRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            message: row.message,
            read: row.read,
            created_at: row.created_at,
        }
    }
}
