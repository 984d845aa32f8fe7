//! Notification queries — Redis implementation.
//!
//! Each notification is a hash keyed by owner and id; a per-user sorted
//! set scored by creation time provides the newest-first listing order.

use crate::client::{DbError, DbPool, DbResult};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRow {
    pub id: String,
    pub user_id: String,
    pub title: Option<String>,
    pub message: String,
    pub read: bool,
    pub created_at: String,
}

fn entity_key(user_id: &str, id: &str) -> String {
    format!("sprout:user:{}:notification:{}", user_id, id)
}

fn index_key(user_id: &str) -> String {
    format!("sprout:user:{}:notifications", user_id)
}

pub async fn create_notification(
    pool: &DbPool,
    id: &str,
    user_id: &str,
    title: Option<&str>,
    message: &str,
) -> DbResult<()> {
    let now = chrono::Utc::now();
    let row = NotificationRow {
        id: id.to_string(),
        user_id: user_id.to_string(),
        title: title.map(str::to_string),
        message: message.to_string(),
        read: false,
        created_at: now.to_rfc3339(),
    };
    save_notification(pool, &row, now.timestamp_millis()).await
}

async fn save_notification(pool: &DbPool, row: &NotificationRow, score: i64) -> DbResult<()> {
    let mut conn = pool.clone();
    let key = entity_key(&row.user_id, &row.id);
    let json = serde_json::to_string(row)?;
    conn.hset::<_, _, _, ()>(&key, "data", &json).await?;

    // Sorted set scored by creation time; listing reads it reversed
    let zkey = index_key(&row.user_id);
    conn.zadd::<_, _, _, ()>(&zkey, &row.id, score).await?;

    Ok(())
}

pub async fn get_notification(
    pool: &DbPool,
    user_id: &str,
    id: &str,
) -> DbResult<NotificationRow> {
    let mut conn = pool.clone();
    let key = entity_key(user_id, id);
    let json: Option<String> = conn.hget(&key, "data").await?;
    match json {
        Some(j) => Ok(serde_json::from_str(&j)?),
        None => Err(DbError::NotFound(format!("Notification not found: {}", id))),
    }
}

/// List a user's notifications, most recent first.
pub async fn list_notifications(pool: &DbPool, user_id: &str) -> DbResult<Vec<NotificationRow>> {
    let mut conn = pool.clone();
    let zkey = index_key(user_id);
    let ids: Vec<String> = conn.zrevrange(&zkey, 0, -1).await?;
    let mut rows = Vec::new();
    for id in ids {
        let key = entity_key(user_id, &id);
        let mut c = pool.clone();
        let json: Option<String> = c.hget(&key, "data").await?;
        if let Some(j) = json {
            if let Ok(row) = serde_json::from_str::<NotificationRow>(&j) {
                rows.push(row);
            }
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_roundtrip() {
        let row = NotificationRow {
            id: "n1".to_string(),
            user_id: "u1".to_string(),
            title: Some("Allowance".to_string()),
            message: "Your weekly allowance arrived".to_string(),
            read: false,
            created_at: "2026-08-01T10:00:00+00:00".to_string(),
        };
        let json = serde_json::to_string(&row).unwrap();
        let back: NotificationRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "n1");
        assert_eq!(back.user_id, "u1");
        assert_eq!(back.title.as_deref(), Some("Allowance"));
        assert!(!back.read);
    }

    #[test]
    fn test_keys_are_scoped_to_owner() {
        assert_eq!(
            entity_key("u1", "n1"),
            "sprout:user:u1:notification:n1"
        );
        assert_eq!(index_key("u1"), "sprout:user:u1:notifications");
        assert_ne!(index_key("u1"), index_key("u2"));
    }
}
