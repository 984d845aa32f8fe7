//! User account queries — Redis implementation.

use crate::client::{DbError, DbPool, DbResult};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: String,
}

fn user_key(id: &str) -> String {
    format!("sprout:user:{}", id)
}

fn token_key(token: &str) -> String {
    format!("sprout:token:{}", token)
}

pub async fn create_user(
    pool: &DbPool,
    id: &str,
    name: &str,
    role: &str,
) -> DbResult<()> {
    let mut conn = pool.clone();
    let row = UserRow {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        is_active: true,
        created_at: chrono::Utc::now().to_rfc3339(),
    };
    let json = serde_json::to_string(&row)?;
    let key = user_key(id);
    conn.hset::<_, _, _, ()>(&key, "data", &json).await?;
    conn.hset::<_, _, _, ()>(&key, "name", name).await?;
    Ok(())
}

pub async fn get_user(pool: &DbPool, id: &str) -> DbResult<UserRow> {
    let mut conn = pool.clone();
    let json: Option<String> = conn.hget(user_key(id), "data").await?;
    match json {
        Some(j) => Ok(serde_json::from_str(&j)?),
        None => Err(DbError::NotFound(format!("User not found: {}", id))),
    }
}

/// Bind an auth token to a user id. Tokens are minted upstream; the data
/// layer only stores the lookup index.
pub async fn set_token(pool: &DbPool, token: &str, user_id: &str) -> DbResult<()> {
    let mut conn = pool.clone();
    conn.set::<_, _, ()>(token_key(token), user_id).await?;
    Ok(())
}

/// Resolve an auth token to its user id, if the token is known.
pub async fn get_user_id_by_token(pool: &DbPool, token: &str) -> DbResult<Option<String>> {
    let mut conn = pool.clone();
    let user_id: Option<String> = conn.get(token_key(token)).await?;
    Ok(user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_roundtrip() {
        let row = UserRow {
            id: "u1".to_string(),
            name: "Maya".to_string(),
            role: "KID".to_string(),
            is_active: true,
            created_at: "2026-08-01T10:00:00+00:00".to_string(),
        };
        let json = serde_json::to_string(&row).unwrap();
        let back: UserRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "Maya");
        assert!(back.is_active);
    }
}
