//! User operations.

pub mod model;

use crate::error::{SproutError, SproutResult};
use model::{Role, User};
use sprout_db::queries::users as queries;
use sprout_db::{DbError, DbPool};
use uuid::Uuid;

/// Create a user with a bound auth token.
pub async fn create_user(
    pool: &DbPool,
    name: &str,
    role: Role,
    token: &str,
) -> SproutResult<User> {
    let id = Uuid::new_v4().to_string();

    queries::create_user(pool, &id, name, role.as_str()).await?;
    queries::set_token(pool, token, &id).await?;

    let row = queries::get_user(pool, &id).await?;
    Ok(User::from_row(row))
}

/// Get a user by id.
pub async fn get_user(pool: &DbPool, id: &str) -> SproutResult<User> {
    match queries::get_user(pool, id).await {
        Ok(row) => Ok(User::from_row(row)),
        Err(DbError::NotFound(_)) => Err(SproutError::UserNotFound(id.to_string())),
        Err(e) => Err(e.into()),
    }
}

/// Resolve an auth token to its user, if the token is known.
pub async fn get_by_token(pool: &DbPool, token: &str) -> SproutResult<Option<User>> {
    let Some(user_id) = queries::get_user_id_by_token(pool, token).await? else {
        return Ok(None);
    };
    match get_user(pool, &user_id).await {
        Ok(user) => Ok(Some(user)),
        // A token pointing at a deleted account is treated as unknown
        Err(SproutError::UserNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
