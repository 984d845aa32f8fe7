//! User domain models.

use serde::{Deserialize, Serialize};
use sprout_db::users::UserRow;

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Kid,
    Parent,
    Admin,
}

impl Role {
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "PARENT" => Self::Parent,
            "ADMIN" => Self::Admin,
            _ => Self::Kid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kid => "KID",
            Self::Parent => "PARENT",
            Self::Admin => "ADMIN",
        }
    }
}

/// An account, as seen by the application core.
///
/// Account creation and session handling live upstream; the core only
/// reads what the auth layer needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: String,
}

impl User {
    /// Create a User from a database row.
    pub fn from_row(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            role: Role::from_str(&row.role),
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::from_str("parent"), Role::Parent);
        assert_eq!(Role::from_str("ADMIN"), Role::Admin);
        assert_eq!(Role::from_str("anything-else"), Role::Kid);
        assert_eq!(Role::Parent.as_str(), "PARENT");
    }
}
