use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// User record stored in the `users` table.
///
/// Serialized with camelCase keys (`createdAt`, `updatedAt`), the shape
/// returned directly by every user endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned unique identifier
    #[schema(example = "deadbeef-dead-beef-dead-123412341234")]
    pub id: String,
    /// Display name
    #[schema(example = "John Smith")]
    pub name: String,
    /// Email address (format is not enforced)
    #[schema(example = "john@smith.com")]
    pub email: String,
    /// When the user was created
    pub created_at: DateTime<Utc>,
    /// When the user was last written
    pub updated_at: DateTime<Utc>,
}

/// Filter accepted by `UserStore::find_many`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFilter {
    All,
    NameContains(String),
}

impl UserFilter {
    /// Interpret a search pattern: the wildcard token means no filter,
    /// anything else is a substring match on `name`.
    pub fn from_pattern(pattern: &str) -> Self {
        if pattern == crate::constants::WILDCARD_PATTERN {
            UserFilter::All
        } else {
            UserFilter::NameContains(pattern.to_string())
        }
    }
}
