//! SQLite-backed user repository.
//!
//! Each method maps to exactly one SQL statement against the `users` table.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use uuid::Uuid;

use crate::constants::LIKE_ESCAPE;
use crate::errors::StoreError;
use crate::models::{User, UserFilter, UserInput};
use crate::repositories::UserStore;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const USER_COLUMNS: &str = "id, name, email, created_at, updated_at";

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Wrap an existing pool. The schema is not touched.
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `url` (creating the database file if needed) and
    /// ensure the `users` table exists.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // Every connection to an in-memory database sees its own empty
        // database, so those pools are pinned to one long-lived connection.
        let pool_options = if is_in_memory(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(DEFAULT_MAX_CONNECTIONS)
        };

        let pool = pool_options.connect_with(options).await?;
        let repository = Self::with_pool(pool);
        repository.ensure_schema().await?;
        Ok(repository)
    }

    pub async fn open_in_memory() -> Result<Self, StoreError> {
        Self::connect("sqlite::memory:").await
    }

    /// Create the `users` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        info!("Ensuring users table exists...");
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, input: &UserInput) -> Result<User, StoreError> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        debug!("Repository: Inserting user {}", id);

        let sql = format!(
            "INSERT INTO users (id, name, email, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {}",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(&id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_unique(&self, id: &str) -> Result<Option<User>, StoreError> {
        debug!("Repository: Finding user by ID: {}", id);
        let sql = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn update(&self, id: &str, input: &UserInput) -> Result<User, StoreError> {
        debug!("Repository: Updating user: {}", id);
        let sql = format!(
            "UPDATE users SET name = ?, email = ?, updated_at = ?
             WHERE id = ?
             RETURNING {}",
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(&input.name)
            .bind(&input.email)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn find_many(&self, filter: &UserFilter) -> Result<Vec<User>, StoreError> {
        debug!("Repository: Finding users with filter: {:?}", filter);
        let users = match filter {
            UserFilter::All => {
                let sql = format!("SELECT {} FROM users ORDER BY rowid", USER_COLUMNS);
                sqlx::query_as::<_, User>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
            UserFilter::NameContains(pattern) => {
                let sql = format!(
                    "SELECT {} FROM users WHERE name LIKE ? ESCAPE '{}' ORDER BY rowid",
                    USER_COLUMNS, LIKE_ESCAPE
                );
                sqlx::query_as::<_, User>(&sql)
                    .bind(contains_pattern(pattern))
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(users)
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Build a `LIKE` operand matching `pattern` anywhere in the value, with
/// `%`, `_` and the escape character itself taken literally.
fn contains_pattern(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len() + 2);
    escaped.push('%');
    for c in pattern.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
