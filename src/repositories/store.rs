use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::{User, UserFilter, UserInput};

/// Data-access primitives for the `users` table.
///
/// Implementations own id and timestamp generation and carry no business
/// rules; validation happens in the service before any of these are called.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user, returning the record with generated id and timestamps.
    async fn create(&self, input: &UserInput) -> Result<User, StoreError>;

    /// Point lookup by id. Absence is `Ok(None)`, never an error.
    async fn find_unique(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Replace `name` and `email` and refresh `updated_at`.
    ///
    /// Returns `StoreError::NotFound` when no record has this id.
    async fn update(&self, id: &str, input: &UserInput) -> Result<User, StoreError>;

    /// All users, or those whose name contains the filter's pattern.
    async fn find_many(&self, filter: &UserFilter) -> Result<Vec<User>, StoreError>;
}
