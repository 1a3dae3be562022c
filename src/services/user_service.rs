//! User service: validation and search-pattern interpretation on top of a
//! [`UserStore`].

use std::sync::Arc;

use log::{debug, info, warn};

use crate::errors::ApiError;
use crate::models::{User, UserFilter, UserInput};
use crate::repositories::UserStore;
use crate::utils::{mask_email, mask_name};
use crate::validators::validate_user_input;

pub struct UserService {
    repository: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserStore>) -> Self {
        Self { repository }
    }

    /// Create a user from a name and email. Duplicates are allowed.
    pub async fn create_user(&self, input: UserInput) -> Result<User, ApiError> {
        validate_user_input(&input).inspect_err(|_| {
            warn!("Create user rejected: invalid payload");
        })?;

        debug!(
            "Creating user name={} email={}",
            mask_name(&input.name),
            mask_email(&input.email)
        );
        let user = self.repository.create(&input).await?;

        info!("Created user: {}", user.id);
        Ok(user)
    }

    /// Look a user up by id. An unknown id is `Ok(None)`.
    pub async fn find_user_by_id(&self, user_id: &str) -> Result<Option<User>, ApiError> {
        debug!("Fetching user by ID: {}", user_id);
        Ok(self.repository.find_unique(user_id).await?)
    }

    /// Replace both `name` and `email` of an existing user.
    pub async fn update_user(&self, user_id: &str, input: UserInput) -> Result<User, ApiError> {
        validate_user_input(&input).inspect_err(|_| {
            warn!("Update rejected for user {}: invalid payload", user_id);
        })?;

        info!("Updating user: {}", user_id);
        let user = self
            .repository
            .update(user_id, &input)
            .await
            .inspect_err(|e| warn!("Update failed for user {}: {}", user_id, e))?;

        info!("Successfully updated user: {}", user_id);
        Ok(user)
    }

    /// Users whose name contains `pattern`; the wildcard `*` returns all users.
    pub async fn find_matching_users_by_name(&self, pattern: &str) -> Result<Vec<User>, ApiError> {
        let filter = UserFilter::from_pattern(pattern);
        debug!("Searching users with filter: {:?}", filter);

        let users = self.repository.find_many(&filter).await?;

        debug!("Search matched {} user(s)", users.len());
        Ok(users)
    }
}
