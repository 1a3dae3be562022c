//! User payload validation.

use validator::Validate;

use crate::errors::ApiError;
use crate::models::UserInput;
use crate::validators::validation_errors_to_api_error;

/// Check that both `name` and `email` are present and non-empty.
///
/// Email format and uniqueness are intentionally not checked.
pub fn validate_user_input(input: &UserInput) -> Result<(), ApiError> {
    input.validate().map_err(validation_errors_to_api_error)
}
