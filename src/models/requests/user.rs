//! User-related request models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating or fully replacing a user.
///
/// Missing fields deserialize as empty strings so that they are reported
/// as validation failures instead of JSON parse errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserInput {
    /// User's name
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "John Smith")]
    pub name: String,
    /// User's email address
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "john@smith.com")]
    pub email: String,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let input: UserInput = serde_json::from_str(r#"{"notExist": true}"#).unwrap();
        assert_eq!(input, UserInput::default());
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_valid_input() {
        let input: UserInput =
            serde_json::from_str(r#"{"name": "John Smith", "email": "john@smith.com"}"#).unwrap();
        assert_eq!(input, UserInput::new("John Smith", "john@smith.com"));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_email_format_not_checked() {
        let input = UserInput::new("John Smith", "not-an-email");
        assert!(input.validate().is_ok());
    }
}
