//! Common validation utilities and helpers.

use validator::ValidationErrors;

use crate::constants::CODE_VALIDATION_FAILED;
use crate::errors::ApiError;

/// Convert validator errors to `ApiError::ValidationError`.
///
/// Messages are sorted so that responses are stable regardless of the
/// order in which fields were checked.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let mut errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    errors.sort();
    ApiError::validation(CODE_VALIDATION_FAILED, errors)
}
