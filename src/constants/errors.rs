//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";

// Validation errors
pub const ERR_INVALID_PAYLOAD: &str = "Invalid payload";
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";
