//! Application constants module.
//!
//! Centralizes error messages, machine-readable error codes and
//! search tokens used throughout the application.

pub mod error_codes;
pub mod errors;
pub mod search;

pub use error_codes::*;
pub use errors::*;
pub use search::*;
