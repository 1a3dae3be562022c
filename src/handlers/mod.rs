//! HTTP request handlers organized by domain.

pub mod system_handler;
pub mod user_handler;

pub use system_handler::*;
pub use user_handler::*;
