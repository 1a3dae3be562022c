//! Name search constants.

/// Search pattern that disables name filtering and returns every user.
pub const WILDCARD_PATTERN: &str = "*";

/// Escape character used when turning a search pattern into a `LIKE` clause.
pub const LIKE_ESCAPE: char = '\\';
