//! Repository layer for database operations.
//!
//! The service layer only sees the [`UserStore`] trait; [`UserRepository`]
//! is the SQLite-backed implementation used by the server.

pub mod store;
pub mod user_repository;

pub use store::UserStore;
pub use user_repository::UserRepository;
