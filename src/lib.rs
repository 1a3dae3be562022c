//! User management REST API.
//!
//! Four operations over a single `User` entity (create, fetch by id, full
//! update, name search) exposed over HTTP with actix-web and persisted in
//! SQLite through sqlx.

pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validators;
