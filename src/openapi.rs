use utoipa::OpenApi;

use crate::models::{ErrorResponse, HealthResponse, User, UserInput};

/// OpenAPI documentation for the user API, served at `/docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "1.0.0",
        description = "List of user APIs for quick API contract references"
    ),
    tags(
        (name = "users", description = "Create, fetch, update and search users"),
        (name = "health", description = "Health check endpoints")
    ),
    paths(
        crate::handlers::create_user,
        crate::handlers::get_user,
        crate::handlers::update_user,
        crate::handlers::search_users,
        crate::handlers::health_check
    ),
    components(schemas(User, UserInput, ErrorResponse, HealthResponse))
)]
pub struct ApiDoc;
