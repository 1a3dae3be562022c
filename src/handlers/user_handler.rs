//! User management handlers: create, fetch, update and search.

use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::errors::ApiError;
use crate::models::UserInput;
use crate::services::UserService;

/// Create a new user from name and email
#[utoipa::path(
    post,
    path = "/users/new",
    tag = "users",
    request_body = UserInput,
    responses(
        (status = 201, description = "User created", body = crate::models::User),
        (status = 400, description = "Missing name or email", body = crate::models::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<UserInput>,
) -> Result<HttpResponse, ApiError> {
    let user = user_service.create_user(body.into_inner()).await?;

    info!("Successfully created user: {}", user.id);
    Ok(HttpResponse::Created().json(user))
}

/// Find a user based on the given userId
///
/// Responds with `null` when no user has this id.
#[utoipa::path(
    get,
    path = "/users/{userId}",
    tag = "users",
    params(
        ("userId" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user, or null if absent", body = crate::models::User),
        (status = 500, description = "Store failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Fetching user with id: {}", user_id);

    let user = user_service.find_user_by_id(&user_id).await?;
    if user.is_none() {
        debug!("No user with id: {}", user_id);
    }

    Ok(HttpResponse::Ok().json(user))
}

/// Update data (name and email) of a given userId, if it exists
#[utoipa::path(
    put,
    path = "/users/{userId}",
    tag = "users",
    params(
        ("userId" = String, Path, description = "User ID")
    ),
    request_body = UserInput,
    responses(
        (status = 200, description = "User updated", body = crate::models::User),
        (status = 400, description = "Missing name or email", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<UserInput>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    let updated_user = user_service
        .update_user(&user_id, body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated_user))
}

/// Search users by name. Supports a partial string or the `*` wildcard
#[utoipa::path(
    get,
    path = "/users/search/{text}",
    tag = "users",
    params(
        ("text" = String, Path, description = "Substring of the name, or `*` for all users")
    ),
    responses(
        (status = 200, description = "Matching users", body = Vec<crate::models::User>),
        (status = 500, description = "Store failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn search_users(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let pattern = path.into_inner();

    let users = user_service.find_matching_users_by_name(&pattern).await?;

    Ok(HttpResponse::Ok().json(users))
}
