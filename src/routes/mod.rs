use actix_web::{error, web, HttpRequest};
use log::warn;

use crate::constants::{CODE_INVALID_PAYLOAD, ERR_INVALID_PAYLOAD};
use crate::errors::ApiError;
use crate::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(handlers::health_check))
        .route("/docs", web::get().to(handlers::swagger_ui))
        .route("/docs/openapi.json", web::get().to(handlers::openapi_json))
        .service(
            web::scope("/users")
                .route("/new", web::post().to(handlers::create_user))
                // Must be registered before /{userId}
                .route("/search/{text}", web::get().to(handlers::search_users))
                .route("/{userId}", web::get().to(handlers::get_user))
                .route("/{userId}", web::put().to(handlers::update_user)),
        );
}

/// Malformed JSON bodies get the same error shape as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, req: &HttpRequest| {
        warn!("Rejected JSON body on {}: {}", req.path(), err);
        ApiError::bad_request(CODE_INVALID_PAYLOAD, ERR_INVALID_PAYLOAD).into()
    })
}
