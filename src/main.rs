use std::process;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use users_api::config::Config;
use users_api::repositories::UserRepository;
use users_api::routes;
use users_api::services::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    info!("Connecting to database...");
    let repository = match UserRepository::connect(&config.database_url).await {
        Ok(repository) => repository,
        Err(e) => {
            error!("Failed to open database: {}", e);
            process::exit(1);
        }
    };
    info!("Connected to database successfully!");

    let user_service = web::Data::new(UserService::new(Arc::new(repository)));

    let server_addr = config.bind_address();
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
