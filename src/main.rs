mod config;
mod errors;
mod handlers;
mod logging;
mod models;
mod repositories;
mod routes;
mod services;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use crate::config::CONFIG;
use crate::logging::LogAdapter;
use crate::repositories::InMemoryUserRepository;
use crate::services::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Initialize services
    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service = web::Data::new(UserService::new(repository, Arc::new(LogAdapter)));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
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
