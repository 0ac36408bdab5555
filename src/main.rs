use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::{App, HttpServer, web};
use env_logger::Env;
use log::info;

mod config;
mod middleware;
mod post;
mod router;
mod utils;

use config::AppConfig;
use middleware::cors::cors;
use middleware::error_handler::payload_too_large;
use middleware::not_found::not_found;
use post::post_service::PostService;
use router::index::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    // Built once so every worker shares the same collection.
    let post_service = web::Data::new(PostService::seeded());

    info!("Starting server on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                ErrorHandlers::new().handler(StatusCode::PAYLOAD_TOO_LARGE, payload_too_large),
            )
            .wrap(cors())
            .wrap(Logger::default())
            .app_data(post_service.clone())
            .configure(routes)
            .default_service(web::to(not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}
