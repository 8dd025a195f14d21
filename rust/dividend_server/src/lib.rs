// src/lib.rs

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use config::ServerConfig;
use log::info;
use query_service::MarketDataProvider;
use std::sync::Arc;

/// Register the routes on an app or test service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    use handlers::{dividend, health_check};

    cfg.app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(dividend)
        .service(health_check);
}

/// Cross-origin policy: any origin, method and header, answered with `*`.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

pub async fn run_server(
    config: ServerConfig,
    provider: Arc<dyn MarketDataProvider>,
) -> std::io::Result<()> {
    let provider = web::Data::from(provider);

    info!("Starting dividend server at http://{}", config.bind_addr());
    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .app_data(provider.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
