// src/main.rs

use clap::Parser;
use dividend_server::config::ServerConfig;
use dividend_server::run_server;
use log::{info, LevelFilter};
use query_service::YahooClient;
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = ServerConfig::parse();
    init_logger(config.log_level());

    let client = YahooClient::new(config.yahoo())
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    info!("Using market data provider at {}", client.config().api_url);

    run_server(config, Arc::new(client)).await
}

fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
