// src/config.rs

use clap::Parser;
use log::LevelFilter;
use query_service::yahoo::{DEFAULT_API_URL, DEFAULT_COOKIE_URL, DEFAULT_USER_AGENT};
use query_service::YahooConfig;

/// Startup settings, parsed once from the command line and never mutated.
#[derive(Debug, Clone, Parser)]
#[command(version, about = "Dividend lookup relay", long_about = None)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP server to.
    #[arg(long, default_value_t = 5000)]
    pub port: u16,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    pub debug: bool,

    /// Base URL of the quote summary API.
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub yahoo_api_url: String,

    /// URL that issues the provider session cookie.
    #[arg(long, default_value = DEFAULT_COOKIE_URL)]
    pub yahoo_cookie_url: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn yahoo(&self) -> YahooConfig {
        YahooConfig {
            cookie_url: self.yahoo_cookie_url.clone(),
            api_url: self.yahoo_api_url.clone(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
