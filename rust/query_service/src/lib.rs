// src/lib.rs

pub mod error;
pub mod models;
pub mod provider;
pub mod yahoo;

pub use error::QueryError;
pub use models::QuoteSnapshot;
pub use provider::MarketDataProvider;
pub use yahoo::{YahooClient, YahooConfig};
