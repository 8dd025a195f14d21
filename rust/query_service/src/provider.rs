// src/provider.rs

use crate::error::QueryError;
use crate::models::QuoteSnapshot;
use async_trait::async_trait;

/// Anything that can produce a metadata snapshot for a ticker symbol.
///
/// The symbol is passed through as given; callers normalize it first.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn snapshot(&self, symbol: &str) -> Result<QuoteSnapshot, QueryError>;
}
