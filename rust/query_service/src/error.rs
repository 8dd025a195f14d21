// src/error.rs

use thiserror::Error;

/// Failure kinds of a market-data lookup.
///
/// The `Display` text is what callers of the HTTP surface end up seeing, so
/// keep it short and free of request details other than the symbol.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("No data found for symbol {0}")]
    SymbolNotFound(String),

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("provider rejected the session crumb")]
    Unauthorized,

    #[error("failed to obtain session crumb: {0}")]
    Crumb(String),

    #[error("provider returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed provider response: {0}")]
    Malformed(String),

    /// Transport failure. The request URL is stripped, it carries the crumb.
    #[error("provider unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// Free-form failure reported by a provider, passed through verbatim.
    #[error("{0}")]
    Other(String),
}

impl QueryError {
    /// Short, stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            QueryError::SymbolNotFound(_) => "symbol_not_found",
            QueryError::RateLimited => "rate_limited",
            QueryError::Unauthorized => "unauthorized",
            QueryError::Crumb(_) => "crumb",
            QueryError::Status { .. } => "status",
            QueryError::Malformed(_) => "malformed",
            QueryError::Unreachable(_) => "unreachable",
            QueryError::Other(_) => "other",
        }
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        QueryError::Unreachable(err.without_url())
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::Malformed(err.to_string())
    }
}
