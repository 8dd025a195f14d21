// src/models.rs

use query_service::QuoteSnapshot;
use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Default)]
pub struct DividendQuery {
    pub symbol: Option<String>,
}

impl DividendQuery {
    /// Read the query from raw pairs; a repeated `symbol` keeps its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            symbol: pairs
                .iter()
                .find(|(key, _)| key == "symbol")
                .map(|(_, value)| value.clone()),
        }
    }
}

// Symbol after normalization; empty means nothing usable was sent
#[derive(Debug, Validate)]
pub struct DividendLookup {
    #[validate(length(min = 1))]
    pub symbol: String,
}

impl DividendLookup {
    pub fn from_query(query: &DividendQuery) -> Self {
        Self {
            symbol: query.symbol.as_deref().unwrap_or_default().to_uppercase(),
        }
    }
}

/// A numeric field that the provider may not report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Number(f64),
    NotAvailable,
}

impl From<Option<f64>> for FieldValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(FieldValue::NotAvailable, FieldValue::Number)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DividendResponse {
    pub symbol: String,
    pub dividend_yield: f64,
    pub forward_eps: FieldValue,
    pub dividend_rate: FieldValue,
}

impl DividendResponse {
    /// Pick the dividend fields out of a snapshot.
    ///
    /// A missing yield reads as `0`, missing EPS and rate as `"N/A"`; the
    /// existing frontend relies on exactly these defaults.
    pub fn from_snapshot(symbol: String, snapshot: &QuoteSnapshot) -> Self {
        Self {
            symbol,
            dividend_yield: snapshot.get_f64("dividendYield").unwrap_or(0.0),
            forward_eps: snapshot.get_f64("forwardEps").into(),
            dividend_rate: snapshot.get_f64("dividendRate").into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
