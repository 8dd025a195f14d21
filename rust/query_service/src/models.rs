// src/models.rs

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

// Flat field map for one symbol, built from every module of a quote summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteSnapshot {
    fields: HashMap<String, Value>,
}

impl QuoteSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Numeric value of a field. Missing, null and non-numeric values are all
    /// reported as `None`.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Merge the modules of one quote summary result into a single map.
    ///
    /// `{"raw": .., "fmt": ..}` wrappers collapse to their raw value, while
    /// nulls and empty objects are dropped. When two modules carry the same
    /// key, the later module wins.
    pub fn from_modules(modules: &Map<String, Value>) -> Self {
        let mut snapshot = Self::new();
        for module in modules.values() {
            let Some(entries) = module.as_object() else {
                continue;
            };
            for (key, value) in entries {
                if let Some(value) = unwrap_raw(value) {
                    snapshot.fields.insert(key.clone(), value);
                }
            }
        }
        snapshot
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for QuoteSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

fn unwrap_raw(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(map) if map.is_empty() => None,
        Value::Object(map) => match map.get("raw") {
            Some(raw) => Some(raw.clone()),
            None => Some(value.clone()),
        },
        other => Some(other.clone()),
    }
}

// Quote summary endpoint envelope
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryEnvelope {
    pub quote_summary: QuoteSummary,
}

#[derive(Debug, Deserialize)]
pub struct QuoteSummary {
    #[serde(default)]
    pub result: Option<Vec<Map<String, Value>>>,
    #[serde(default)]
    pub error: Option<QuoteSummaryError>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteSummaryError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}
