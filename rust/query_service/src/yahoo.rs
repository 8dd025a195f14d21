// src/yahoo.rs

use crate::error::QueryError;
use crate::models::{QuoteSnapshot, QuoteSummaryEnvelope};
use crate::provider::MarketDataProvider;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode, Url};
use tokio::sync::RwLock;

pub const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com";
pub const DEFAULT_API_URL: &str = "https://query2.finance.yahoo.com";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

const QUOTE_MODULES: &str = "financialData,quoteType,defaultKeyStatistics,assetProfile,summaryDetail";

#[derive(Debug, Clone)]
pub struct YahooConfig {
    /// Endpoint that hands out the session cookie.
    pub cookie_url: String,
    /// Base of the crumb and quote summary endpoints.
    pub api_url: String,
    pub user_agent: String,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            cookie_url: DEFAULT_COOKIE_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Quote summary client for Yahoo Finance.
///
/// The first lookup opens a session (cookie + crumb) which is reused until the
/// provider rejects it with a 401.
pub struct YahooClient {
    http: Client,
    config: YahooConfig,
    crumb: RwLock<Option<String>>,
}

impl YahooClient {
    pub fn new(config: YahooConfig) -> Result<Self, QueryError> {
        let http = Client::builder()
            .cookie_store(true)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            config,
            crumb: RwLock::new(None),
        })
    }

    pub fn config(&self) -> &YahooConfig {
        &self.config
    }

    async fn crumb(&self) -> Result<String, QueryError> {
        if let Some(crumb) = self.crumb.read().await.as_ref() {
            return Ok(crumb.clone());
        }

        let mut slot = self.crumb.write().await;
        if let Some(crumb) = slot.as_ref() {
            return Ok(crumb.clone());
        }

        // Only the Set-Cookie header matters here, the status is usually 404
        self.http.get(&self.config.cookie_url).send().await?;

        let url = format!("{}/v1/test/getcrumb", self.config.api_url.trim_end_matches('/'));
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(QueryError::RateLimited);
        }
        if !status.is_success() {
            return Err(QueryError::Crumb(format!("status {}", status.as_u16())));
        }

        let crumb = body.trim();
        if crumb.is_empty() {
            return Err(QueryError::Crumb("empty crumb".to_string()));
        }

        debug!("Opened provider session");
        *slot = Some(crumb.to_string());
        Ok(crumb.to_string())
    }

    // Another request may already have replaced the rejected crumb
    async fn drop_crumb(&self, rejected: &str) {
        let mut slot = self.crumb.write().await;
        if slot.as_deref() == Some(rejected) {
            *slot = None;
        }
    }

    fn quote_url(&self, symbol: &str) -> Result<Url, QueryError> {
        let mut url = Url::parse(&self.config.api_url)
            .map_err(|err| QueryError::Other(format!("invalid provider url: {}", err)))?;
        url.path_segments_mut()
            .map_err(|_| QueryError::Other(format!("invalid provider url: {}", self.config.api_url)))?
            .pop_if_empty()
            .extend(&["v10", "finance", "quoteSummary", symbol]);
        Ok(url)
    }
}

#[async_trait]
impl MarketDataProvider for YahooClient {
    async fn snapshot(&self, symbol: &str) -> Result<QuoteSnapshot, QueryError> {
        let crumb = self.crumb().await?;
        let url = self.quote_url(symbol)?;

        debug!("Requesting quote summary for {}", symbol);
        let response = self
            .http
            .get(url)
            .query(&[
                ("modules", QUOTE_MODULES),
                ("formatted", "false"),
                ("corsDomain", "finance.yahoo.com"),
                ("symbol", symbol),
                ("crumb", crumb.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        match status {
            StatusCode::NOT_FOUND => return Err(QueryError::SymbolNotFound(symbol.to_string())),
            StatusCode::TOO_MANY_REQUESTS => return Err(QueryError::RateLimited),
            StatusCode::UNAUTHORIZED => {
                warn!("Provider rejected session crumb, dropping it");
                self.drop_crumb(&crumb).await;
                return Err(QueryError::Unauthorized);
            }
            s if !s.is_success() => {
                return Err(QueryError::Status {
                    status: s.as_u16(),
                    message: describe_error(&body),
                })
            }
            _ => {}
        }

        let envelope: QuoteSummaryEnvelope = serde_json::from_str(&body)?;
        let modules = envelope
            .quote_summary
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| QueryError::SymbolNotFound(symbol.to_string()))?;

        Ok(QuoteSnapshot::from_modules(&modules))
    }
}

// Provider error description when the body carries one, the raw body otherwise
fn describe_error(body: &str) -> String {
    serde_json::from_str::<QuoteSummaryEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.quote_summary.error)
        .map(|error| error.description)
        .filter(|description| !description.is_empty())
        .unwrap_or_else(|| body.trim().to_string())
}
