// tests/integration_tests.rs

use actix_web::http::header;
use actix_web::{test, web, App};
use async_trait::async_trait;
use dividend_server::models::ErrorResponse;
use dividend_server::{configure, cors};
use query_service::{MarketDataProvider, QueryError, QuoteSnapshot};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

// Returns a fixed snapshot and remembers which symbols it was asked for
struct StubProvider {
    snapshot: QuoteSnapshot,
    requested: Mutex<Vec<String>>,
}

impl StubProvider {
    fn new(fields: Value) -> Self {
        let snapshot = match fields {
            Value::Object(map) => map.into_iter().collect(),
            _ => QuoteSnapshot::new(),
        };
        Self {
            snapshot,
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MarketDataProvider for StubProvider {
    async fn snapshot(&self, symbol: &str) -> Result<QuoteSnapshot, QueryError> {
        self.requested.lock().unwrap().push(symbol.to_string());
        Ok(self.snapshot.clone())
    }
}

struct FailingProvider(String);

#[async_trait]
impl MarketDataProvider for FailingProvider {
    async fn snapshot(&self, _symbol: &str) -> Result<QuoteSnapshot, QueryError> {
        Err(QueryError::Other(self.0.clone()))
    }
}

macro_rules! app_with {
    ($provider:expr) => {{
        let provider: Arc<dyn MarketDataProvider> = $provider;
        test::init_service(
            App::new()
                .wrap(cors())
                .app_data(web::Data::from(provider))
                .configure(configure),
        )
        .await
    }};
}

#[actix_rt::test]
async fn test_dividend_success() {
    let stub = Arc::new(StubProvider::new(json!({
        "dividendYield": 0.005,
        "forwardEps": 6.5,
        "dividendRate": 1.0
    })));
    let app = app_with!(stub.clone());

    let req = test::TestRequest::get()
        .uri("/dividend?symbol=aapl")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "symbol": "AAPL",
            "dividendYield": 0.005,
            "forwardEps": 6.5,
            "dividendRate": 1.0
        })
    );
    assert_eq!(*stub.requested.lock().unwrap(), vec!["AAPL".to_string()]);
}

#[actix_rt::test]
async fn test_dividend_symbol_is_uppercased() {
    let app = app_with!(Arc::new(StubProvider::new(json!({}))));

    for symbol in ["msft", "Ko", "BRK.B", "t"] {
        let req = test::TestRequest::get()
            .uri(&format!("/dividend?symbol={}", symbol))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["symbol"], json!(symbol.to_uppercase()));
    }
}

#[actix_rt::test]
async fn test_dividend_missing_fields_use_defaults() {
    let app = app_with!(Arc::new(StubProvider::new(json!({
        "currency": "USD"
    }))));

    let req = test::TestRequest::get()
        .uri("/dividend?symbol=tsla")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "symbol": "TSLA",
            "dividendYield": 0.0,
            "forwardEps": "N/A",
            "dividendRate": "N/A"
        })
    );
}

#[actix_rt::test]
async fn test_dividend_partial_fields() {
    let app = app_with!(Arc::new(StubProvider::new(json!({
        "forwardEps": 2.75
    }))));

    let req = test::TestRequest::get()
        .uri("/dividend?symbol=amzn")
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["dividendYield"], json!(0.0));
    assert_eq!(body["forwardEps"], json!(2.75));
    assert_eq!(body["dividendRate"], json!("N/A"));
}

#[actix_rt::test]
async fn test_dividend_missing_symbol() {
    let stub = Arc::new(StubProvider::new(json!({})));
    let app = app_with!(stub.clone());

    for uri in ["/dividend", "/dividend?symbol=", "/dividend?other=aapl"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400, "uri: {}", uri);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Missing symbol");
    }
    assert!(stub.requested.lock().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_dividend_repeated_symbol_uses_first() {
    let stub = Arc::new(StubProvider::new(json!({ "dividendYield": 0.01 })));
    let app = app_with!(stub.clone());

    let req = test::TestRequest::get()
        .uri("/dividend?symbol=aapl&symbol=msft")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["symbol"], json!("AAPL"));
    assert_eq!(*stub.requested.lock().unwrap(), vec!["AAPL".to_string()]);
}

#[actix_rt::test]
async fn test_dividend_upstream_failure() {
    let app = app_with!(Arc::new(FailingProvider("rate limit exceeded".to_string())));

    let req = test::TestRequest::get()
        .uri("/dividend?symbol=aapl")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "rate limit exceeded" }));
}

#[actix_rt::test]
async fn test_dividend_unknown_symbol() {
    let app = app_with!(Arc::new(FailingProvider(
        "No data found for symbol ZZZZ".to_string()
    )));

    let req = test::TestRequest::get()
        .uri("/dividend?symbol=zzzz")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "No data found for symbol ZZZZ" }));
}

#[actix_rt::test]
async fn test_cors_headers_on_simple_request() {
    let app = app_with!(Arc::new(StubProvider::new(json!({}))));

    let req = test::TestRequest::get()
        .uri("/dividend?symbol=aapl")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[actix_rt::test]
async fn test_cors_preflight() {
    let app = app_with!(Arc::new(StubProvider::new(json!({}))));

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/dividend?symbol=aapl")
        .insert_header((header::ORIGIN, "https://dashboard.example.com"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[actix_rt::test]
async fn test_health_check() {
    let app = app_with!(Arc::new(StubProvider::new(json!({}))));

    let req = test::TestRequest::get()
        .uri("/health")
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let response_body = test::read_body(resp).await;
    assert_eq!(response_body, "OK");
}
