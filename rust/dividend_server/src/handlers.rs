// src/handlers.rs

use crate::error::ApiError;
use crate::models::{DividendLookup, DividendQuery, DividendResponse};
use actix_web::{get, web, HttpResponse, Responder};
use log::{debug, warn};
use query_service::MarketDataProvider;
use validator::Validate;

#[get("/dividend")]
pub async fn dividend(
    query: web::Query<Vec<(String, String)>>,
    provider: web::Data<dyn MarketDataProvider>,
) -> Result<HttpResponse, ApiError> {
    let lookup = DividendLookup::from_query(&DividendQuery::from_pairs(&query));
    if lookup.validate().is_err() {
        return Err(ApiError::MissingSymbol);
    }

    debug!("Looking up dividend data for {}", lookup.symbol);
    let snapshot = provider.snapshot(&lookup.symbol).await.map_err(|err| {
        warn!("Lookup for {} failed ({}): {}", lookup.symbol, err.kind(), err);
        ApiError::from(err)
    })?;

    Ok(HttpResponse::Ok().json(DividendResponse::from_snapshot(lookup.symbol, &snapshot)))
}

#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}
