// src/error.rs

use crate::models::ErrorResponse;
use actix_web::error::QueryPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use log::debug;
use query_service::QueryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing symbol")]
    MissingSymbol,

    // Every provider failure is a 500 carrying the provider's own message
    #[error(transparent)]
    Upstream(#[from] QueryError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingSymbol => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Query extractor failures: the symbol could not be read, answer like a
/// missing one instead of actix's plain-text 400.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected query string: {}", err);
    ApiError::MissingSymbol.into()
}
