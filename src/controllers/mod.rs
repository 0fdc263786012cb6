use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::error::ServiceError;

pub mod bot_controller;
pub mod history_controller;
pub mod ratings_controller;
pub mod realtime_controller;
pub mod ticker_controller;

/// Query shape shared by every symbol-keyed route. The parameter is
/// optional at the extractor level so a missing symbol produces the JSON
/// error payload instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct SymbolQuery {
    pub symbol: Option<String>,
}

pub(crate) fn require_symbol(query: SymbolQuery) -> Result<String, ServiceError> {
    match query.symbol {
        Some(symbol) if !symbol.trim().is_empty() => Ok(symbol.trim().to_string()),
        _ => Err(ServiceError::MissingSymbol),
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
