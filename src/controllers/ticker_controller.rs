use axum::extract::{Query, State};
use axum::Json;

use crate::error::ServiceError;
use crate::models::Ticker;
use crate::services::yahoo::YahooClient;

use super::{require_symbol, SymbolQuery};

#[derive(Clone)]
pub struct TickerState {
    pub yahoo: YahooClient,
}

// GET /ticker?symbol=GME
pub async fn get_ticker(
    State(state): State<TickerState>,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<Ticker>, ServiceError> {
    let symbol = require_symbol(query)?;
    tracing::info!("received ticker request for {symbol}, retrieving quote");

    let ticker = state.yahoo.quote(&symbol).await?;

    tracing::info!("responding with retrieved quote for {symbol}");
    Ok(Json(ticker))
}
