use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;

use crate::error::ServiceError;
use crate::models::{Ack, Rating};
use crate::services::history_service::HistoryStore;

use super::{require_symbol, SymbolQuery};

#[derive(Clone)]
pub struct HistoryState {
    pub store: HistoryStore,
}

// GET /ratings_history?symbol=GME
pub async fn get_rating_history(
    State(state): State<HistoryState>,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<Rating>, ServiceError> {
    let symbol = require_symbol(query)?;
    tracing::info!("received ratings_history request for {symbol}");

    let rating = state.store.get(&symbol).await?;
    Ok(Json(rating))
}

// POST /ratings_history?symbol=GME  body: {average, highest, lowest}
pub async fn post_rating_history(
    State(state): State<HistoryState>,
    Query(query): Query<SymbolQuery>,
    body: Result<Json<Rating>, JsonRejection>,
) -> Result<Json<Ack>, ServiceError> {
    let symbol = require_symbol(query)?;
    let Json(rating) = body.map_err(|e| ServiceError::InvalidBody(e.body_text()))?;

    state.store.upsert(&symbol, &rating).await?;

    tracing::info!("updated ratings_history baseline for {symbol}");
    Ok(Json(Ack {
        success: true,
        symbol,
    }))
}
