use axum::extract::{Query, State};
use axum::Json;

use crate::error::ServiceError;
use crate::models::Realtime;
use crate::services::realtime_service::RealtimeService;

use super::{require_symbol, SymbolQuery};

#[derive(Clone)]
pub struct RealtimeState {
    pub realtime: RealtimeService,
}

// GET /realtime?symbol=GME
pub async fn get_realtime(
    State(state): State<RealtimeState>,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<Realtime>, ServiceError> {
    let symbol = require_symbol(query)?;
    tracing::info!("received realtime request for {symbol}, retrieving data");

    let merged = state.realtime.fetch(&symbol).await?;

    tracing::info!("responding with merged data for {symbol}");
    Ok(Json(merged))
}
