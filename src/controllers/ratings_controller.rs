use axum::extract::{Query, State};
use axum::Json;

use crate::error::ServiceError;
use crate::models::Rating;
use crate::services::ratings_service::PriceTargetClient;

use super::{require_symbol, SymbolQuery};

#[derive(Clone)]
pub struct RatingsState {
    pub targets: PriceTargetClient,
}

// GET /ratings?symbol=GME
pub async fn get_ratings(
    State(state): State<RatingsState>,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<Rating>, ServiceError> {
    let symbol = require_symbol(query)?;
    tracing::info!("received ratings request for {symbol}, retrieving price targets");

    let rating = state.targets.ratings(&symbol).await?;

    tracing::info!("responding with price targets for {symbol}");
    Ok(Json(rating))
}
