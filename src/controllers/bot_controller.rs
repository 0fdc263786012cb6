use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::ServiceError;
use crate::models::{Ack, Realtime};
use crate::services::discord::{price_target_embed, DiscordWebhook};

#[derive(Clone)]
pub struct BotState {
    pub discord: DiscordWebhook,
}

// POST /bot  body: merged realtime record
pub async fn post_bot(
    State(state): State<BotState>,
    body: Result<Json<Realtime>, JsonRejection>,
) -> Result<Json<Ack>, ServiceError> {
    let Json(update) = body.map_err(|e| ServiceError::InvalidBody(e.body_text()))?;
    let symbol = update.ticker.symbol.clone();
    tracing::info!("received rating update for {symbol}, sending to channels");

    state.discord.send(price_target_embed(&update)).await?;

    tracing::info!("successfully sent update for {symbol}");
    Ok(Json(Ack {
        success: true,
        symbol,
    }))
}
