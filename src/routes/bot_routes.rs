use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::controllers::bot_controller::{self, BotState};
use crate::controllers::health;

pub fn app(state: BotState) -> Router {
    Router::new()
        .route("/bot", post(bot_controller::post_bot))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
