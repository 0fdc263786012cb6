use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::controllers::ticker_controller::{self, TickerState};
use crate::controllers::health;

pub fn app(state: TickerState) -> Router {
    Router::new()
        .route("/ticker", get(ticker_controller::get_ticker))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
