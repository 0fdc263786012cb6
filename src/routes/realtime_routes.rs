use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::controllers::realtime_controller::{self, RealtimeState};
use crate::controllers::health;

pub fn app(state: RealtimeState) -> Router {
    Router::new()
        .route("/realtime", get(realtime_controller::get_realtime))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
