use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::controllers::history_controller::{self, HistoryState};
use crate::controllers::health;

pub fn app(state: HistoryState) -> Router {
    Router::new()
        .route(
            "/ratings_history",
            get(history_controller::get_rating_history)
                .post(history_controller::post_rating_history),
        )
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
