use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::controllers::ratings_controller::{self, RatingsState};
use crate::controllers::health;

pub fn app(state: RatingsState) -> Router {
    Router::new()
        .route("/ratings", get(ratings_controller::get_ratings))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
