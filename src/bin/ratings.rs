use std::net::SocketAddr;

use price_targets::config;
use price_targets::controllers::ratings_controller::RatingsState;
use price_targets::routes;
use price_targets::services::ratings_service::PriceTargetClient;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = match config::ratings() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("{err}");
            tracing::error!("exiting...");
            std::process::exit(1);
        }
    };

    let state = RatingsState {
        targets: PriceTargetClient::new(settings.ratings_request_url.clone()),
    };
    let app = routes::ratings_routes::app(state);

    tracing::info!(
        "setting up and starting ratings server on port {}",
        settings.port
    );
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
