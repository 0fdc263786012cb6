use std::net::SocketAddr;

use price_targets::config;
use price_targets::controllers::history_controller::HistoryState;
use price_targets::routes;
use price_targets::services::history_service::HistoryStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = match config::ratings_history() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("{err}");
            tracing::error!("exiting...");
            std::process::exit(1);
        }
    };

    let store = match HistoryStore::connect(&settings).await {
        Ok(store) => store,
        Err(err) => {
            tracing::error!("{err}");
            tracing::error!("exiting...");
            std::process::exit(1);
        }
    };

    let app = routes::history_routes::app(HistoryState { store });

    tracing::info!(
        "setting up and starting ratings_history server on port {}",
        settings.port
    );
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
