use std::net::SocketAddr;

use price_targets::config;
use price_targets::controllers::realtime_controller::RealtimeState;
use price_targets::routes;
use price_targets::services::realtime_service::RealtimeService;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = match config::realtime() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("{err}");
            tracing::error!("exiting...");
            std::process::exit(1);
        }
    };

    let state = RealtimeState {
        realtime: RealtimeService::new(&settings),
    };
    let app = routes::realtime_routes::app(state);

    tracing::info!(
        "setting up and starting realtime server on port {}",
        settings.port
    );
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
