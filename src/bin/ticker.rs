use std::net::SocketAddr;

use price_targets::config;
use price_targets::controllers::ticker_controller::TickerState;
use price_targets::routes;
use price_targets::services::yahoo::YahooClient;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = match config::ticker() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("{err}");
            tracing::error!("exiting...");
            std::process::exit(1);
        }
    };

    let state = TickerState {
        yahoo: YahooClient::new(settings.quote_api_uri.clone()),
    };
    let app = routes::ticker_routes::app(state);

    tracing::info!(
        "setting up and starting ticker server on port {}",
        settings.port
    );
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
