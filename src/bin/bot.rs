use std::net::SocketAddr;

use price_targets::config;
use price_targets::controllers::bot_controller::BotState;
use price_targets::routes;
use price_targets::services::discord::DiscordWebhook;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = match config::bot() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("{err}");
            tracing::error!("exiting...");
            std::process::exit(1);
        }
    };

    let state = BotState {
        discord: DiscordWebhook::new(settings.webhook_url.clone()),
    };
    let app = routes::bot_routes::app(state);

    tracing::info!(
        "setting up and starting bot server on port {}",
        settings.port
    );
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
