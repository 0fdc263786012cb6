use chrono::Utc;

use price_targets::config;
use price_targets::services::refresher::Refresher;
use price_targets::services::schedule;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = match config::refresher() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("{err}");
            tracing::error!("exiting...");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "setting up and starting refresher job for {} symbols",
        settings.symbols.len()
    );
    let refresher = Refresher::new(settings);

    // Ticks run to completion before the next fire time is computed, so a
    // tick overrunning the schedule skips the missed fire instead of
    // running concurrently with itself.
    loop {
        let now = Utc::now();
        let fire = schedule::next_fire(now);
        tracing::info!("next refresher tick at {fire}");

        let wait = (fire - now).to_std().unwrap_or_default();
        tokio::time::sleep(wait).await;

        tracing::info!("running refresher tick");
        let report = refresher.run_tick().await;
        tracing::info!(
            "tick complete: {} processed, {} updated, {} unchanged, {} failed",
            report.processed,
            report.updated,
            report.unchanged,
            report.errors.len()
        );
    }
}
