use reqwest::Client;

use crate::config::RefresherSettings;
use crate::error::ServiceError;
use crate::models::Realtime;

/// Outcome of one tick over the tracked symbol list.
#[derive(Debug, Default)]
pub struct TickReport {
    pub processed: usize,
    pub updated: usize,
    pub unchanged: usize,
    /// (symbol, error message) for every symbol that failed this tick.
    pub errors: Vec<(String, String)>,
}

/// The scheduled change-detection job: walks the tracked symbols, asks the
/// realtime service for the merged record, and on a rating change pushes
/// the update to the bot service and persists the new baseline.
pub struct Refresher {
    http: Client,
    settings: RefresherSettings,
}

impl Refresher {
    pub fn new(settings: RefresherSettings) -> Self {
        Self {
            http: Client::new(),
            settings,
        }
    }

    /// Run one tick. A failing symbol is logged and recorded in the
    /// report, and the tick moves on to the next symbol. Every symbol is
    /// followed by the pacing sleep, changed or not, as a crude rate limit
    /// against the backends.
    pub async fn run_tick(&self) -> TickReport {
        let mut report = TickReport::default();

        for symbol in &self.settings.symbols {
            report.processed += 1;

            match self.refresh_symbol(symbol).await {
                Ok(true) => {
                    tracing::info!("propagated rating update for {symbol}");
                    report.updated += 1;
                }
                Ok(false) => {
                    tracing::info!(
                        "no difference between current and previous ratings for {symbol}"
                    );
                    report.unchanged += 1;
                }
                Err(err) => {
                    tracing::error!("failed to refresh {symbol}: {err}");
                    report.errors.push((symbol.clone(), err.to_string()));
                }
            }

            tokio::time::sleep(self.settings.pacing).await;
        }

        report
    }

    /// Returns true when the symbol's rating changed and the update was
    /// propagated. On change, both the bot push and the history write must
    /// succeed.
    async fn refresh_symbol(&self, symbol: &str) -> Result<bool, ServiceError> {
        let realtime = self.fetch_realtime(symbol).await?;

        if !realtime.rating_changed() {
            return Ok(false);
        }

        self.push_update(symbol, &realtime).await?;
        self.store_baseline(symbol, &realtime).await?;

        Ok(true)
    }

    async fn fetch_realtime(&self, symbol: &str) -> Result<Realtime, ServiceError> {
        let res = self
            .http
            .get(&self.settings.realtime_uri)
            .query(&[("symbol", symbol)])
            .send()
            .await
            .map_err(|e| ServiceError::dependency("realtime", e))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(ServiceError::dependency(
                "realtime",
                format!("{status} {body}"),
            ));
        }

        res.json::<Realtime>()
            .await
            .map_err(|e| ServiceError::dependency("realtime", e))
    }

    async fn push_update(&self, symbol: &str, realtime: &Realtime) -> Result<(), ServiceError> {
        let res = self
            .http
            .post(&self.settings.bot_uri)
            .query(&[("symbol", symbol)])
            .json(realtime)
            .send()
            .await
            .map_err(|e| ServiceError::dependency("bot", e))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(ServiceError::dependency("bot", format!("{status} {body}")));
        }

        Ok(())
    }

    /// Persist the *current* rating as the new history baseline.
    async fn store_baseline(&self, symbol: &str, realtime: &Realtime) -> Result<(), ServiceError> {
        let res = self
            .http
            .post(&self.settings.ratings_history_uri)
            .query(&[("symbol", symbol)])
            .json(&realtime.rating)
            .send()
            .await
            .map_err(|e| ServiceError::dependency("ratings_history", e))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(ServiceError::dependency(
                "ratings_history",
                format!("{status} {body}"),
            ));
        }

        Ok(())
    }
}
