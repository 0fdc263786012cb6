use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::RealtimeSettings;
use crate::error::ServiceError;
use crate::models::{Rating, Realtime, Ticker};

/// Aggregator behind the realtime service: fans out to the ticker,
/// ratings, and ratings_history services and merges their responses.
///
/// Holds no state beyond the HTTP client and the backend URIs; it never
/// writes anywhere.
#[derive(Clone)]
pub struct RealtimeService {
    http: Client,
    ticker_uri: String,
    ratings_uri: String,
    ratings_history_uri: String,
}

impl RealtimeService {
    pub fn new(settings: &RealtimeSettings) -> Self {
        Self {
            http: Client::new(),
            ticker_uri: settings.ticker_uri.clone(),
            ratings_uri: settings.ratings_uri.clone(),
            ratings_history_uri: settings.ratings_history_uri.clone(),
        }
    }

    /// Fetch and merge the three backend responses for one symbol.
    ///
    /// The three fetches run concurrently and all must succeed; any
    /// network, status, or decode failure fails the whole call. There is
    /// no degraded partial response.
    pub async fn fetch(&self, symbol: &str) -> Result<Realtime, ServiceError> {
        if symbol.trim().is_empty() {
            return Err(ServiceError::MissingSymbol);
        }

        let (ticker, rating, rating_history) = tokio::join!(
            fetch_json::<Ticker>(&self.http, &self.ticker_uri, "ticker", symbol),
            fetch_json::<Rating>(&self.http, &self.ratings_uri, "ratings", symbol),
            fetch_json::<Rating>(
                &self.http,
                &self.ratings_history_uri,
                "ratings_history",
                symbol
            ),
        );

        Ok(Realtime {
            rating: rating?,
            rating_history: rating_history?,
            ticker: ticker?,
        })
    }
}

/// GET `{uri}?symbol={symbol}` and decode the body. `uri` is the full
/// route URI of the backend (as configured in the environment).
async fn fetch_json<T: DeserializeOwned>(
    http: &Client,
    uri: &str,
    service: &'static str,
    symbol: &str,
) -> Result<T, ServiceError> {
    let res = http
        .get(uri)
        .query(&[("symbol", symbol)])
        .send()
        .await
        .map_err(|e| ServiceError::dependency(service, e))?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        return Err(ServiceError::dependency(
            service,
            format!("{status} {body}"),
        ));
    }

    res.json::<T>()
        .await
        .map_err(|e| ServiceError::dependency(service, e))
}
