use reqwest::Client;
use serde::Deserialize;

use crate::error::ServiceError;
use crate::models::Ticker;

/// Client for the Yahoo-style quote API backing the ticker service.
#[derive(Clone)]
pub struct YahooClient {
    http: Client,
    base_url: String,
}

impl YahooClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub async fn quote(&self, symbol: &str) -> Result<Ticker, ServiceError> {
        let url = format!("{}/v7/finance/quote", self.base_url);
        let res = self
            .http
            .get(&url)
            .query(&[("symbols", symbol)])
            .send()
            .await
            .map_err(|e| ServiceError::dependency("quote", e))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(ServiceError::dependency(
                "quote",
                format!("quote request failed: {status} {body}"),
            ));
        }

        let body = res
            .json::<QuoteResponse>()
            .await
            .map_err(|e| ServiceError::dependency("quote", e))?;

        let item = body
            .quote_response
            .result
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::NotFound(symbol.to_string()))?;

        let price = item
            .regular_market_price
            .ok_or_else(|| ServiceError::NotFound(symbol.to_string()))?;

        Ok(Ticker {
            company_name: item.short_name.unwrap_or_else(|| item.symbol.clone()),
            price,
            symbol: item.symbol,
        })
    }
}

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteResult,
}

#[derive(Debug, Deserialize)]
struct QuoteResult {
    result: Vec<QuoteItem>,
}

#[derive(Debug, Deserialize)]
struct QuoteItem {
    #[serde(rename = "shortName")]
    short_name: Option<String>,

    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,

    symbol: String,
}
