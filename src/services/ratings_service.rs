use reqwest::Client;
use serde::Deserialize;

use crate::error::ServiceError;
use crate::models::Rating;

/// Client for the scraped analyst-ratings payloads backing the ratings
/// service. The payload host serves one JSON document per symbol at
/// `{base}/{symbol}/payload.json` (symbol lowercased in the path).
#[derive(Clone)]
pub struct PriceTargetClient {
    http: Client,
    base_url: String,
}

impl PriceTargetClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub async fn ratings(&self, symbol: &str) -> Result<Rating, ServiceError> {
        let url = format!("{}/{}/payload.json", self.base_url, symbol.to_lowercase());
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::dependency("ratings data", e))?;

        if !res.status().is_success() {
            let status = res.status();
            return Err(ServiceError::dependency(
                "ratings data",
                format!("payload request failed: {status}"),
            ));
        }

        let payload = res
            .json::<Payload>()
            .await
            .map_err(|e| ServiceError::dependency("ratings data", e))?;

        let ratings = payload
            .analysts
            .and_then(|a| a.ratings)
            .unwrap_or_default();

        summarize(&ratings).ok_or_else(|| ServiceError::NotFound(symbol.to_string()))
    }
}

/// Reduce the analyst ratings to the lowest, highest, and mean price
/// target. Entries without a price target are skipped; `None` when nothing
/// usable remains.
pub fn summarize(ratings: &[AnalystRating]) -> Option<Rating> {
    let mut lowest = f64::MAX;
    let mut highest = f64::MIN;
    let mut total = 0.0;
    let mut count = 0u32;

    for rating in ratings {
        let Some(value) = rating.price_target.as_ref().and_then(|t| t.value) else {
            continue;
        };

        if value < lowest {
            lowest = value;
        }
        if value > highest {
            highest = value;
        }
        total += value;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    Some(Rating {
        average: total / f64::from(count),
        highest,
        lowest,
    })
}

#[derive(Debug, Deserialize)]
struct Payload {
    analysts: Option<Analysts>,
}

#[derive(Debug, Deserialize)]
struct Analysts {
    ratings: Option<Vec<AnalystRating>>,
}

#[derive(Debug, Deserialize)]
pub struct AnalystRating {
    #[serde(rename = "priceTarget")]
    pub price_target: Option<PriceTarget>,
}

#[derive(Debug, Deserialize)]
pub struct PriceTarget {
    pub value: Option<f64>,
}
