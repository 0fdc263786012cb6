use mongodb::bson::doc;
use mongodb::options::{ClientOptions, UpdateOptions};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use crate::config::HistorySettings;
use crate::error::ServiceError;
use crate::models::Rating;

/// Stored shape of a propagated rating, keyed by exact symbol match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRating {
    pub symbol: String,
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
}

/// MongoDB-backed store of the last rating propagated per symbol.
#[derive(Clone)]
pub struct HistoryStore {
    collection: Collection<StoredRating>,
}

impl HistoryStore {
    pub async fn connect(settings: &HistorySettings) -> Result<Self, ServiceError> {
        tracing::info!("connecting to database: {}", settings.db_uri);

        let mut options = ClientOptions::parse(&settings.db_uri)
            .await
            .map_err(|e| ServiceError::Internal(format!("unable to connect to database: {e}")))?;
        options.connect_timeout = Some(settings.db_connect_timeout);
        options.server_selection_timeout = Some(settings.db_connect_timeout);

        let client = Client::with_options(options)
            .map_err(|e| ServiceError::Internal(format!("unable to connect to database: {e}")))?;

        Ok(Self {
            collection: client
                .database(&settings.db_name)
                .collection(&settings.db_collection),
        })
    }

    pub async fn get(&self, symbol: &str) -> Result<Rating, ServiceError> {
        let stored = self
            .collection
            .find_one(doc! { "symbol": symbol }, None)
            .await
            .map_err(|e| ServiceError::dependency("database", e))?
            .ok_or_else(|| ServiceError::NotFound(symbol.to_string()))?;

        Ok(Rating {
            average: stored.average,
            highest: stored.highest,
            lowest: stored.lowest,
        })
    }

    /// Upsert the rating for a symbol: creates the document if absent,
    /// overwrites it if present. An update acknowledging neither a match
    /// nor an insert is treated as a failed write.
    pub async fn upsert(&self, symbol: &str, rating: &Rating) -> Result<(), ServiceError> {
        let filter = doc! { "symbol": symbol };
        let update = doc! {
            "$set": {
                "symbol": symbol,
                "average": rating.average,
                "highest": rating.highest,
                "lowest": rating.lowest,
            }
        };

        let res = self
            .collection
            .update_one(
                filter,
                update,
                UpdateOptions::builder().upsert(true).build(),
            )
            .await
            .map_err(|e| ServiceError::dependency("database", e))?;

        if res.matched_count == 0 && res.upserted_id.is_none() {
            return Err(ServiceError::Internal(format!(
                "unable to update database with received POST message for {symbol}"
            )));
        }

        Ok(())
    }
}
