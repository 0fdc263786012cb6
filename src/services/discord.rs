use reqwest::Client;
use serde::Serialize;

use crate::error::ServiceError;
use crate::models::Realtime;

const EMBED_COLOR: u32 = 0x00D100;

/// Discord webhook client used by the bot service to announce rating
/// updates.
#[derive(Clone)]
pub struct DiscordWebhook {
    http: Client,
    webhook_url: String,
}

#[derive(Debug, Serialize)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub description: String,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

impl DiscordWebhook {
    pub fn new(webhook_url: String) -> Self {
        Self {
            http: Client::new(),
            webhook_url,
        }
    }

    pub async fn send(&self, embed: Embed) -> Result<(), ServiceError> {
        let res = self
            .http
            .post(&self.webhook_url)
            .json(&serde_json::json!({ "embeds": [embed] }))
            .send()
            .await
            .map_err(|e| ServiceError::dependency("discord", e))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(ServiceError::dependency(
                "discord",
                format!("webhook request failed: {status} {body}"),
            ));
        }

        Ok(())
    }
}

/// Build the price-target update message: current price up top, then the
/// highest/lowest/average targets with their previous values.
pub fn price_target_embed(update: &Realtime) -> Embed {
    Embed {
        title: format!("{} ({})", update.ticker.company_name, update.ticker.symbol),
        color: EMBED_COLOR,
        description: format!("Current Price: ${}", update.ticker.price),
        fields: vec![
            EmbedField {
                name: "Highest Price Target".to_string(),
                value: format!(
                    "Current: ${}\nPrevious: ${}",
                    update.rating.highest, update.rating_history.highest
                ),
            },
            EmbedField {
                name: "Lowest Price Target".to_string(),
                value: format!(
                    "Current: ${}\nPrevious: ${}",
                    update.rating.lowest, update.rating_history.lowest
                ),
            },
            EmbedField {
                name: "Average Price Target".to_string(),
                value: format!(
                    "Current: ${}\nPrevious: ${}",
                    update.rating.average, update.rating_history.average
                ),
            },
        ],
    }
}
