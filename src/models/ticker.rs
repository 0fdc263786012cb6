use serde::{Deserialize, Serialize};

/// Quote response for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticker {
    #[serde(rename = "companyName")]
    pub company_name: String,

    pub price: f64,
    pub symbol: String,
}
