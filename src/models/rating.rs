use serde::{Deserialize, Serialize};

/// Analyst price-target summary for one symbol.
///
/// Change detection compares two of these with exact field-wise float
/// equality (the values round-trip through JSON unmodified, so no epsilon).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
}

/// Acknowledgement body for writes (history upsert, bot push).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    pub symbol: String,
}
