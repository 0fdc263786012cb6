use serde::{Deserialize, Serialize};

use super::{Rating, Ticker};

/// Merged record served by the realtime service: the current rating, the
/// last-propagated rating, and a fresh quote. Built per request, never
/// stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Realtime {
    pub rating: Rating,
    pub rating_history: Rating,
    pub ticker: Ticker,
}

impl Realtime {
    /// True when the current rating differs from the last-propagated one
    /// in any field.
    pub fn rating_changed(&self) -> bool {
        self.rating != self.rating_history
    }
}
