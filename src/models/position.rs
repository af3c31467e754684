//! A user's holding in one market.

use serde::{Deserialize, Serialize};

use crate::api::RawPosition;

/// Position of `user` in `market_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPosition {
    pub market_id: u64,
    pub user: String,
    /// Outcome code held (0 when the user has no position)
    pub outcome: u8,
    pub shares: String,
    pub avg_price: String,
    /// Unix seconds of the last update
    pub timestamp: u64,
}

impl UserPosition {
    pub fn from_raw(user: &str, raw: RawPosition) -> Self {
        Self {
            market_id: raw.market_id,
            user: user.to_string(),
            outcome: raw.outcome,
            shares: raw.shares.to_string(),
            avg_price: raw.avg_price.to_string(),
            timestamp: raw.timestamp.saturating_to::<u64>(),
        }
    }

    /// Whether the user holds any shares.
    pub fn is_open(&self) -> bool {
        self.shares != "0"
    }
}
