//! Platform-wide aggregate over every market.

use serde::{Deserialize, Serialize};

/// Totals across all markets, recomputed on every request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    /// Number of ids the contract lists, including markets whose details failed to load
    pub total_markets: usize,

    /// Sum of TVL in raw token units. Float precision: display only.
    pub total_tvl: f64,

    /// Markets not yet resolved
    pub active_markets: usize,
}
