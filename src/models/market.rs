//! Market view models derived from the contract's details, pool and analytics reads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::{RawAnalytics, RawPoolInfo};

/// Binary outcome side as encoded on-chain (0 is reserved for "unset").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Yes,
    No,
}

impl Outcome {
    pub fn code(&self) -> u8 {
        match self {
            Outcome::Yes => 1,
            Outcome::No => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Outcome::Yes),
            2 => Some(Outcome::No),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Yes => "Yes",
            Outcome::No => "No",
        }
    }
}

/// Market classification. Affects display and grouping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketTier {
    #[default]
    Standard,
    Optima,
}

impl MarketTier {
    /// Any non-zero tier code is treated as OPTIMA.
    pub fn from_code(code: u8) -> Self {
        if code == 0 {
            MarketTier::Standard
        } else {
            MarketTier::Optima
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketTier::Standard => "STANDARD",
            MarketTier::Optima => "OPTIMA",
        }
    }
}

impl fmt::Display for MarketTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Lifecycle state shown in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketStatus {
    Active,
    Ended,
    Resolved,
}

impl MarketStatus {
    /// A resolved market is `Resolved` regardless of time; otherwise the end time decides.
    pub fn at(resolved: bool, end_time: u64, now: u64) -> Self {
        if resolved {
            MarketStatus::Resolved
        } else if now < end_time {
            MarketStatus::Active
        } else {
            MarketStatus::Ended
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketStatus::Active => "Active",
            MarketStatus::Ended => "Ended",
            MarketStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// AMM pool state for a market. Amounts are decimal strings of on-chain integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    pub yes_reserve: String,
    pub no_reserve: String,
    pub total_lp_tokens: String,
    pub total_yes_shares: String,
    pub total_no_shares: String,
    pub global_yes_allocation: String,
    pub global_no_allocation: String,
}

impl Default for PoolInfo {
    fn default() -> Self {
        let zero = || "0".to_string();
        Self {
            yes_reserve: zero(),
            no_reserve: zero(),
            total_lp_tokens: zero(),
            total_yes_shares: zero(),
            total_no_shares: zero(),
            global_yes_allocation: zero(),
            global_no_allocation: zero(),
        }
    }
}

impl From<RawPoolInfo> for PoolInfo {
    fn from(raw: RawPoolInfo) -> Self {
        Self {
            yes_reserve: raw.yes_reserve.to_string(),
            no_reserve: raw.no_reserve.to_string(),
            total_lp_tokens: raw.total_lp_tokens.to_string(),
            total_yes_shares: raw.total_yes_shares.to_string(),
            total_no_shares: raw.total_no_shares.to_string(),
            global_yes_allocation: raw.global_yes_allocation.to_string(),
            global_no_allocation: raw.global_no_allocation.to_string(),
        }
    }
}

/// Trading activity counters for a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalytics {
    pub total_volume: String,
    pub total_trades: String,
    pub total_fees: String,
    pub last_24h_volume: String,
    pub unique_trader_count: String,
    pub liquidity_volume: String,
}

impl Default for MarketAnalytics {
    fn default() -> Self {
        let zero = || "0".to_string();
        Self {
            total_volume: zero(),
            total_trades: zero(),
            total_fees: zero(),
            last_24h_volume: zero(),
            unique_trader_count: zero(),
            liquidity_volume: zero(),
        }
    }
}

impl From<RawAnalytics> for MarketAnalytics {
    fn from(raw: RawAnalytics) -> Self {
        Self {
            total_volume: raw.total_volume.to_string(),
            total_trades: raw.total_trades.to_string(),
            total_fees: raw.total_fees.to_string(),
            last_24h_volume: raw.last_24h_volume.to_string(),
            unique_trader_count: raw.unique_trader_count.to_string(),
            liquidity_volume: raw.liquidity_volume.to_string(),
        }
    }
}

/// Full view of one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDetails {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Same text as `description`; the contract has no separate field
    pub resolution_criteria: String,
    pub resolved: bool,
    /// Unix seconds
    pub end_time: u64,
    /// Winning outcome code, `None` until resolved
    pub outcome: Option<u8>,
    pub tier: MarketTier,
    pub tvl: String,
    pub creator: String,
    pub oracle: String,
    /// Basis points (10000 = 100%)
    pub yes_price: String,
    pub no_price: String,
    pub total_liquidity: String,
    pub participant_count: String,

    // Pool
    pub yes_reserve: String,
    pub no_reserve: String,
    pub total_lp_tokens: String,
    pub total_yes_shares: String,
    pub total_no_shares: String,
    pub global_yes_allocation: String,
    pub global_no_allocation: String,

    // Analytics
    pub total_volume: String,
    pub total_trades: String,
    pub total_fees: String,
    pub last_24h_volume: String,
    pub liquidity_volume: String,
}

impl MarketDetails {
    /// TVL as a float, for display-level aggregates only.
    pub fn tvl_f64(&self) -> f64 {
        self.tvl.parse().unwrap_or(0.0)
    }
}

/// Condensed view of a market for listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub end_time: u64,
    pub resolved: bool,
    pub tier: MarketTier,
    pub yes_price: String,
    pub no_price: String,
    pub total_value_locked: String,
    pub participant_count: String,
    pub total_volume: String,
    pub time_left: String,
    pub category: String,
    pub status: MarketStatus,
}
