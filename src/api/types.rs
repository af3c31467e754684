//! Decoded return values of the market contract's view methods.
//!
//! These mirror the on-chain tuples field for field; display conversion
//! happens in the view layer.

use alloy_primitives::{Address, B256, U256};

/// `getMarketDetails(uint64)` return tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMarketDetails {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub end_time: u64,
    pub resolved: bool,
    pub outcome: u8,
    pub tier: u8,
    pub tvl: U256,
    pub creator: Address,
    pub oracle: Address,
}

/// `getMarketPoolInfo(uint64)` return tuple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPoolInfo {
    pub yes_reserve: U256,
    pub no_reserve: U256,
    pub total_lp_tokens: U256,
    pub total_yes_shares: U256,
    pub total_no_shares: U256,
    pub global_yes_allocation: U256,
    pub global_no_allocation: U256,
}

/// `getUserPosition(address, uint64)` return tuple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPosition {
    pub market_id: u64,
    pub outcome: u8,
    pub shares: U256,
    pub avg_price: U256,
    pub timestamp: U256,
}

/// One element of `getLatestTrades(uint64, uint256)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTrade {
    pub trader: Address,
    pub outcome: u8,
    pub shares: U256,
    pub price: U256,
    pub timestamp: U256,
    pub tx_hash: B256,
}

/// `getMarketAnalytics(uint64)` return tuple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAnalytics {
    pub total_volume: U256,
    pub total_trades: U256,
    pub total_fees: U256,
    pub last_24h_volume: U256,
    pub unique_trader_count: U256,
    pub liquidity_volume: U256,
}
