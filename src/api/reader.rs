//! The read seam between view models and the chain.

use alloy_primitives::{Address, U256};
use async_trait::async_trait;

use crate::error::ReadError;
use crate::models::Outcome;

use super::types::{RawAnalytics, RawMarketDetails, RawPoolInfo, RawPosition, RawTrade};

/// One method per contract view call. Every call is a single, side-effect-free read.
#[async_trait]
pub trait MarketReader: Send + Sync {
    /// `getAllMarketIds()`, in contract order.
    async fn all_market_ids(&self) -> Result<Vec<u64>, ReadError>;

    /// `getMarketDetails(marketId)`.
    async fn market_details(&self, market_id: u64) -> Result<RawMarketDetails, ReadError>;

    /// `calculateOutcomePrice(marketId, outcome)`.
    async fn outcome_price(&self, market_id: u64, outcome: Outcome) -> Result<U256, ReadError>;

    /// `getMarketPoolInfo(marketId)`.
    async fn pool_info(&self, market_id: u64) -> Result<RawPoolInfo, ReadError>;

    /// `getUserPosition(user, marketId)`.
    async fn user_position(&self, user: Address, market_id: u64)
        -> Result<RawPosition, ReadError>;

    /// `getLatestTrades(marketId, limit)`, most recent first as the contract returns them.
    async fn latest_trades(&self, market_id: u64, limit: u64) -> Result<Vec<RawTrade>, ReadError>;

    /// `getMarketAnalytics(marketId)`.
    async fn analytics(&self, market_id: u64) -> Result<RawAnalytics, ReadError>;

    /// `marketCreationFee()`.
    async fn market_creation_fee(&self) -> Result<U256, ReadError>;
}
