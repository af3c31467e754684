//! Read-only market views.
//!
//! [`MarketViews`] wraps one [`MarketReader`] and exposes the data surface used
//! by the UI. Every failed contract read is logged and collapsed into `None` or
//! an empty list; nothing is cached and nothing is retried.

mod aggregate;
#[cfg(test)]
mod stub;

use alloy_primitives::Address;
use std::str::FromStr;
use tracing::warn;

use crate::api::{MarketReader, RpcMarketReader};
use crate::chain::MarketContract;
use crate::error::ReadError;
use crate::models::{MarketAnalytics, PoolInfo, Trade, UserPosition};

pub use aggregate::{fold_platform_stats, merge_market_details, summarize};

/// Trades fetched per market when no limit is given.
pub const DEFAULT_TRADE_LIMIT: u64 = 10;

/// Trades fetched per market for a user's history.
pub const DEFAULT_HISTORY_LIMIT: u64 = 50;

/// Stateless view surface over a contract reader.
pub struct MarketViews<R> {
    reader: R,
}

impl MarketViews<RpcMarketReader> {
    /// Views backed by JSON-RPC reads against the given contract.
    pub fn connect(contract: &MarketContract) -> Self {
        Self::new(RpcMarketReader::new(contract))
    }
}

impl<R: MarketReader> MarketViews<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// All market ids in contract order, empty on failure.
    pub async fn all_market_ids(&self) -> Vec<u64> {
        available(self.reader.all_market_ids().await).unwrap_or_default()
    }

    pub async fn market_pool_info(&self, market_id: u64) -> Option<PoolInfo> {
        available(self.reader.pool_info(market_id).await).map(PoolInfo::from)
    }

    pub async fn market_analytics(&self, market_id: u64) -> Option<MarketAnalytics> {
        available(self.reader.analytics(market_id).await).map(MarketAnalytics::from)
    }

    /// Position of `user` in a market. An unparsable address counts as a failed read.
    pub async fn user_position_details(&self, user: &str, market_id: u64) -> Option<UserPosition> {
        let address = available(parse_address("getUserPosition", user))?;
        available(self.reader.user_position(address, market_id).await)
            .map(|raw| UserPosition::from_raw(user, raw))
    }

    /// Up to `limit` most recent trades of a market.
    pub async fn latest_trades(&self, market_id: u64, limit: u64) -> Vec<Trade> {
        available(self.reader.latest_trades(market_id, limit).await)
            .map(|trades| trades.into_iter().map(Trade::from).collect())
            .unwrap_or_default()
    }

    /// Fee charged to create a market, as a decimal string of token units.
    pub async fn market_creation_fee(&self) -> Option<String> {
        available(self.reader.market_creation_fee().await).map(|fee| fee.to_string())
    }
}

/// Collapse a read result into its value, logging the failure.
fn available<T>(result: Result<T, ReadError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(method = e.method(), error = %e, "Contract read failed");
            None
        }
    }
}

fn parse_address(method: &'static str, value: &str) -> Result<Address, ReadError> {
    Address::from_str(value.trim()).map_err(|e| ReadError::InvalidArgument {
        method,
        reason: format!("{value}: {e}"),
    })
}
