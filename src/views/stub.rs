//! In-memory [`MarketReader`] with canned contract state.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use alloy_primitives::{address, Address, B256, U256};
use async_trait::async_trait;

use crate::api::{
    MarketReader, RawAnalytics, RawMarketDetails, RawPoolInfo, RawPosition, RawTrade,
};
use crate::error::ReadError;
use crate::models::Outcome;

pub const ALICE: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");
pub const BOB: Address = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");

#[derive(Default)]
pub struct StubReader {
    pub ids: Vec<u64>,
    pub markets: HashMap<u64, RawMarketDetails>,
    pub prices: HashMap<(u64, u8), U256>,
    pub failing_prices: HashSet<u64>,
    pub pools: HashMap<u64, RawPoolInfo>,
    pub analytics: HashMap<u64, RawAnalytics>,
    pub trades: HashMap<u64, Vec<RawTrade>>,
    pub positions: HashMap<(Address, u64), RawPosition>,
    pub fail_ids: bool,
    pub creation_fee: Option<U256>,
    pub call_log: Mutex<Vec<&'static str>>,
}

impl StubReader {
    /// List a market with yes/no prices of 6000/4000 basis points.
    pub fn with_market(mut self, market: RawMarketDetails) -> Self {
        let id = market.id;
        self.ids.push(id);
        self.prices.insert((id, Outcome::Yes.code()), U256::from(6000u64));
        self.prices.insert((id, Outcome::No.code()), U256::from(4000u64));
        self.markets.insert(id, market);
        self
    }

    /// List an id whose detail reads revert.
    pub fn with_listed_id(mut self, id: u64) -> Self {
        self.ids.push(id);
        self
    }

    pub fn with_pool(mut self, id: u64, pool: RawPoolInfo) -> Self {
        self.pools.insert(id, pool);
        self
    }

    pub fn with_analytics(mut self, id: u64, analytics: RawAnalytics) -> Self {
        self.analytics.insert(id, analytics);
        self
    }

    pub fn with_trade(mut self, id: u64, trade: RawTrade) -> Self {
        self.trades.entry(id).or_default().push(trade);
        self
    }

    pub fn with_position(mut self, user: Address, id: u64, outcome: u8, shares: u64) -> Self {
        self.positions.insert(
            (user, id),
            RawPosition {
                market_id: id,
                outcome,
                shares: U256::from(shares),
                avg_price: U256::from(5000u64),
                timestamp: U256::from(1_700_000_000u64),
            },
        );
        self
    }

    /// Contract methods invoked so far, in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.call_log.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str) {
        self.call_log.lock().unwrap().push(method);
    }
}

fn not_found(method: &'static str, market_id: u64) -> ReadError {
    ReadError::Reverted {
        method,
        reason: format!("market {market_id} does not exist"),
    }
}

pub fn raw_market(id: u64, resolved: bool) -> RawMarketDetails {
    RawMarketDetails {
        id,
        title: format!("Market {id}"),
        description: format!("Will market {id} resolve yes?"),
        end_time: 2_000_000_000,
        resolved,
        outcome: if resolved { 1 } else { 0 },
        tier: 0,
        tvl: U256::from(1_000u64 * id),
        creator: ALICE,
        oracle: BOB,
    }
}

pub fn raw_trade(trader: Address, timestamp: u64) -> RawTrade {
    RawTrade {
        trader,
        outcome: 1,
        shares: U256::from(100u64),
        price: U256::from(5000u64),
        timestamp: U256::from(timestamp),
        tx_hash: B256::left_padding_from(&timestamp.to_be_bytes()),
    }
}

#[async_trait]
impl MarketReader for StubReader {
    async fn all_market_ids(&self) -> Result<Vec<u64>, ReadError> {
        self.record("getAllMarketIds");
        if self.fail_ids {
            return Err(ReadError::Transport {
                method: "getAllMarketIds",
                reason: "connection refused".to_string(),
            });
        }
        Ok(self.ids.clone())
    }

    async fn market_details(&self, market_id: u64) -> Result<RawMarketDetails, ReadError> {
        self.record("getMarketDetails");
        self.markets
            .get(&market_id)
            .cloned()
            .ok_or_else(|| not_found("getMarketDetails", market_id))
    }

    async fn outcome_price(&self, market_id: u64, outcome: Outcome) -> Result<U256, ReadError> {
        self.record("calculateOutcomePrice");
        if self.failing_prices.contains(&market_id) {
            return Err(ReadError::Decode {
                method: "calculateOutcomePrice",
                reason: "empty return data".to_string(),
            });
        }
        self.prices
            .get(&(market_id, outcome.code()))
            .copied()
            .ok_or_else(|| not_found("calculateOutcomePrice", market_id))
    }

    async fn pool_info(&self, market_id: u64) -> Result<RawPoolInfo, ReadError> {
        self.record("getMarketPoolInfo");
        self.pools
            .get(&market_id)
            .cloned()
            .ok_or_else(|| not_found("getMarketPoolInfo", market_id))
    }

    async fn user_position(
        &self,
        user: Address,
        market_id: u64,
    ) -> Result<RawPosition, ReadError> {
        self.record("getUserPosition");
        self.positions
            .get(&(user, market_id))
            .cloned()
            .ok_or_else(|| not_found("getUserPosition", market_id))
    }

    async fn latest_trades(&self, market_id: u64, limit: u64) -> Result<Vec<RawTrade>, ReadError> {
        self.record("getLatestTrades");
        let trades = self
            .trades
            .get(&market_id)
            .ok_or_else(|| not_found("getLatestTrades", market_id))?;
        Ok(trades.iter().take(limit as usize).cloned().collect())
    }

    async fn analytics(&self, market_id: u64) -> Result<RawAnalytics, ReadError> {
        self.record("getMarketAnalytics");
        self.analytics
            .get(&market_id)
            .cloned()
            .ok_or_else(|| not_found("getMarketAnalytics", market_id))
    }

    async fn market_creation_fee(&self) -> Result<U256, ReadError> {
        self.record("marketCreationFee");
        self.creation_fee.ok_or(ReadError::Reverted {
            method: "marketCreationFee",
            reason: "not configured".to_string(),
        })
    }
}
