//! Views composed from several contract reads.

use alloy_primitives::U256;
use chrono::Utc;
use futures::future::join_all;
use tracing::debug;

use crate::api::{MarketReader, RawMarketDetails};
use crate::format::format_time_left;
use crate::models::{
    MarketAnalytics, MarketDetails, MarketStatus, MarketSummary, MarketTier, Outcome,
    PlatformStats, PoolInfo, Trade,
};

use super::{available, MarketViews};

const DEFAULT_CATEGORY: &str = "General";

impl<R: MarketReader> MarketViews<R> {
    /// Full market view.
    ///
    /// Base details and both outcome prices are required; pool info and
    /// analytics fall back to zeroed defaults when their reads fail.
    /// A failed price read therefore also yields `None`.
    pub async fn market_details(&self, market_id: u64) -> Option<MarketDetails> {
        let (base, yes_price, no_price, pool, analytics) = futures::join!(
            self.reader.market_details(market_id),
            self.reader.outcome_price(market_id, Outcome::Yes),
            self.reader.outcome_price(market_id, Outcome::No),
            self.market_pool_info(market_id),
            self.market_analytics(market_id),
        );

        let base = available(base);
        let yes_price = available(yes_price);
        let no_price = available(no_price);

        Some(merge_market_details(
            base?, yes_price?, no_price?, pool, analytics,
        ))
    }

    /// Listing view of one market, with status and time left sampled at call time.
    pub async fn market_summary(&self, market_id: u64) -> Option<MarketSummary> {
        let details = self.market_details(market_id).await?;
        let now = Utc::now().timestamp().max(0) as u64;
        Some(summarize(&details, now))
    }

    /// Summaries of every listed market, skipping those that failed to load.
    pub async fn all_market_summaries(&self) -> Vec<MarketSummary> {
        let ids = self.all_market_ids().await;
        let summaries = join_all(ids.iter().map(|&id| self.market_summary(id))).await;

        let loaded: Vec<MarketSummary> = summaries.into_iter().flatten().collect();
        debug!(listed = ids.len(), loaded = loaded.len(), "Loaded market summaries");
        loaded
    }

    /// Totals across every listed market.
    pub async fn platform_stats(&self) -> PlatformStats {
        let ids = self.all_market_ids().await;
        let details = join_all(ids.iter().map(|&id| self.market_details(id))).await;

        fold_platform_stats(ids.len(), details.iter().flatten())
    }

    /// Trades by `user`, from one market or from every market.
    ///
    /// Across all markets the result is newest first. For a single market the
    /// contract's order is kept. Up to `limit` trades are read per market before filtering.
    pub async fn user_trade_history(
        &self,
        user: &str,
        market_id: Option<u64>,
        limit: u64,
    ) -> Vec<Trade> {
        if let Some(id) = market_id {
            return self
                .latest_trades(id, limit)
                .await
                .into_iter()
                .filter(|t| t.is_by(user))
                .collect();
        }

        let ids = self.all_market_ids().await;
        let per_market = join_all(ids.iter().map(|&id| self.latest_trades(id, limit))).await;

        let mut trades: Vec<Trade> = per_market
            .into_iter()
            .flatten()
            .filter(|t| t.is_by(user))
            .collect();
        trades.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        trades
    }
}

/// Combine the sub-reads of one market into its full view.
pub fn merge_market_details(
    base: RawMarketDetails,
    yes_price: U256,
    no_price: U256,
    pool: Option<PoolInfo>,
    analytics: Option<MarketAnalytics>,
) -> MarketDetails {
    let outcome = (base.resolved && base.outcome != 0).then_some(base.outcome);
    let participant_count = analytics
        .as_ref()
        .map(|a| a.unique_trader_count.clone())
        .unwrap_or_else(|| "0".to_string());
    let pool = pool.unwrap_or_default();
    let analytics = analytics.unwrap_or_default();
    let tvl = base.tvl.to_string();

    MarketDetails {
        id: base.id.to_string(),
        resolution_criteria: base.description.clone(),
        title: base.title,
        description: base.description,
        resolved: base.resolved,
        end_time: base.end_time,
        outcome,
        tier: MarketTier::from_code(base.tier),
        total_liquidity: tvl.clone(),
        tvl,
        creator: base.creator.to_checksum(None),
        oracle: base.oracle.to_checksum(None),
        yes_price: yes_price.to_string(),
        no_price: no_price.to_string(),
        participant_count,

        yes_reserve: pool.yes_reserve,
        no_reserve: pool.no_reserve,
        total_lp_tokens: pool.total_lp_tokens,
        total_yes_shares: pool.total_yes_shares,
        total_no_shares: pool.total_no_shares,
        global_yes_allocation: pool.global_yes_allocation,
        global_no_allocation: pool.global_no_allocation,

        total_volume: analytics.total_volume,
        total_trades: analytics.total_trades,
        total_fees: analytics.total_fees,
        last_24h_volume: analytics.last_24h_volume,
        liquidity_volume: analytics.liquidity_volume,
    }
}

/// Listing view of `details` as of `now` (unix seconds).
pub fn summarize(details: &MarketDetails, now: u64) -> MarketSummary {
    let status = MarketStatus::at(details.resolved, details.end_time, now);
    let seconds_left = if status == MarketStatus::Active {
        details.end_time - now
    } else {
        0
    };

    MarketSummary {
        id: details.id.clone(),
        title: details.title.clone(),
        description: details.description.clone(),
        end_time: details.end_time,
        resolved: details.resolved,
        tier: details.tier,
        yes_price: details.yes_price.clone(),
        no_price: details.no_price.clone(),
        total_value_locked: details.tvl.clone(),
        participant_count: details.participant_count.clone(),
        total_volume: details.total_volume.clone(),
        time_left: format_time_left(i64::try_from(seconds_left).unwrap_or(i64::MAX)),
        category: DEFAULT_CATEGORY.to_string(),
        status,
    }
}

/// Sum TVL and count unresolved markets over the details that loaded.
pub fn fold_platform_stats<'a>(
    total_markets: usize,
    details: impl IntoIterator<Item = &'a MarketDetails>,
) -> PlatformStats {
    details.into_iter().fold(
        PlatformStats {
            total_markets,
            ..PlatformStats::default()
        },
        |mut stats, d| {
            stats.total_tvl += d.tvl_f64();
            if !d.resolved {
                stats.active_markets += 1;
            }
            stats
        },
    )
}
