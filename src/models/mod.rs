//! View models for markets, trades, positions and platform stats.

mod market;
mod position;
mod stats;
mod trade;

pub use market::{
    MarketAnalytics, MarketDetails, MarketStatus, MarketSummary, MarketTier, Outcome, PoolInfo,
};
pub use position::UserPosition;
pub use stats::PlatformStats;
pub use trade::Trade;
