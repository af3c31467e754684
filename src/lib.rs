//! Read-only view layer over the Zento prediction-market contract.
//!
//! Reads on-chain market state through typed view calls and reshapes it into
//! display models: market details and summaries, platform statistics, user
//! positions and trade history.

pub mod api;
pub mod chain;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod views;

pub use api::{MarketReader, RpcMarketReader};
pub use chain::{Chain, MarketContract, BSC_TESTNET};
pub use config::MarketConfig;
pub use error::{ConfigError, ReadError};
pub use format::{format_price, format_time_left, format_usdt};
pub use views::{MarketViews, DEFAULT_HISTORY_LIMIT, DEFAULT_TRADE_LIMIT};
