//! Trade model for fills recorded by the market contract.

use serde::{Deserialize, Serialize};

use crate::api::RawTrade;

/// A single executed trade. Append-only on-chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Trader's wallet address (checksummed)
    pub trader: String,

    /// Outcome code bought (1 = yes, 2 = no)
    pub outcome: u8,

    /// Shares traded, decimal string
    pub shares: String,

    /// Execution price, decimal string
    pub price: String,

    /// Unix seconds
    pub timestamp: u64,

    /// Transaction hash (0x-prefixed)
    pub tx_hash: String,
}

impl Trade {
    /// Case-insensitive match against a wallet address.
    pub fn is_by(&self, address: &str) -> bool {
        self.trader.eq_ignore_ascii_case(address.trim())
    }
}

impl From<RawTrade> for Trade {
    fn from(raw: RawTrade) -> Self {
        Self {
            trader: raw.trader.to_checksum(None),
            outcome: raw.outcome,
            shares: raw.shares.to_string(),
            price: raw.price.to_string(),
            timestamp: raw.timestamp.saturating_to::<u64>(),
            tx_hash: format!("{:?}", raw.tx_hash),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, B256, U256};

    fn raw_trade() -> RawTrade {
        RawTrade {
            trader: address!("0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            outcome: 1,
            shares: U256::from(250u64),
            price: U256::from(6100u64),
            timestamp: U256::from(1_700_000_000u64),
            tx_hash: B256::repeat_byte(0xab),
        }
    }

    #[test]
    fn test_conversion_from_raw() {
        let trade = Trade::from(raw_trade());

        assert_eq!(trade.trader, "0x5FbDB2315678afecb367f032d93F642f64180aa3");
        assert_eq!(trade.shares, "250");
        assert_eq!(trade.price, "6100");
        assert_eq!(trade.timestamp, 1_700_000_000);
        assert_eq!(trade.tx_hash, format!("0x{}", "ab".repeat(32)));
    }

    #[test]
    fn test_address_match_ignores_case() {
        let trade = Trade::from(raw_trade());

        assert!(trade.is_by("0x5fbdb2315678afecb367f032d93f642f64180aa3"));
        assert!(trade.is_by("0X5FBDB2315678AFECB367F032D93F642F64180AA3"));
        assert!(!trade.is_by("0x0000000000000000000000000000000000000001"));
    }

    #[test]
    fn test_oversized_timestamp_saturates() {
        let mut raw = raw_trade();
        raw.timestamp = U256::MAX;
        assert_eq!(Trade::from(raw).timestamp, u64::MAX);
    }
}
