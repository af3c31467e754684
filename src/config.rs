//! Configuration for reaching the market contract.

use serde::{Deserialize, Serialize};

use crate::chain::BSC_TESTNET;

pub const CLIENT_ID_ENV: &str = "THIRDWEB_CLIENT_ID";
pub const CONTRACT_ADDRESS_ENV: &str = "MARKET_CONTRACT_ADDRESS";
pub const RPC_URL_ENV: &str = "MARKET_RPC_URL";
pub const FALLBACK_RPC_URL_ENV: &str = "MARKET_FALLBACK_RPC_URL";

/// Settings needed to build a [`MarketContract`](crate::chain::MarketContract).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Application identifier used to scope the default RPC endpoint.
    /// Empty means only the configured or public endpoints are used.
    pub client_id: String,

    /// Deployed market contract (0x-prefixed). Required when the handle is built.
    pub contract_address: Option<String>,

    /// Explicit primary RPC endpoint, replacing the client-scoped default
    pub rpc_url: Option<String>,

    /// Public endpoint tried after the primary one
    pub fallback_rpc_url: String,
}

impl MarketConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            client_id: std::env::var(CLIENT_ID_ENV).unwrap_or_default(),
            contract_address: non_empty_var(CONTRACT_ADDRESS_ENV),
            rpc_url: non_empty_var(RPC_URL_ENV),
            fallback_rpc_url: non_empty_var(FALLBACK_RPC_URL_ENV)
                .unwrap_or_else(|| BSC_TESTNET.fallback_rpc.to_string()),
        }
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            contract_address: None,
            rpc_url: None,
            fallback_rpc_url: BSC_TESTNET.fallback_rpc.to_string(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_public_fallback() {
        let config = MarketConfig::default();
        assert!(config.client_id.is_empty());
        assert!(config.contract_address.is_none());
        assert_eq!(config.fallback_rpc_url, "https://bsc-testnet-rpc.publicnode.com");
    }

    #[test]
    fn test_from_env_defaults_and_blank_values() {
        std::env::set_var(CLIENT_ID_ENV, "");
        std::env::set_var(CONTRACT_ADDRESS_ENV, "   ");
        std::env::remove_var(RPC_URL_ENV);
        std::env::remove_var(FALLBACK_RPC_URL_ENV);

        let config = MarketConfig::from_env();
        assert_eq!(config.client_id, "");
        assert!(config.contract_address.is_none());
        assert!(config.rpc_url.is_none());
        assert_eq!(config.fallback_rpc_url, BSC_TESTNET.fallback_rpc);

        std::env::set_var(CONTRACT_ADDRESS_ENV, " 0x5FbDB2315678afecb367f032d93F642f64180aa3 ");
        std::env::set_var(RPC_URL_ENV, "http://localhost:8545");

        let config = MarketConfig::from_env();
        assert_eq!(
            config.contract_address.as_deref(),
            Some("0x5FbDB2315678afecb367f032d93F642f64180aa3")
        );
        assert_eq!(config.rpc_url.as_deref(), Some("http://localhost:8545"));

        std::env::remove_var(CLIENT_ID_ENV);
        std::env::remove_var(CONTRACT_ADDRESS_ENV);
        std::env::remove_var(RPC_URL_ENV);
    }
}
