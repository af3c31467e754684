//! Network descriptor and the immutable handle to the deployed market contract.

use std::str::FromStr;

use alloy_primitives::Address;
use tracing::warn;
use url::Url;

use crate::config::MarketConfig;
use crate::error::ConfigError;

/// Target network with its public RPC endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    pub id: u64,
    pub name: &'static str,
    pub fallback_rpc: &'static str,
}

/// BNB Smart Chain testnet, where the market contract is deployed.
pub const BSC_TESTNET: Chain = Chain {
    id: 97,
    name: "BSC Testnet",
    fallback_rpc: "https://bsc-testnet-rpc.publicnode.com",
};

/// How to reach the market contract: address plus an ordered endpoint list.
///
/// Building a handle performs no network I/O. Endpoint failures only surface
/// when a read is attempted.
#[derive(Debug, Clone)]
pub struct MarketContract {
    chain: Chain,
    address: Address,
    endpoints: Vec<Url>,
}

impl MarketContract {
    /// Build the handle for the default chain.
    pub fn from_config(config: &MarketConfig) -> Result<Self, ConfigError> {
        Self::new(config, BSC_TESTNET)
    }

    /// Build the handle for a specific chain.
    pub fn new(config: &MarketConfig, chain: Chain) -> Result<Self, ConfigError> {
        let raw_address = config
            .contract_address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or(ConfigError::MissingContractAddress)?;

        let address = Address::from_str(raw_address).map_err(|_| ConfigError::InvalidAddress {
            field: "contract_address",
            value: raw_address.to_string(),
        })?;

        if config.client_id.is_empty() && config.rpc_url.is_none() {
            warn!("No client id configured, reads go straight to the fallback RPC");
        }

        let mut candidates = Vec::new();
        match &config.rpc_url {
            Some(url) => candidates.push(url.clone()),
            None if !config.client_id.is_empty() => {
                candidates.push(default_rpc_url(&chain, &config.client_id))
            }
            None => {}
        }
        candidates.push(config.fallback_rpc_url.clone());

        let mut endpoints: Vec<Url> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let url = Url::parse(&candidate).map_err(|e| ConfigError::InvalidRpcUrl {
                url: candidate.clone(),
                reason: e.to_string(),
            })?;
            if !endpoints.contains(&url) {
                endpoints.push(url);
            }
        }

        Ok(Self {
            chain,
            address,
            endpoints,
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Endpoints in the order reads should try them.
    pub fn endpoints(&self) -> &[Url] {
        &self.endpoints
    }
}

/// Client-scoped RPC gateway for a chain.
fn default_rpc_url(chain: &Chain, client_id: &str) -> String {
    format!("https://{}.rpc.thirdweb.com/{}", chain.id, client_id)
}
