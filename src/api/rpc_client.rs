//! JSON-RPC implementation of [`MarketReader`] backed by alloy.
//!
//! Each read walks the handle's endpoint list in order. Transport failures
//! and non-revert JSON-RPC error responses move on to the next endpoint; a
//! revert or an undecodable response is returned as-is.

use std::future::Future;

use alloy_primitives::{Address, U256};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_sol_types::sol;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::chain::MarketContract;
use crate::error::ReadError;
use crate::models::Outcome;

use super::reader::MarketReader;
use super::types::{RawAnalytics, RawMarketDetails, RawPoolInfo, RawPosition, RawTrade};

sol! {
    #[sol(rpc)]
    interface IMarket {
        struct Trade {
            address trader;
            uint8 outcome;
            uint256 shares;
            uint256 price;
            uint256 timestamp;
            bytes32 txHash;
        }

        function getAllMarketIds() external view returns (uint64[] memory);

        function getMarketDetails(uint64 marketId) external view returns (
            uint64 id,
            string memory title,
            string memory description,
            uint64 endTime,
            bool resolved,
            uint8 outcome,
            uint8 tier,
            uint256 tvl,
            address creator,
            address oracle
        );

        function calculateOutcomePrice(uint64 marketId, uint8 outcome) external view returns (uint256);

        function getMarketPoolInfo(uint64 marketId) external view returns (
            uint256 yesReserve,
            uint256 noReserve,
            uint256 totalLpTokens,
            uint256 totalYesShares,
            uint256 totalNoShares,
            uint256 globalYesAllocation,
            uint256 globalNoAllocation
        );

        function getUserPosition(address user, uint64 marketId) external view returns (
            uint64,
            uint8,
            uint256,
            uint256,
            uint256
        );

        function getLatestTrades(uint64 marketId, uint256 limit) external view returns (Trade[] memory);

        function getMarketAnalytics(uint64 marketId) external view returns (
            uint256 totalVolume,
            uint256 totalTrades,
            uint256 totalFees,
            uint256 last24hVolume,
            uint256 uniqueTraderCount,
            uint256 liquidityVolume
        );

        function marketCreationFee() external view returns (uint256);
    }
}

type MarketInstance = IMarket::IMarketInstance<DynProvider>;

/// Reads the market contract over HTTP JSON-RPC.
pub struct RpcMarketReader {
    endpoints: Vec<(Url, MarketInstance)>,
}

impl RpcMarketReader {
    /// Create a reader for the given handle. No requests are sent until a read.
    pub fn new(contract: &MarketContract) -> Self {
        let endpoints = contract
            .endpoints()
            .iter()
            .map(|url| {
                let provider = ProviderBuilder::new().connect_http(url.clone()).erased();
                (url.clone(), IMarket::new(contract.address(), provider))
            })
            .collect();

        Self { endpoints }
    }

    async fn read<T, F, Fut>(&self, method: &'static str, call: F) -> Result<T, ReadError>
    where
        T: Send,
        F: Fn(MarketInstance) -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, alloy_contract::Error>> + Send,
    {
        first_available(method, &self.endpoints, call).await
    }
}

/// Run `call` against each endpoint in turn until one answers.
///
/// Returns the first result that is not a transport failure, or the last
/// transport failure once every endpoint has been tried.
async fn first_available<I, T, F, Fut>(
    method: &'static str,
    endpoints: &[(Url, I)],
    call: F,
) -> Result<T, ReadError>
where
    I: Clone + Sync,
    T: Send,
    F: Fn(I) -> Fut + Send + Sync,
    Fut: Future<Output = Result<T, alloy_contract::Error>> + Send,
{
    let mut last_error = None;

    for (endpoint, instance) in endpoints {
        debug!(method, endpoint = %endpoint, "Issuing contract read");

        match call(instance.clone()).await {
            Ok(value) => return Ok(value),
            Err(e) => {
                let err = classify(method, e);
                if !err.is_transport() {
                    return Err(err);
                }
                debug!(method, endpoint = %endpoint, error = %err, "Endpoint unavailable");
                last_error = Some(err);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| ReadError::Transport {
        method,
        reason: "no RPC endpoints configured".to_string(),
    }))
}

/// Only an execution revert is final. Any other JSON-RPC error response
/// (rate limit, internal error, rejected credentials) counts as the endpoint
/// being unavailable.
fn classify(method: &'static str, err: alloy_contract::Error) -> ReadError {
    match err {
        alloy_contract::Error::TransportError(e) => {
            let reverted = e.as_error_resp().is_some_and(|payload| {
                payload.as_revert_data().is_some()
                    || payload.code == 3
                    || payload.message.to_lowercase().contains("revert")
            });
            if reverted {
                ReadError::Reverted {
                    method,
                    reason: e.to_string(),
                }
            } else {
                ReadError::Transport {
                    method,
                    reason: e.to_string(),
                }
            }
        }
        other => ReadError::Decode {
            method,
            reason: other.to_string(),
        },
    }
}

#[async_trait]
impl MarketReader for RpcMarketReader {
    async fn all_market_ids(&self) -> Result<Vec<u64>, ReadError> {
        self.read("getAllMarketIds", |m| async move {
            m.getAllMarketIds().call().await
        })
        .await
    }

    async fn market_details(&self, market_id: u64) -> Result<RawMarketDetails, ReadError> {
        let r = self
            .read("getMarketDetails", |m| async move {
                m.getMarketDetails(market_id).call().await
            })
            .await?;

        Ok(RawMarketDetails {
            id: r.id,
            title: r.title,
            description: r.description,
            end_time: r.endTime,
            resolved: r.resolved,
            outcome: r.outcome,
            tier: r.tier,
            tvl: r.tvl,
            creator: r.creator,
            oracle: r.oracle,
        })
    }

    async fn outcome_price(&self, market_id: u64, outcome: Outcome) -> Result<U256, ReadError> {
        let code = outcome.code();
        self.read("calculateOutcomePrice", |m| async move {
            m.calculateOutcomePrice(market_id, code).call().await
        })
        .await
    }

    async fn pool_info(&self, market_id: u64) -> Result<RawPoolInfo, ReadError> {
        let r = self
            .read("getMarketPoolInfo", |m| async move {
                m.getMarketPoolInfo(market_id).call().await
            })
            .await?;

        Ok(RawPoolInfo {
            yes_reserve: r.yesReserve,
            no_reserve: r.noReserve,
            total_lp_tokens: r.totalLpTokens,
            total_yes_shares: r.totalYesShares,
            total_no_shares: r.totalNoShares,
            global_yes_allocation: r.globalYesAllocation,
            global_no_allocation: r.globalNoAllocation,
        })
    }

    async fn user_position(
        &self,
        user: Address,
        market_id: u64,
    ) -> Result<RawPosition, ReadError> {
        let r = self
            .read("getUserPosition", |m| async move {
                m.getUserPosition(user, market_id).call().await
            })
            .await?;

        Ok(RawPosition {
            market_id: r._0,
            outcome: r._1,
            shares: r._2,
            avg_price: r._3,
            timestamp: r._4,
        })
    }

    async fn latest_trades(&self, market_id: u64, limit: u64) -> Result<Vec<RawTrade>, ReadError> {
        let trades = self
            .read("getLatestTrades", |m| async move {
                m.getLatestTrades(market_id, U256::from(limit)).call().await
            })
            .await?;

        Ok(trades
            .into_iter()
            .map(|t| RawTrade {
                trader: t.trader,
                outcome: t.outcome,
                shares: t.shares,
                price: t.price,
                timestamp: t.timestamp,
                tx_hash: t.txHash,
            })
            .collect())
    }

    async fn analytics(&self, market_id: u64) -> Result<RawAnalytics, ReadError> {
        let r = self
            .read("getMarketAnalytics", |m| async move {
                m.getMarketAnalytics(market_id).call().await
            })
            .await?;

        Ok(RawAnalytics {
            total_volume: r.totalVolume,
            total_trades: r.totalTrades,
            total_fees: r.totalFees,
            last_24h_volume: r.last24hVolume,
            unique_trader_count: r.uniqueTraderCount,
            liquidity_volume: r.liquidityVolume,
        })
    }

    async fn market_creation_fee(&self) -> Result<U256, ReadError> {
        self.read("marketCreationFee", |m| async move {
            m.marketCreationFee().call().await
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::config::MarketConfig;
    use alloy_json_rpc::ErrorPayload;
    use alloy_sol_types::SolCall;
    use alloy_transport::{RpcError, TransportErrorKind};

    #[test]
    fn test_selectors_match_abi_signatures() {
        assert_eq!(IMarket::getAllMarketIdsCall::SIGNATURE, "getAllMarketIds()");
        assert_eq!(
            IMarket::calculateOutcomePriceCall::SIGNATURE,
            "calculateOutcomePrice(uint64,uint8)"
        );
        assert_eq!(
            IMarket::getUserPositionCall::SIGNATURE,
            "getUserPosition(address,uint64)"
        );
        assert_eq!(
            IMarket::getLatestTradesCall::SIGNATURE,
            "getLatestTrades(uint64,uint256)"
        );
    }

    #[test]
    fn test_reader_builds_one_instance_per_endpoint() {
        let config = MarketConfig {
            client_id: "abc".to_string(),
            contract_address: Some("0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string()),
            ..MarketConfig::default()
        };
        let contract = MarketContract::from_config(&config).unwrap();
        let reader = RpcMarketReader::new(&contract);

        assert_eq!(reader.endpoints.len(), 2);
    }

    fn endpoints() -> Vec<(Url, usize)> {
        vec![
            (Url::parse("https://97.rpc.thirdweb.com/abc").unwrap(), 0),
            (Url::parse("https://bsc-testnet-rpc.publicnode.com").unwrap(), 1),
        ]
    }

    fn down(reason: &'static str) -> alloy_contract::Error {
        alloy_contract::Error::TransportError(TransportErrorKind::custom_str(reason))
    }

    fn error_response(code: i64, message: &'static str) -> alloy_contract::Error {
        alloy_contract::Error::TransportError(RpcError::ErrorResp(ErrorPayload {
            code,
            message: message.into(),
            data: None,
        }))
    }

    /// Scripted endpoint calls: pops one response per call and records
    /// which endpoint was asked.
    struct Script {
        responses: Mutex<Vec<Result<u64, alloy_contract::Error>>>,
        called: Mutex<Vec<usize>>,
    }

    impl Script {
        fn new(mut responses: Vec<Result<u64, alloy_contract::Error>>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                called: Mutex::new(Vec::new()),
            }
        }

        async fn run(&self) -> Result<u64, ReadError> {
            first_available("getAllMarketIds", &endpoints(), |index| {
                self.called.lock().unwrap().push(index);
                let response = self.responses.lock().unwrap().pop().expect("scripted response");
                async move { response }
            })
            .await
        }

        fn called(&self) -> Vec<usize> {
            self.called.lock().unwrap().clone()
        }
    }

    #[tokio::test]
    async fn test_transport_error_falls_back_to_next_endpoint() {
        let script = Script::new(vec![Err(down("connection refused")), Ok(7)]);

        assert_eq!(script.run().await, Ok(7));
        assert_eq!(script.called(), vec![0, 1]);
    }

    #[tokio::test]
    async fn test_revert_stops_at_first_endpoint() {
        let script = Script::new(vec![Err(error_response(3, "execution reverted: no market"))]);

        let err = script.run().await.unwrap_err();
        assert!(matches!(err, ReadError::Reverted { method: "getAllMarketIds", .. }));
        assert_eq!(script.called(), vec![0]);
    }

    #[tokio::test]
    async fn test_reverted_message_without_code_is_final() {
        let script = Script::new(vec![Err(error_response(-32000, "execution reverted"))]);

        let err = script.run().await.unwrap_err();
        assert!(matches!(err, ReadError::Reverted { .. }));
        assert_eq!(script.called(), vec![0]);
    }

    #[tokio::test]
    async fn test_rate_limited_response_falls_back() {
        let script = Script::new(vec![Err(error_response(-32005, "rate limited")), Ok(7)]);

        assert_eq!(script.run().await, Ok(7));
        assert_eq!(script.called(), vec![0, 1]);
    }

    #[tokio::test]
    async fn test_internal_error_response_falls_back() {
        let script = Script::new(vec![Err(error_response(-32603, "internal error")), Ok(3)]);

        assert_eq!(script.run().await, Ok(3));
        assert_eq!(script.called(), vec![0, 1]);
    }

    #[tokio::test]
    async fn test_all_endpoints_down_returns_last_error() {
        let script = Script::new(vec![Err(down("first down")), Err(down("second down"))]);

        let err = script.run().await.unwrap_err();
        assert!(err.is_transport());
        match err {
            ReadError::Transport { reason, .. } => assert!(reason.contains("second down")),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(script.called(), vec![0, 1]);
    }

    #[tokio::test]
    async fn test_no_endpoints_is_transport_error() {
        let none: Vec<(Url, usize)> = Vec::new();
        let result = first_available("marketCreationFee", &none, |_| async { Ok(1u64) }).await;

        assert!(matches!(
            result,
            Err(ReadError::Transport { method: "marketCreationFee", .. })
        ));
    }
}
