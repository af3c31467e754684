//! Error types for contract binding and on-chain reads.

use thiserror::Error;

/// Errors raised while building the contract handle.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("market contract address is not configured (set MARKET_CONTRACT_ADDRESS)")]
    MissingContractAddress,

    #[error("invalid address for {field}: {value}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("invalid RPC url {url}: {reason}")]
    InvalidRpcUrl { url: String, reason: String },
}

/// Failure of a single contract view call.
///
/// The view layer collapses every variant into an empty result, but the kind
/// is kept so the binding can tell an unreachable endpoint from a reverted call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("{method}: transport failure: {reason}")]
    Transport { method: &'static str, reason: String },

    #[error("{method}: call reverted: {reason}")]
    Reverted { method: &'static str, reason: String },

    #[error("{method}: failed to decode response: {reason}")]
    Decode { method: &'static str, reason: String },

    #[error("{method}: invalid argument: {reason}")]
    InvalidArgument { method: &'static str, reason: String },
}

impl ReadError {
    /// Name of the contract method that failed.
    pub fn method(&self) -> &'static str {
        match self {
            ReadError::Transport { method, .. }
            | ReadError::Reverted { method, .. }
            | ReadError::Decode { method, .. }
            | ReadError::InvalidArgument { method, .. } => method,
        }
    }

    /// Whether another endpoint might succeed where this one failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, ReadError::Transport { .. })
    }
}
