//! Contract read access: the reader seam and its JSON-RPC implementation.

mod reader;
mod rpc_client;
mod types;

pub use reader::MarketReader;
pub use rpc_client::RpcMarketReader;
pub use types::*;
