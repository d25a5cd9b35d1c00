// vault-core/src/network/mod.rs
//
// Network Module - one ChainClient per chain, built from config
//
// - traits: the ChainClient capability the wallet layer depends on
// - models: chain-agnostic NetworkInfo / Balance
// - rpc:    shared JSON-RPC transport
// - solana / evm: concrete clients

pub mod evm;
pub mod models;
pub mod rpc;
pub mod solana;
pub mod traits;

pub use evm::EvmRpcClient;
pub use models::*;
pub use solana::SolanaRpcClient;
pub use traits::*;

use crate::chains::Chain;
use crate::error::WalletResult;
use std::sync::Arc;
use std::time::Duration;

/// Timeouts shared by every client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    /// Per HTTP request
    pub request_timeout: Duration,
    /// Upper bound on waiting for an airdrop to confirm
    pub confirm_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            confirm_timeout: Duration::from_secs(60),
            poll_interval: Duration::from_millis(1000),
        }
    }
}

/// Build the client matching `info.chain`.
pub fn build_client(info: NetworkInfo, options: &ClientOptions) -> WalletResult<Arc<dyn ChainClient>> {
    let client: Arc<dyn ChainClient> = match info.chain {
        Chain::Solana => Arc::new(SolanaRpcClient::new(info, options)?),
        Chain::Ethereum => Arc::new(EvmRpcClient::new(info, options)?),
    };
    Ok(client)
}
