// vault-core/src/network/traits.rs

// Chain client capability - the only way the wallet layer talks to a network.
//
// One client per chain, built once from config and shared as `Arc<dyn ChainClient>`.
// Derivation never depends on a client; callers treat every failure here as
// scoped to the one wallet that asked.

use crate::error::WalletResult;
use crate::network::models::{Balance, NetworkInfo};
use async_trait::async_trait;

/// ChainClient - read balances and request devnet funds
///
/// # Design
/// - **Async**: every network operation is a future the caller may drop to cancel
/// - **Chain-Agnostic**: addresses travel as the chain's display string
#[async_trait]
pub trait ChainClient: Send + Sync {
    fn network_info(&self) -> &NetworkInfo;

    /// Cheap local check, no network round-trip.
    fn validate_address(&self, address: &str) -> bool;

    /// Native balance of `address`
    ///
    /// # Errors
    /// `NetworkError` on transport, RPC or decoding failures.
    async fn get_balance(&self, address: &str) -> WalletResult<Balance>;

    /// Ask the network faucet for `amount_raw` base units (lamports, wei).
    ///
    /// Resolves once the funding transaction is confirmed and returns its signature.
    ///
    /// # Errors
    /// `NetworkError::Faucet` when the network has no faucet or the request is refused.
    async fn request_test_funds(&self, address: &str, amount_raw: u64) -> WalletResult<String>;
}
