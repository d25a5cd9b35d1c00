// vault-core/src/wallet/mod.rs

//! Wallet layer.
//!
//! - [`DerivationEngine`]: (seed, chain, account) -> [`WalletKeypair`], pure and stateless.
//! - [`WalletSession`]: caller-owned collection of derived wallets with balance state.

pub mod engine;
pub mod keypair;
pub mod session;

pub use engine::DerivationEngine;
pub use keypair::WalletKeypair;
pub use session::{BalanceState, WalletId, WalletRecord, WalletSession};
