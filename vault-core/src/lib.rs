// vault-core/src/lib.rs

//! # vault-core
//!
//! BIP-39 mnemonic generation and deterministic HD wallet derivation for
//! Solana (SLIP-0010 ed25519) and Ethereum (BIP-32 secp256k1).
//!
//! ```no_run
//! use vault_core::{Chain, DerivationEngine, WalletMnemonic};
//!
//! # fn main() -> vault_core::WalletResult<()> {
//! let mnemonic = WalletMnemonic::generate()?;
//! let seed = mnemonic.to_seed(None)?;
//! let sol = DerivationEngine::derive(&*seed, Chain::Solana, 0)?;
//! let eth = DerivationEngine::derive(&*seed, Chain::Ethereum, 0)?;
//! println!("{} {}", sol.public_id(), eth.public_id());
//! # Ok(())
//! # }
//! ```
//!
//! Balances and devnet airdrops go through [`network::ChainClient`]; a
//! [`WalletSession`] ties one mnemonic to its derived wallets and their
//! balance state.

pub mod chains;
pub mod config;
pub mod crypto;
pub mod error;
pub mod network;
pub mod wallet;

pub use chains::Chain;
pub use config::VaultConfig;
pub use crypto::{Seed, WalletMnemonic, WordCount};
pub use error::{WalletError, WalletResult};
pub use network::{Balance, ChainClient, NetworkInfo};
pub use wallet::{BalanceState, DerivationEngine, WalletId, WalletKeypair, WalletRecord, WalletSession};
