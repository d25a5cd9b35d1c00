// vault-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Mnemonic Generation**: BIP-39 phrases (12–24 words) and seeds via [`WalletMnemonic`].
//! - **Key Derivation**: secp256k1 (Ethereum) and Ed25519 (Solana) via [`KeyDeriver`].
//! - **Derivation Paths**: per-chain account templates via [`DerivationPaths`].

pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

pub use key_deriver::{CurveType, DerivedKey, KeyDeriver};
pub use mnemonic::{Seed, WalletMnemonic, WordCount, SEED_LEN};
pub use paths::DerivationPaths;
