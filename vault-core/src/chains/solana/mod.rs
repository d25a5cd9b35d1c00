// vault-core/src/chains/solana/mod.rs

//! Solana Chain Support
//!
//! Keys come from SLIP-0010 ed25519 derivation (all segments hardened) and are
//! exposed as [`SolanaKeypair`]: base58 public key, 64-byte secret.

pub mod keypair;

pub use keypair::SolanaKeypair;
