// vault-core/src/chains/evm/mod.rs

//! Ethereum Virtual Machine (EVM) Chain Support
//!
//! - **Address Derivation**: EIP-55 checksummed address generation via [`EvmAddress`].
//! - **Account Keys**: [`EvmKeypair`] pairs a derived secp256k1 key with its address.

pub mod address;
pub mod keypair;

pub use address::EvmAddress;
pub use keypair::EvmKeypair;
