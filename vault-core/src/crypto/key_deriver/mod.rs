// vault-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - Multi-Curve Support
//
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)           │
// │                    │                            │
// │     ┌──────────────┴──────────────┐             │
// │     ▼                             ▼             │
// │  secp256k1 (BIP-32)        ed25519 (SLIP-0010)  │
// │  └─ Ethereum               └─ Solana            │
// └─────────────────────────────────────────────────┘

pub mod ed25519;
pub mod secp256k1;

pub use ed25519::Ed25519Deriver;
pub use secp256k1::Secp256k1Deriver;

use crate::crypto::mnemonic::SEED_LEN;
use crate::error::{CryptoError, WalletError, WalletResult};
use zeroize::Zeroizing;

// =============================================================================
// COMMON TYPES
// =============================================================================
/// Curve type for key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveType {
    /// secp256k1 - Ethereum
    Secp256k1,
    /// Ed25519 - Solana
    Ed25519,
}

/// Raw derivation output: private key + metadata
pub struct DerivedKey {
    /// Private key bytes (32 bytes, zeroized on drop)
    pub private_key: Zeroizing<[u8; 32]>,
    pub curve: CurveType,
    /// Path the key was derived at
    pub path: String,
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("curve", &self.curve)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// UNIFIED DERIVER
// =============================================================================
/// Unified Key Deriver - entry point for raw key derivation on either curve
pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive a key for `path` on `curve`
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed (64 bytes)
    /// * `path` - Derivation path (e.g., "m/44'/60'/0'/0/0")
    /// * `curve` - Curve type
    pub fn derive(seed: &[u8], path: &str, curve: CurveType) -> WalletResult<DerivedKey> {
        Self::validate_seed(seed)?;

        let private_key = match curve {
            CurveType::Secp256k1 => Secp256k1Deriver::derive(seed, path)?,
            CurveType::Ed25519 => Ed25519Deriver::derive(seed, path)?,
        };

        Ok(DerivedKey {
            private_key,
            curve,
            path: path.to_string(),
        })
    }

    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if seed.len() != SEED_LEN {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid seed length: expected {} bytes, got {}",
                SEED_LEN,
                seed.len()
            ))));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
