// vault-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation - BIP-32 / BIP-44
//
// Used for: Ethereum
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use crate::error::{CryptoError, WalletError, WalletResult};
use bip32::{DerivationPath, XPrv};
use std::str::FromStr;
use zeroize::Zeroizing;

/// secp256k1 Key Deriver - BIP-32 Standard
///
/// Hardened and non-hardened segments are both allowed, e.g. `m/44'/60'/0'/0/0`.
/// The returned key is wrapped in `Zeroizing<[u8; 32]>`.
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Derive single private key from seed + path
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed
    /// * `path` - Derivation path (e.g. "m/44'/60'/0'/0/0")
    pub fn derive(seed: &[u8], path: &str) -> WalletResult<Zeroizing<[u8; 32]>> {
        let root_xprv = XPrv::new(seed).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Failed to create master key: {}",
                e
            )))
        })?;

        let derivation_path = DerivationPath::from_str(path).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid path '{}': {}",
                path, e
            )))
        })?;

        let mut child = root_xprv;
        for child_num in derivation_path {
            child = child.derive_child(child_num).map_err(|e| {
                WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Child derivation failed: {}",
                    e
                )))
            })?;
        }

        let key_bytes: [u8; 32] = child.private_key().to_bytes().into();
        Ok(Zeroizing::new(key_bytes))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::paths::DerivationPaths;

    // Seed of "abandon ... about" with empty passphrase
    const ABANDON_SEED: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

    #[test]
    fn test_derive_evm_key_vector() {
        let seed = hex::decode(ABANDON_SEED).unwrap();
        let key = Secp256k1Deriver::derive(&seed, DerivationPaths::EVM_0).unwrap();
        assert_eq!(
            hex::encode(&*key),
            "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
        );
    }

    #[test]
    fn test_consistency() {
        let seed = hex::decode(ABANDON_SEED).unwrap();
        let k1 = Secp256k1Deriver::derive(&seed, DerivationPaths::EVM_0).unwrap();
        let k2 = Secp256k1Deriver::derive(&seed, DerivationPaths::EVM_0).unwrap();
        assert_eq!(&*k1, &*k2);
    }

    #[test]
    fn test_different_accounts_different_keys() {
        let seed = hex::decode(ABANDON_SEED).unwrap();
        let keys: Vec<_> = (0..4)
            .map(|account| {
                Secp256k1Deriver::derive(&seed, &DerivationPaths::evm_account(account)).unwrap()
            })
            .collect();
        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                assert_ne!(&*keys[i], &*keys[j], "Key {} and {} should differ", i, j);
            }
        }
    }

    #[test]
    fn test_invalid_path() {
        let seed = hex::decode(ABANDON_SEED).unwrap();
        assert!(Secp256k1Deriver::derive(&seed, "invalid").is_err());
    }
}
