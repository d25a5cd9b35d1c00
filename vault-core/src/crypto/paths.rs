// vault-core/src/crypto/paths.rs
//
// Derivation Paths Module - HD account path templates
// BIP-44 (Purpose), SLIP-44 (Coin Types), SLIP-0010 (ed25519, hardened only)

use crate::error::{CryptoError, WalletError, WalletResult};

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const ETHEREUM: u32 = 60;
    pub const SOLANA: u32 = 501;
}

/// BIP-44 purpose field
pub const PURPOSE_BIP44: u32 = 44;

/// Offset applied to hardened child indices.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Largest account index that can still be hardened.
pub const MAX_ACCOUNT_INDEX: u32 = HARDENED_OFFSET - 1;

// =============================================================================
// DERIVATION PATHS
// =============================================================================
/// Account path templates
///
/// # Conventions
/// - Ethereum (BIP-44, secp256k1): `m/44'/60'/account'/0/0`
/// - Solana (SLIP-0010, ed25519): `m/44'/501'/account'/0'`, every level hardened
///
/// The account level is the only variable; the two chains keep independent counters.
pub struct DerivationPaths;

impl DerivationPaths {
    pub const EVM_0: &'static str = "m/44'/60'/0'/0/0";
    pub const SOLANA_0: &'static str = "m/44'/501'/0'/0'";

    /// Ethereum account path: `m/44'/60'/{account}'/0/0`
    #[inline]
    pub fn evm_account(account: u32) -> String {
        Self::bip44(PURPOSE_BIP44, coin_type::ETHEREUM, account, 0, 0)
    }

    /// Solana account path: `m/44'/501'/{account}'/0'`
    #[inline]
    pub fn solana(account: u32) -> String {
        Self::ed25519_path(coin_type::SOLANA, account, &[0])
    }

    /// BIP-44 path with hardened purpose/coin/account and plain change/index.
    #[inline]
    pub fn bip44(purpose: u32, coin_type: u32, account: u32, change: u32, index: u32) -> String {
        format!(
            "m/{}'/{}'/{}'/{}/{}",
            purpose, coin_type, account, change, index
        )
    }

    /// SLIP-0010 path for ed25519: every segment is forced hardened.
    ///
    /// - Solana: `ed25519_path(501, 0, &[0])` -> m/44'/501'/0'/0'
    pub fn ed25519_path(coin_type: u32, account: u32, sub_paths: &[u32]) -> String {
        let mut path = format!("m/{}'/{}'/{}'", PURPOSE_BIP44, coin_type, account);
        for &idx in sub_paths {
            path.push_str(&format!("/{}'", idx));
        }
        path
    }

    /// Reject account indices that would overflow into the hardened range.
    pub fn check_account(account: u32) -> WalletResult<u32> {
        if account > MAX_ACCOUNT_INDEX {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Account index {} exceeds hardened range (max {})",
                account, MAX_ACCOUNT_INDEX
            ))));
        }
        Ok(account)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evm_paths() {
        assert_eq!(DerivationPaths::evm_account(0), DerivationPaths::EVM_0);
        assert_eq!(DerivationPaths::evm_account(1), "m/44'/60'/1'/0/0");
        assert_eq!(DerivationPaths::evm_account(42), "m/44'/60'/42'/0/0");
    }

    #[test]
    fn test_solana_paths() {
        assert_eq!(DerivationPaths::solana(0), DerivationPaths::SOLANA_0);
        assert_eq!(DerivationPaths::solana(2), "m/44'/501'/2'/0'");
    }

    #[test]
    fn test_custom_builders() {
        assert_eq!(DerivationPaths::bip44(44, 60, 0, 0, 0), "m/44'/60'/0'/0/0");
        assert_eq!(DerivationPaths::ed25519_path(501, 3, &[0]), "m/44'/501'/3'/0'");
        assert_eq!(DerivationPaths::ed25519_path(501, 0, &[]), "m/44'/501'/0'");
    }

    #[test]
    fn test_paths_are_stable() {
        for account in [0, 1, 7, 1000, MAX_ACCOUNT_INDEX] {
            assert_eq!(DerivationPaths::solana(account), DerivationPaths::solana(account));
            assert_eq!(
                DerivationPaths::evm_account(account),
                DerivationPaths::evm_account(account)
            );
        }
    }

    #[test]
    fn test_check_account() {
        assert_eq!(DerivationPaths::check_account(0).unwrap(), 0);
        assert_eq!(
            DerivationPaths::check_account(MAX_ACCOUNT_INDEX).unwrap(),
            MAX_ACCOUNT_INDEX
        );
        assert!(DerivationPaths::check_account(HARDENED_OFFSET).is_err());
        assert!(DerivationPaths::check_account(u32::MAX).is_err());
    }
}
