// vault-core/src/chains/mod.rs

//! Chain-specific key encodings.
//!
//! - [`evm`]: EIP-55 addresses from secp256k1 keys (Ethereum).
//! - [`solana`]: base58 ed25519 keypairs (Solana).

pub mod evm;
pub mod solana;

use crate::crypto::key_deriver::CurveType;
use crate::crypto::paths::{coin_type, DerivationPaths};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chains the derivation engine knows how to produce wallets for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// ed25519, all-hardened SLIP-0010 path
    Solana,
    /// secp256k1, BIP-44 path
    Ethereum,
}

impl Chain {
    pub const ALL: [Chain; 2] = [Chain::Solana, Chain::Ethereum];

    pub const fn coin_type(self) -> u32 {
        match self {
            Chain::Solana => coin_type::SOLANA,
            Chain::Ethereum => coin_type::ETHEREUM,
        }
    }

    pub const fn curve(self) -> CurveType {
        match self {
            Chain::Solana => CurveType::Ed25519,
            Chain::Ethereum => CurveType::Secp256k1,
        }
    }

    /// Canonical path for `account` on this chain.
    pub fn account_path(self, account: u32) -> String {
        match self {
            Chain::Solana => DerivationPaths::solana(account),
            Chain::Ethereum => DerivationPaths::evm_account(account),
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Chain::Solana => "SOL",
            Chain::Ethereum => "ETH",
        }
    }

    /// Shortened identifier for compact display (`abcd...wxyz` / `0x1234...wxyz`).
    pub fn short_address(self, address: &str) -> String {
        let head = match self {
            Chain::Solana => 4,
            Chain::Ethereum => 6,
        };
        let tail = 4;
        let len = address.chars().count();
        if len <= head + tail {
            return address.to_string();
        }
        let start: String = address.chars().take(head).collect();
        let end: String = address.chars().skip(len - tail).collect();
        format!("{}...{}", start, end)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chain::Solana => write!(f, "solana"),
            Chain::Ethereum => write!(f, "ethereum"),
        }
    }
}

impl std::str::FromStr for Chain {
    type Err = crate::error::WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "solana" | "sol" => Ok(Chain::Solana),
            "ethereum" | "eth" => Ok(Chain::Ethereum),
            other => Err(crate::error::WalletError::Validation(format!(
                "Unknown chain '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_paths() {
        assert_eq!(Chain::Solana.account_path(0), "m/44'/501'/0'/0'");
        assert_eq!(Chain::Ethereum.account_path(0), "m/44'/60'/0'/0/0");
        assert_eq!(Chain::Solana.account_path(5), "m/44'/501'/5'/0'");
        assert_eq!(Chain::Ethereum.account_path(5), "m/44'/60'/5'/0/0");
    }

    #[test]
    fn test_curves() {
        assert_eq!(Chain::Solana.curve(), CurveType::Ed25519);
        assert_eq!(Chain::Ethereum.curve(), CurveType::Secp256k1);
    }

    #[test]
    fn test_short_address() {
        assert_eq!(
            Chain::Ethereum.short_address("0x9858EfFD232B4033E47d90003D41EC34EcaEda94"),
            "0x9858...da94"
        );
        assert_eq!(
            Chain::Solana.short_address("HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk"),
            "HAgk...Kpqk"
        );
        assert_eq!(Chain::Solana.short_address("abc"), "abc");
        // counted in chars, never split inside a code point
        assert_eq!(Chain::Solana.short_address("aéééééééé"), "aééé...éééé");
        assert_eq!(Chain::Ethereum.short_address("ééééé"), "ééééé");
    }

    #[test]
    fn test_parse_chain() {
        assert_eq!("SOL".parse::<Chain>().unwrap(), Chain::Solana);
        assert_eq!("ethereum".parse::<Chain>().unwrap(), Chain::Ethereum);
        assert!("bitcoin".parse::<Chain>().is_err());
    }
}
