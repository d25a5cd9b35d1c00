// vault-core/src/wallet/engine.rs
//
// Derivation Engine - (seed, chain, account index) -> wallet keypair
//
//   Solana   : m/44'/501'/{account}'/0'   SLIP-0010 ed25519, hardened only
//   Ethereum : m/44'/60'/{account}'/0/0   BIP-32 secp256k1, hardened then plain
//
// Pure functions: the same inputs always yield the same keypair, so any wallet
// can be rebuilt from the mnemonic alone.

use super::keypair::WalletKeypair;
use crate::chains::evm::EvmKeypair;
use crate::chains::solana::SolanaKeypair;
use crate::chains::Chain;
use crate::crypto::key_deriver::KeyDeriver;
use crate::crypto::paths::DerivationPaths;
use crate::error::WalletResult;
use std::ops::Range;
use tracing::debug;

/// Stateless; safe to call from any number of threads at once.
pub struct DerivationEngine;

impl DerivationEngine {
    /// Derive the wallet for `account` on `chain`.
    pub fn derive(seed: &[u8], chain: Chain, account: u32) -> WalletResult<WalletKeypair> {
        match chain {
            Chain::Solana => Self::derive_solana(seed, account),
            Chain::Ethereum => Self::derive_ethereum(seed, account),
        }
    }

    /// Solana wallet at `m/44'/501'/{account}'/0'`.
    pub fn derive_solana(seed: &[u8], account: u32) -> WalletResult<WalletKeypair> {
        let (path, kp) = Self::solana_keypair(seed, account)?;
        Ok(WalletKeypair::from_solana(account, path, &kp))
    }

    /// Ethereum wallet at `m/44'/60'/{account}'/0/0`.
    pub fn derive_ethereum(seed: &[u8], account: u32) -> WalletResult<WalletKeypair> {
        let (path, kp) = Self::ethereum_keypair(seed, account)?;
        Ok(WalletKeypair::from_evm(account, path, &kp))
    }

    /// Native Solana keypair plus the path it came from.
    pub fn solana_keypair(seed: &[u8], account: u32) -> WalletResult<(String, SolanaKeypair)> {
        let account = DerivationPaths::check_account(account)?;
        let path = Chain::Solana.account_path(account);
        let derived = KeyDeriver::derive(seed, &path, Chain::Solana.curve())?;
        let kp = SolanaKeypair::from_seed(&derived.private_key);
        debug!(chain = %Chain::Solana, account, %path, "derived wallet");
        Ok((path, kp))
    }

    /// Native Ethereum keypair plus the path it came from.
    pub fn ethereum_keypair(seed: &[u8], account: u32) -> WalletResult<(String, EvmKeypair)> {
        let account = DerivationPaths::check_account(account)?;
        let path = Chain::Ethereum.account_path(account);
        let derived = KeyDeriver::derive(seed, &path, Chain::Ethereum.curve())?;
        let kp = EvmKeypair::from_private_key(derived.private_key)?;
        debug!(chain = %Chain::Ethereum, account, %path, "derived wallet");
        Ok((path, kp))
    }

    /// Derive a contiguous run of accounts.
    pub fn derive_range(
        seed: &[u8],
        chain: Chain,
        accounts: Range<u32>,
    ) -> WalletResult<Vec<WalletKeypair>> {
        accounts
            .map(|account| Self::derive(seed, chain, account))
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
