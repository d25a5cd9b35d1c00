// vault-core/src/wallet/keypair.rs

use crate::chains::evm::EvmKeypair;
use crate::chains::solana::SolanaKeypair;
use crate::chains::Chain;
use zeroize::Zeroizing;

/// A derived wallet in its chain's native display encoding.
///
/// | chain    | `public_id`                  | `private_key`                     |
/// |----------|------------------------------|-----------------------------------|
/// | Solana   | base58 ed25519 public key    | hex of 64-byte `secret || public` |
/// | Ethereum | EIP-55 checksummed address   | `0x` hex of 32-byte secret        |
///
/// Immutable once created. `Debug` never prints the private key.
#[derive(Clone, PartialEq, Eq)]
pub struct WalletKeypair {
    chain: Chain,
    account_index: u32,
    path: String,
    public_id: String,
    private_key: Zeroizing<String>,
}

impl std::fmt::Debug for WalletKeypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletKeypair")
            .field("chain", &self.chain)
            .field("account_index", &self.account_index)
            .field("path", &self.path)
            .field("public_id", &self.public_id)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl WalletKeypair {
    pub(crate) fn from_solana(account_index: u32, path: String, kp: &SolanaKeypair) -> Self {
        Self {
            chain: Chain::Solana,
            account_index,
            path,
            public_id: kp.pubkey(),
            private_key: kp.secret_key_hex(),
        }
    }

    pub(crate) fn from_evm(account_index: u32, path: String, kp: &EvmKeypair) -> Self {
        Self {
            chain: Chain::Ethereum,
            account_index,
            path,
            public_id: kp.address().to_string(),
            private_key: kp.private_key_hex(),
        }
    }

    #[inline]
    pub fn chain(&self) -> Chain {
        self.chain
    }

    #[inline]
    pub fn account_index(&self) -> u32 {
        self.account_index
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Address / public key used for balance lookups and display.
    #[inline]
    pub fn public_id(&self) -> &str {
        &self.public_id
    }

    /// Plain-text private key. Masking is the caller's job.
    #[inline]
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    pub fn short_public_id(&self) -> String {
        self.chain.short_address(&self.public_id)
    }
}
