// vault-core/src/chains/evm/keypair.rs

use super::address::EvmAddress;
use crate::error::WalletResult;
use zeroize::Zeroizing;

/// Derived Ethereum account: secp256k1 secret + cached EIP-55 address.
pub struct EvmKeypair {
    private_key: Zeroizing<[u8; 32]>,
    address: String,
}

// Never print the private key
impl std::fmt::Debug for EvmKeypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmKeypair")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl EvmKeypair {
    /// Build from a raw 32-byte secp256k1 secret, rejecting out-of-range scalars.
    pub fn from_private_key(private_key: Zeroizing<[u8; 32]>) -> WalletResult<Self> {
        let address = EvmAddress::derive(&*private_key)?;
        Ok(Self {
            private_key,
            address,
        })
    }

    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[inline]
    pub fn private_key_bytes(&self) -> &[u8; 32] {
        &self.private_key
    }

    /// `0x`-prefixed lowercase hex, the format wallets import.
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(format!("0x{}", hex::encode(&*self.private_key)))
    }
}
