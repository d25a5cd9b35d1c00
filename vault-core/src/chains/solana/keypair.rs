// vault-core/src/chains/solana/keypair.rs
//
// Solana Keypair - ed25519 signing key from a 32-byte SLIP-0010 secret
// Public identifier: base58(raw 32-byte public key)

use crate::error::{CryptoError, WalletError, WalletResult};
use ed25519_dalek::SigningKey;
use zeroize::Zeroizing;

/// Solana keypair
///
/// Secret layout matches the Solana CLI / web3.js `secretKey`: `secret (32B) || public (32B)`.
/// `SigningKey` zeroizes itself on drop.
pub struct SolanaKeypair {
    signing_key: SigningKey,
}

impl std::fmt::Debug for SolanaKeypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaKeypair")
            .field("pubkey", &self.pubkey())
            .finish_non_exhaustive()
    }
}

impl SolanaKeypair {
    /// Expand a 32-byte secret (the SLIP-0010 derived key) into a keypair.
    pub fn from_seed(secret: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(secret),
        }
    }

    /// Rebuild from the 64-byte `secret || public` form, checking the halves agree.
    pub fn from_keypair_bytes(bytes: &[u8]) -> WalletResult<Self> {
        let bytes: &[u8; 64] = bytes.try_into().map_err(|_| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Expected 64-byte keypair, got {} bytes",
                bytes.len()
            )))
        })?;
        let signing_key = SigningKey::from_keypair_bytes(bytes).map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(e.to_string()))
        })?;
        Ok(Self { signing_key })
    }

    pub fn pubkey_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Base58 public key, the Solana address.
    pub fn pubkey(&self) -> String {
        bs58::encode(self.pubkey_bytes()).into_string()
    }

    pub fn keypair_bytes(&self) -> Zeroizing<[u8; 64]> {
        Zeroizing::new(self.signing_key.to_keypair_bytes())
    }

    /// Hex of the 64-byte keypair.
    pub fn secret_key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&*self.keypair_bytes()))
    }

    /// Base58 of the 64-byte keypair, the format browser wallets import.
    pub fn secret_key_base58(&self) -> Zeroizing<String> {
        Zeroizing::new(bs58::encode(&*self.keypair_bytes()).into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8032 test 1
    const RFC8032_SECRET: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const RFC8032_PUBLIC: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

    fn rfc_secret() -> [u8; 32] {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&hex::decode(RFC8032_SECRET).unwrap());
        secret
    }

    #[test]
    fn test_public_key_from_seed() {
        let kp = SolanaKeypair::from_seed(&rfc_secret());
        assert_eq!(hex::encode(kp.pubkey_bytes()), RFC8032_PUBLIC);

        let decoded = bs58::decode(kp.pubkey()).into_vec().unwrap();
        assert_eq!(hex::encode(decoded), RFC8032_PUBLIC);
    }

    #[test]
    fn test_keypair_bytes_layout() {
        let kp = SolanaKeypair::from_seed(&rfc_secret());
        let hex_secret = kp.secret_key_hex();
        assert_eq!(hex_secret.len(), 128);
        assert_eq!(&hex_secret[..64], RFC8032_SECRET);
        assert_eq!(&hex_secret[64..], RFC8032_PUBLIC);
    }

    #[test]
    fn test_keypair_bytes_roundtrip() {
        let kp = SolanaKeypair::from_seed(&rfc_secret());
        let restored = SolanaKeypair::from_keypair_bytes(&*kp.keypair_bytes()).unwrap();
        assert_eq!(restored.pubkey(), kp.pubkey());

        let from_b58 = bs58::decode(kp.secret_key_base58().as_str()).into_vec().unwrap();
        assert_eq!(from_b58.as_slice(), &kp.keypair_bytes()[..]);
    }

    #[test]
    fn test_mismatched_keypair_rejected() {
        let kp = SolanaKeypair::from_seed(&rfc_secret());
        let mut bytes = *kp.keypair_bytes();
        bytes[63] ^= 0xff;
        assert!(SolanaKeypair::from_keypair_bytes(&bytes).is_err());
        assert!(SolanaKeypair::from_keypair_bytes(&bytes[..32]).is_err());
    }
}
