// vault-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation - SLIP-0010 Standard
//
// Used for: Solana
// Algorithm: HMAC-SHA512 (unlike BIP-32, hardened derivation only)
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// SLIP-0010 for ed25519 supports ONLY hardened child derivation.
// Every level in the path MUST be hardened.
// e.g. m/44'/501'/0'/0' (OK)    m/44'/501'/0'/0 (INVALID)

use crate::crypto::paths::HARDENED_OFFSET;
use crate::error::{CryptoError, WalletError, WalletResult};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

/// Private key + chain code pair produced at each derivation level
type Node = ([u8; 32], [u8; 32]);

/// Ed25519 Key Deriver - SLIP-0010 Standard
///
/// # Differences from secp256k1 (BIP-32)
/// - Master key secret: "ed25519 seed" (instead of "Bitcoin seed")
/// - Hardened derivation only (index >= 2^31)
/// - Any 32 bytes are a valid ed25519 secret, no range check needed
///
/// # Security
/// - Intermediate keys and chain codes are zeroized as soon as they are replaced
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    /// SLIP-0010 master key secret
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Derive a single ed25519 secret key from seed + path
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed
    /// * `path` - Derivation path, all levels hardened, e.g. "m/44'/501'/0'/0'"
    ///
    /// # Returns
    /// 32-byte ed25519 secret key, zeroized on drop
    pub fn derive(seed: &[u8], path: &str) -> WalletResult<Zeroizing<[u8; 32]>> {
        let (key, mut chain_code) = Self::derive_node(seed, path)?;
        chain_code.zeroize();
        Ok(Zeroizing::new(key))
    }

    /// Walk the full path and return the final (key, chain code).
    fn derive_node(seed: &[u8], path: &str) -> WalletResult<Node> {
        let indices = Self::parse_path(path)?;

        // I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
        let (mut key, mut chain_code) = Self::hmac_split(Self::MASTER_SECRET, &[seed])?;

        // I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || ser32(index'))
        for index in indices {
            let hardened = (index | HARDENED_OFFSET).to_be_bytes();
            let (child_key, child_chain) =
                Self::hmac_split(&chain_code, &[&[0x00u8][..], &key[..], &hardened[..]])?;
            key.zeroize();
            chain_code.zeroize();
            key = child_key;
            chain_code = child_chain;
        }

        Ok((key, chain_code))
    }

    /// HMAC-SHA512 over the concatenated `parts`, split into IL / IR.
    fn hmac_split(mac_key: &[u8], parts: &[&[u8]]) -> WalletResult<Node> {
        let mut mac = HmacSha512::new_from_slice(mac_key).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "HMAC init failed: {}",
                e
            )))
        })?;
        for part in parts {
            mac.update(part);
        }
        let result = mac.finalize().into_bytes();

        let mut buf = [0u8; 64];
        buf.copy_from_slice(&result);

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&buf[..32]);
        chain_code.copy_from_slice(&buf[32..]);
        buf.zeroize();

        Ok((key, chain_code))
    }

    /// Parse a derivation path into unhardened indices
    ///
    /// Input: "m/44'/501'/0'/0'"
    /// Output: [44, 501, 0, 0]
    fn parse_path(path: &str) -> WalletResult<Vec<u32>> {
        let path = path.trim();

        let segments = path.strip_prefix("m/").ok_or_else(|| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Path must start with 'm/': {}",
                path
            )))
        })?;

        let mut indices = Vec::new();
        for segment in segments.split('/') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            let num_str = segment
                .strip_suffix('\'')
                .or_else(|| segment.strip_suffix('h'))
                .ok_or_else(|| {
                    WalletError::Crypto(CryptoError::DerivationFailed(format!(
                        "Ed25519 SLIP-0010 requires ALL levels to be hardened (add '). Invalid segment: '{}'",
                        segment
                    )))
                })?;

            let index: u32 = num_str.parse().map_err(|e| {
                WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Invalid index '{}': {}",
                    num_str, e
                )))
            })?;
            if index >= HARDENED_OFFSET {
                return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Index {} out of range for hardened derivation",
                    index
                ))));
            }

            indices.push(index);
        }

        if indices.is_empty() {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(
                "Empty derivation path".to_string(),
            )));
        }

        Ok(indices)
    }
}

// =============================================================================
// TESTS
// =============================================================================
