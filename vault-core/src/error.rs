// vault-core/src/error.rs

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Network Error: {0}")]
    Network(#[from] NetworkError),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Validation Error: {0}")]
    Validation(String),
}

impl WalletError {
    /// True when the caller supplied a phrase that is not a valid BIP-39 mnemonic.
    pub fn is_invalid_mnemonic(&self) -> bool {
        matches!(
            self,
            WalletError::Mnemonic(
                MnemonicError::InvalidWordCount(_)
                    | MnemonicError::UnknownWord(_)
                    | MnemonicError::ChecksumFailed
                    | MnemonicError::Bip39Error(_)
            )
        )
    }

    /// Network and faucet failures are scoped to one wallet and never abort a session.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WalletError::Network(_)) || self.is_invalid_mnemonic()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Secure entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word '{0}' not found in the BIP39 wordlist.")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Faucet request failed: {0}")]
    Faucet(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Request cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for WalletError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            WalletError::Network(NetworkError::Request(format!("timeout: {}", e)))
        } else {
            WalletError::Network(NetworkError::Request(e.to_string()))
        }
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(e: serde_json::Error) -> Self {
        WalletError::Network(NetworkError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_mnemonic_classification() {
        let err = WalletError::Mnemonic(MnemonicError::ChecksumFailed);
        assert!(err.is_invalid_mnemonic());
        assert!(err.is_recoverable());

        let err = WalletError::Mnemonic(MnemonicError::EntropyUnavailable("no rng".into()));
        assert!(!err.is_invalid_mnemonic());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_derivation_failure_is_not_recoverable() {
        let err = WalletError::Crypto(CryptoError::DerivationFailed("bad seed".into()));
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("bad seed"));
    }

    #[test]
    fn test_network_errors_are_recoverable() {
        let err: WalletError = NetworkError::Faucet("rate limited".into()).into();
        assert!(err.is_recoverable());
        assert_eq!(
            err.to_string(),
            "Network Error: Faucet request failed: rate limited"
        );
    }
}
