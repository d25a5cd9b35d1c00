// vault-core/src/crypto/mnemonic.rs
//
// Seed Phrase Service - BIP-39 generation, validation and seed derivation
// Standard: BIP-39 (Mnemonic), PBKDF2-HMAC-SHA512 (Seed Derivation)

use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::{Language, Mnemonic};
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Length of a BIP-39 seed in bytes.
pub const SEED_LEN: usize = 64;

/// BIP-39 seed, wiped from memory on drop.
pub type Seed = Zeroizing<[u8; SEED_LEN]>;

/// Supported mnemonic lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            12 => Some(WordCount::Twelve),
            15 => Some(WordCount::Fifteen),
            18 => Some(WordCount::Eighteen),
            21 => Some(WordCount::TwentyOne),
            24 => Some(WordCount::TwentyFour),
            _ => None,
        }
    }
}

/// Wallet Mnemonic
///
/// Owns a validated, whitespace-normalized English BIP-39 phrase.
///
/// # Security
/// - **ZeroizeOnDrop**: the phrase is overwritten when the struct is dropped
/// - **CSPRNG**: entropy comes from `OsRng`; a failing OS source is an error, never a fallback
/// - **No Debug Leak**: `Debug` prints the word count only
///
/// Every constructor validates word count, wordlist membership and checksum, so a
/// `WalletMnemonic` value always yields a seed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
}

impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for WalletMnemonic {
    fn eq(&self, other: &Self) -> bool {
        self.phrase == other.phrase
    }
}

impl Eq for WalletMnemonic {}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Generate a fresh 12-word mnemonic (128-bit entropy).
    pub fn generate() -> WalletResult<Self> {
        Self::generate_with(WordCount::Twelve)
    }

    /// Generate a mnemonic with the given number of words.
    ///
    /// # Errors
    /// [`MnemonicError::EntropyUnavailable`] when the OS random source cannot be read.
    pub fn generate_with(word_count: WordCount) -> WalletResult<Self> {
        let entropy_size = word_count.entropy_bytes();

        let mut entropy = [0u8; 32];
        let filled = OsRng.try_fill_bytes(&mut entropy[..entropy_size]);
        if let Err(e) = filled {
            entropy.zeroize();
            return Err(WalletError::Mnemonic(MnemonicError::EntropyUnavailable(
                e.to_string(),
            )));
        }

        let mnemonic = Mnemonic::from_entropy(&entropy[..entropy_size]);
        entropy.zeroize();

        let mnemonic =
            mnemonic.map_err(|e| WalletError::Mnemonic(MnemonicError::Bip39Error(e.to_string())))?;

        Ok(Self {
            phrase: mnemonic.to_string(),
            word_count: word_count as usize,
        })
    }

    /// Restore a mnemonic from a user-supplied phrase.
    ///
    /// # Validation
    /// - word count (12, 15, 18, 21, 24)
    /// - every word in the English wordlist
    /// - checksum
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let words = phrase.split_whitespace().collect::<Vec<_>>();
        let count = words.len();

        if WordCount::from_count(count).is_none() {
            return Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(count)));
        }

        let normalized = words.join(" ");
        Self::parse(&normalized).map_err(|e| Self::map_bip39_error(e, &words))?;

        Ok(Self {
            phrase: normalized,
            word_count: count,
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// The phrase as plain text. Masking is up to the display layer.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    pub fn strength_bits(&self) -> usize {
        WordCount::from_count(self.word_count)
            .map(|wc| wc.entropy_bytes() * 8)
            .unwrap_or(0)
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// 64-byte BIP-39 seed (PBKDF2-HMAC-SHA512, 2048 rounds).
    ///
    /// `passphrase` is the optional BIP-39 passphrase; `None` is the empty string.
    pub fn to_seed(&self, passphrase: Option<&str>) -> WalletResult<Seed> {
        let mnemonic = Self::parse(&self.phrase)
            .map_err(|e| WalletError::Mnemonic(MnemonicError::Bip39Error(e.to_string())))?;
        Ok(Zeroizing::new(mnemonic.to_seed(passphrase.unwrap_or(""))))
    }

    /// Validate a phrase and derive its seed in one step.
    pub fn phrase_to_seed(phrase: &str, passphrase: Option<&str>) -> WalletResult<Seed> {
        Self::from_phrase(phrase)?.to_seed(passphrase)
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    #[inline]
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }

    /// Whether `word` is in the English BIP-39 wordlist.
    pub fn is_valid_word(word: &str) -> bool {
        Language::English.find_word(word).is_some()
    }

    fn parse(phrase: &str) -> Result<Mnemonic, bip39::Error> {
        Mnemonic::parse_in(Language::English, phrase)
    }

    fn map_bip39_error(err: bip39::Error, words: &[&str]) -> WalletError {
        let mapped = match err {
            bip39::Error::BadWordCount(n) => MnemonicError::InvalidWordCount(n),
            bip39::Error::UnknownWord(idx) => MnemonicError::UnknownWord(
                words.get(idx).map(|w| w.to_string()).unwrap_or_default(),
            ),
            bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
            other => MnemonicError::Bip39Error(other.to_string()),
        };
        WalletError::Mnemonic(mapped)
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
