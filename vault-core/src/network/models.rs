// vault-core/src/network/models.rs
//
// Chain-agnostic data models shared by every ChainClient
//
// - Serialize/Deserialize friendly (TOML config, JSON output)
// - No chain-specific numeric types: balances travel as decimal strings

use crate::chains::Chain;
use serde::{Deserialize, Serialize};

// =============================================================================
// NETWORK
// =============================================================================

/// One blockchain network endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NetworkInfo {
    pub chain: Chain,
    /// Display name (e.g., "Solana Devnet")
    pub name: String,
    /// JSON-RPC endpoint
    pub rpc_url: String,
    /// Native token symbol (e.g., "SOL", "ETH")
    pub native_symbol: String,
    pub native_decimals: u8,
    /// Explorer address URL with `{}` where the address goes
    #[serde(default)]
    pub explorer_url: Option<String>,
    #[serde(default)]
    pub is_testnet: bool,
}

impl NetworkInfo {
    pub fn solana_devnet() -> Self {
        Self {
            chain: Chain::Solana,
            name: "Solana Devnet".to_string(),
            rpc_url: "https://api.devnet.solana.com".to_string(),
            native_symbol: "SOL".to_string(),
            native_decimals: 9,
            explorer_url: Some("https://explorer.solana.com/address/{}?cluster=devnet".to_string()),
            is_testnet: true,
        }
    }

    pub fn solana_mainnet() -> Self {
        Self {
            chain: Chain::Solana,
            name: "Solana Mainnet".to_string(),
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            native_symbol: "SOL".to_string(),
            native_decimals: 9,
            explorer_url: Some("https://explorer.solana.com/address/{}".to_string()),
            is_testnet: false,
        }
    }

    pub fn ethereum_mainnet() -> Self {
        Self {
            chain: Chain::Ethereum,
            name: "Ethereum Mainnet".to_string(),
            rpc_url: "https://eth.llamarpc.com".to_string(),
            native_symbol: "ETH".to_string(),
            native_decimals: 18,
            explorer_url: Some("https://etherscan.io/address/{}".to_string()),
            is_testnet: false,
        }
    }

    pub fn ethereum_sepolia() -> Self {
        Self {
            chain: Chain::Ethereum,
            name: "Ethereum Sepolia".to_string(),
            rpc_url: "https://ethereum-sepolia-rpc.publicnode.com".to_string(),
            native_symbol: "ETH".to_string(),
            native_decimals: 18,
            explorer_url: Some("https://sepolia.etherscan.io/address/{}".to_string()),
            is_testnet: true,
        }
    }

    /// Whole-token `amount` in base units (`1.5` SOL -> 1_500_000_000 lamports).
    ///
    /// `None` for negative, non-finite or amounts that do not fit in a `u64`.
    pub fn to_base_units(&self, amount: f64) -> Option<u64> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let raw = (amount * 10f64.powi(i32::from(self.native_decimals))).round();
        if raw >= u64::MAX as f64 {
            return None;
        }
        Some(raw as u64)
    }

    /// Explorer link for `address`, if the network has an explorer.
    pub fn explorer_address_url(&self, address: &str) -> Option<String> {
        self.explorer_url
            .as_ref()
            .map(|template| template.replace("{}", address))
    }
}

// =============================================================================
// BALANCE
// =============================================================================

/// Native balance (chain-agnostic)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Raw integer amount in base units (lamports, wei) as a decimal string
    pub raw: String,
    /// Human-readable amount (e.g., "1.5")
    pub formatted: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Balance {
    pub fn new(raw: impl Into<String>, decimals: u8, symbol: impl Into<String>) -> Self {
        let raw_str = raw.into();
        let formatted = Self::format_balance(&raw_str, decimals);
        Self {
            raw: raw_str,
            formatted,
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Human amount padded/truncated to `places` fractional digits ("0.500000 SOL" style).
    pub fn display_fixed(&self, places: usize) -> String {
        let (int_part, frac_part) = match self.formatted.split_once('.') {
            Some((i, f)) => (i, f),
            None => (self.formatted.as_str(), ""),
        };
        let mut frac: String = frac_part.chars().take(places).collect();
        while frac.len() < places {
            frac.push('0');
        }
        if places == 0 {
            format!("{} {}", int_part, self.symbol)
        } else {
            format!("{}.{} {}", int_part, frac, self.symbol)
        }
    }

    /// Shift the decimal point of a raw integer string left by `decimals`.
    /// Anything that is not a plain digit string is passed through untouched.
    fn format_balance(raw: &str, decimals: u8) -> String {
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return raw.to_string();
        }
        let raw = raw.trim_start_matches('0');
        if raw.is_empty() {
            return "0".to_string();
        }
        if decimals == 0 {
            return raw.to_string();
        }

        let raw_len = raw.len();
        let decimals_usize = decimals as usize;

        if raw_len <= decimals_usize {
            // Below 1 (e.g., 0.001)
            let padding = decimals_usize - raw_len;
            let decimal_part = format!("{}{}", "0".repeat(padding), raw);
            let trimmed = decimal_part.trim_end_matches('0');
            if trimmed.is_empty() {
                "0".to_string()
            } else {
                format!("0.{}", trimmed)
            }
        } else {
            let integer_part = &raw[..raw_len - decimals_usize];
            let decimal_part = &raw[raw_len - decimals_usize..];
            let trimmed_decimal = decimal_part.trim_end_matches('0');
            if trimmed_decimal.is_empty() {
                integer_part.to_string()
            } else {
                format!("{}.{}", integer_part, trimmed_decimal)
            }
        }
    }
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.formatted, self.symbol)
    }
}
