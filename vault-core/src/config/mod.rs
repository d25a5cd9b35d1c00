// vault-core/src/config/mod.rs

//! Vault configuration.
//!
//! RPC endpoints per chain plus network timeouts. Every field has a default,
//! so an empty TOML file is a valid config.

use crate::chains::Chain;
use crate::error::{WalletError, WalletResult};
use crate::network::{ClientOptions, NetworkInfo};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Solana network (default: devnet, where airdrops work)
    pub solana: NetworkInfo,
    /// Ethereum network (default: mainnet)
    pub ethereum: NetworkInfo,
    pub request_timeout_secs: u64,
    pub confirm_timeout_secs: u64,
    pub confirm_poll_interval_ms: u64,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            solana: NetworkInfo::solana_devnet(),
            ethereum: NetworkInfo::ethereum_mainnet(),
            request_timeout_secs: 30,
            confirm_timeout_secs: 60,
            confirm_poll_interval_ms: 1000,
        }
    }
}

impl VaultConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> WalletResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            WalletError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> WalletResult<Self> {
        let config: VaultConfig =
            toml::from_str(contents).map_err(|e| WalletError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> WalletResult<String> {
        toml::to_string_pretty(self).map_err(|e| WalletError::Config(e.to_string()))
    }

    /// Each network section must describe its own chain; timeouts must be non-zero.
    pub fn validate(&self) -> WalletResult<()> {
        if self.solana.chain != Chain::Solana {
            return Err(WalletError::Config(format!(
                "[solana] section has chain = \"{}\"",
                self.solana.chain
            )));
        }
        if self.ethereum.chain != Chain::Ethereum {
            return Err(WalletError::Config(format!(
                "[ethereum] section has chain = \"{}\"",
                self.ethereum.chain
            )));
        }
        if self.request_timeout_secs == 0
            || self.confirm_timeout_secs == 0
            || self.confirm_poll_interval_ms == 0
        {
            return Err(WalletError::Config("timeouts must be non-zero".to_string()));
        }
        Ok(())
    }

    pub fn network(&self, chain: Chain) -> &NetworkInfo {
        match chain {
            Chain::Solana => &self.solana,
            Chain::Ethereum => &self.ethereum,
        }
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            confirm_timeout: Duration::from_secs(self.confirm_timeout_secs),
            poll_interval: Duration::from_millis(self.confirm_poll_interval_ms),
        }
    }
}
