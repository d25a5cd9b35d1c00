// vault-core/src/network/solana.rs
//
// Solana JSON-RPC client
//
// - getBalance           -> lamports at `confirmed` commitment
// - requestAirdrop       -> devnet/testnet faucet, then poll getSignatureStatuses
//                           until the signature reaches `confirmed` or `finalized`

use super::models::{Balance, NetworkInfo};
use super::rpc::JsonRpcClient;
use super::traits::ChainClient;
use super::ClientOptions;
use crate::error::{NetworkError, WalletError, WalletResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

const COMMITMENT: &str = "confirmed";

#[derive(Debug, Deserialize)]
struct WithContext<T> {
    value: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignatureStatus {
    #[serde(default)]
    err: Option<serde_json::Value>,
    #[serde(default)]
    confirmation_status: Option<String>,
}

impl SignatureStatus {
    fn is_confirmed(&self) -> bool {
        matches!(
            self.confirmation_status.as_deref(),
            Some("confirmed") | Some("finalized")
        )
    }
}

pub struct SolanaRpcClient {
    info: NetworkInfo,
    rpc: JsonRpcClient,
    confirm_timeout: Duration,
    poll_interval: Duration,
}

impl SolanaRpcClient {
    pub fn new(info: NetworkInfo, options: &ClientOptions) -> WalletResult<Self> {
        let rpc = JsonRpcClient::new(info.rpc_url.clone(), options.request_timeout)?;
        Ok(Self {
            info,
            rpc,
            confirm_timeout: options.confirm_timeout,
            poll_interval: options.poll_interval,
        })
    }

    /// True when `address` is base58 of exactly 32 bytes.
    pub fn is_valid_address(address: &str) -> bool {
        matches!(bs58::decode(address).into_vec(), Ok(bytes) if bytes.len() == 32)
    }

    fn ensure_address(&self, address: &str) -> WalletResult<()> {
        if Self::is_valid_address(address) {
            Ok(())
        } else {
            Err(WalletError::Validation(format!(
                "Invalid Solana address: {}",
                address
            )))
        }
    }

    /// Balance in lamports.
    pub async fn get_lamports(&self, address: &str) -> WalletResult<u64> {
        self.ensure_address(address)?;
        let resp: WithContext<u64> = self
            .rpc
            .request("getBalance", json!([address, { "commitment": COMMITMENT }]))
            .await?;
        Ok(resp.value)
    }

    async fn signature_status(&self, signature: &str) -> WalletResult<Option<SignatureStatus>> {
        let resp: WithContext<Vec<Option<SignatureStatus>>> = self
            .rpc
            .request(
                "getSignatureStatuses",
                json!([[signature], { "searchTransactionHistory": true }]),
            )
            .await?;
        Ok(resp.value.into_iter().next().flatten())
    }

    /// Poll until `signature` is confirmed, failed or the confirm timeout passes.
    pub async fn confirm_signature(&self, signature: &str) -> WalletResult<()> {
        let deadline = Instant::now() + self.confirm_timeout;
        loop {
            if let Some(status) = self.signature_status(signature).await? {
                if let Some(err) = status.err {
                    return Err(WalletError::Network(NetworkError::Faucet(format!(
                        "Transaction {} failed: {}",
                        signature, err
                    ))));
                }
                if status.is_confirmed() {
                    return Ok(());
                }
            }
            if Instant::now() + self.poll_interval > deadline {
                return Err(WalletError::Network(NetworkError::Timeout(
                    self.confirm_timeout.as_secs(),
                )));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

#[async_trait]
impl ChainClient for SolanaRpcClient {
    fn network_info(&self) -> &NetworkInfo {
        &self.info
    }

    fn validate_address(&self, address: &str) -> bool {
        Self::is_valid_address(address)
    }

    async fn get_balance(&self, address: &str) -> WalletResult<Balance> {
        let lamports = self.get_lamports(address).await?;
        debug!(address, lamports, "solana balance");
        Ok(Balance::new(
            lamports.to_string(),
            self.info.native_decimals,
            self.info.native_symbol.clone(),
        ))
    }

    async fn request_test_funds(&self, address: &str, amount_raw: u64) -> WalletResult<String> {
        if !self.info.is_testnet {
            return Err(WalletError::Network(NetworkError::Faucet(format!(
                "{} has no faucet",
                self.info.name
            ))));
        }
        self.ensure_address(address)?;

        let signature: String = self
            .rpc
            .request("requestAirdrop", json!([address, amount_raw]))
            .await
            .map_err(|e| match e {
                WalletError::Network(NetworkError::Rpc { message, .. }) => {
                    WalletError::Network(NetworkError::Faucet(message))
                }
                other => other,
            })?;
        debug!(address, %signature, "airdrop submitted");

        self.confirm_signature(&signature).await?;
        info!(address, lamports = amount_raw, %signature, "airdrop confirmed");
        Ok(signature)
    }
}
