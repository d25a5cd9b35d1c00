// vault-core/src/network/evm.rs
//
// EVM JSON-RPC client: eth_getBalance only. Plain RPC endpoints expose no faucet.

use super::models::{Balance, NetworkInfo};
use super::rpc::JsonRpcClient;
use super::traits::ChainClient;
use super::ClientOptions;
use crate::chains::evm::EvmAddress;
use crate::error::{NetworkError, WalletError, WalletResult};
use alloy_primitives::U256;
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

pub struct EvmRpcClient {
    info: NetworkInfo,
    rpc: JsonRpcClient,
}

impl EvmRpcClient {
    pub fn new(info: NetworkInfo, options: &ClientOptions) -> WalletResult<Self> {
        let rpc = JsonRpcClient::new(info.rpc_url.clone(), options.request_timeout)?;
        Ok(Self { info, rpc })
    }

    /// Balance in wei at the latest block.
    pub async fn get_wei(&self, address: &str) -> WalletResult<U256> {
        if !EvmAddress::is_valid(address) {
            return Err(WalletError::Validation(format!(
                "Invalid EVM address: {}",
                address
            )));
        }
        let hex: String = self
            .rpc
            .request("eth_getBalance", json!([address, "latest"]))
            .await?;
        parse_quantity(&hex)
    }
}

/// Decode a JSON-RPC hex quantity ("0x1bc16d674ec80000").
fn parse_quantity(hex: &str) -> WalletResult<U256> {
    let digits = hex
        .strip_prefix("0x")
        .ok_or_else(|| invalid_quantity(hex))?;
    if digits.is_empty() {
        return Err(invalid_quantity(hex));
    }
    U256::from_str_radix(digits, 16).map_err(|_| invalid_quantity(hex))
}

fn invalid_quantity(hex: &str) -> WalletError {
    WalletError::Network(NetworkError::InvalidResponse(format!(
        "Invalid hex quantity: {}",
        hex
    )))
}

#[async_trait]
impl ChainClient for EvmRpcClient {
    fn network_info(&self) -> &NetworkInfo {
        &self.info
    }

    fn validate_address(&self, address: &str) -> bool {
        EvmAddress::is_valid(address)
    }

    async fn get_balance(&self, address: &str) -> WalletResult<Balance> {
        let wei = self.get_wei(address).await?;
        debug!(address, %wei, "evm balance");
        Ok(Balance::new(
            wei.to_string(),
            self.info.native_decimals,
            self.info.native_symbol.clone(),
        ))
    }

    async fn request_test_funds(&self, _address: &str, _amount_raw: u64) -> WalletResult<String> {
        Err(WalletError::Network(NetworkError::Faucet(format!(
            "{} RPC has no faucet",
            self.info.name
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ADDRESS: &str = "0x9858EfFD232B4033E47d90003D41EC34EcaEda94";

    fn client(server: &MockServer) -> EvmRpcClient {
        let mut info = NetworkInfo::ethereum_mainnet();
        info.rpc_url = server.uri();
        let options = ClientOptions {
            request_timeout: Duration::from_secs(5),
            ..ClientOptions::default()
        };
        EvmRpcClient::new(info, &options).unwrap()
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0x0").unwrap(), U256::ZERO);
        assert_eq!(
            parse_quantity("0x1bc16d674ec80000").unwrap(),
            U256::from(2_000_000_000_000_000_000u64)
        );
        assert!(parse_quantity("1234").is_err());
        assert!(parse_quantity("0x").is_err());
        assert!(parse_quantity("0xzz").is_err());
    }

    #[tokio::test]
    async fn test_get_balance() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "method": "eth_getBalance",
                "params": [ADDRESS, "latest"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "result": "0x1111d67bb1bb0000",
                "id": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let balance = client(&server).get_balance(ADDRESS).await.unwrap();
        assert_eq!(balance.raw, "1230000000000000000");
        assert_eq!(balance.to_string(), "1.23 ETH");
    }

    #[tokio::test]
    async fn test_malformed_quantity() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "result": "lots",
                "id": 1
            })))
            .mount(&server)
            .await;

        let err = client(&server).get_balance(ADDRESS).await.unwrap_err();
        assert!(matches!(
            err,
            WalletError::Network(NetworkError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_no_faucet() {
        let server = MockServer::start().await;
        let err = client(&server)
            .request_test_funds(ADDRESS, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::Network(NetworkError::Faucet(_))));
    }

    #[tokio::test]
    async fn test_invalid_address() {
        let server = MockServer::start().await;
        let err = client(&server).get_balance("0x1234").await.unwrap_err();
        assert!(matches!(err, WalletError::Validation(_)));
    }
}
