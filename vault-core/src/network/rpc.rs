// vault-core/src/network/rpc.rs

//! Minimal JSON-RPC 2.0 transport over HTTP, shared by the Solana and EVM clients.

use crate::error::{NetworkError, WalletError, WalletResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::trace;

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: serde_json::Value,
    id: u64,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    #[serde(default = "Option::default")]
    result: Option<T>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// JSON-RPC client bound to one endpoint.
#[derive(Debug)]
pub struct JsonRpcClient {
    http: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl JsonRpcClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> WalletResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WalletError::Network(NetworkError::Request(e.to_string())))?;
        Ok(Self {
            http,
            url: url.into(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Call `method` and decode `result` as `T`.
    ///
    /// A JSON-RPC `error` object becomes [`NetworkError::Rpc`]; a missing or null
    /// `result` becomes [`NetworkError::InvalidResponse`].
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> WalletResult<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id,
        };
        trace!(url = %self.url, method, id, "rpc request");

        let resp = self.http.post(&self.url).json(&body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        let parsed: RpcResponse<T> = match serde_json::from_str(&text) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(WalletError::Network(NetworkError::Request(format!(
                    "HTTP {} from {}",
                    status, self.url
                ))));
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(err) = parsed.error {
            return Err(WalletError::Network(NetworkError::Rpc {
                code: err.code,
                message: err.message,
            }));
        }

        parsed.result.ok_or_else(|| {
            WalletError::Network(NetworkError::InvalidResponse(format!(
                "{} returned no result",
                method
            )))
        })
    }
}
