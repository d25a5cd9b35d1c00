//! Wallet session against mocked RPC endpoints.

use serde_json::json;
use std::time::Duration;
use vault_core::error::NetworkError;
use vault_core::network::{build_client, ClientOptions};
use vault_core::{BalanceState, Chain, NetworkInfo, VaultConfig, WalletError, WalletSession};
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ABANDON: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn rpc_ok(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"jsonrpc": "2.0", "result": result, "id": 1}))
}

fn config_for(solana: &MockServer, ethereum: &MockServer) -> VaultConfig {
    let mut config = VaultConfig::default();
    config.solana.rpc_url = solana.uri();
    config.ethereum.rpc_url = ethereum.uri();
    config.request_timeout_secs = 5;
    config.confirm_timeout_secs = 2;
    config.confirm_poll_interval_ms = 20;
    config
}

#[tokio::test]
async fn one_chain_down_leaves_the_other_intact() {
    let solana = MockServer::start().await;
    let ethereum = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&solana)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "eth_getBalance"})))
        .respond_with(rpc_ok(json!("0xde0b6b3a7640000")))
        .mount(&ethereum)
        .await;

    let session = WalletSession::from_phrase(ABANDON, None)
        .unwrap()
        .with_config(&config_for(&solana, &ethereum))
        .unwrap();
    let sol = session.add_wallet(Chain::Solana).unwrap();
    let eth = session.add_wallet(Chain::Ethereum).unwrap();

    for (_, handle) in session.refresh_all() {
        handle.await.unwrap();
    }

    match session.record(sol.id).unwrap().balance {
        BalanceState::Unknown { reason } => assert!(reason.contains("502"), "{reason}"),
        other => panic!("expected Unknown, got {other:?}"),
    }
    let eth_balance = session.record(eth.id).unwrap().balance;
    assert_eq!(eth_balance.balance().unwrap().to_string(), "1 ETH");

    // The failing chain still derives new wallets
    assert_eq!(session.add_wallet(Chain::Solana).unwrap().id.account_index, 1);
}

#[tokio::test]
async fn airdrop_then_balance_refresh() {
    let solana = MockServer::start().await;
    let ethereum = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "requestAirdrop"})))
        .respond_with(rpc_ok(json!("airdrop-signature")))
        .expect(1)
        .mount(&solana)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "getSignatureStatuses"})))
        .respond_with(rpc_ok(json!({
            "context": {"slot": 10},
            "value": [{"slot": 10, "err": null, "confirmationStatus": "finalized"}]
        })))
        .mount(&solana)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "getBalance"})))
        .respond_with(rpc_ok(json!({"context": {"slot": 10}, "value": 500_000_000u64})))
        .mount(&solana)
        .await;

    let session = WalletSession::from_phrase(ABANDON, None)
        .unwrap()
        .with_config(&config_for(&solana, &ethereum))
        .unwrap();
    let wallet = session.add_wallet(Chain::Solana).unwrap();

    let signature = session.request_test_funds(wallet.id, 0.5).await.unwrap();
    assert_eq!(signature, "airdrop-signature");

    let state = session.refresh_balance(wallet.id).unwrap().await.unwrap();
    assert_eq!(state.balance().unwrap().display_fixed(6), "0.500000 SOL");
}

#[tokio::test]
async fn ethereum_has_no_faucet() {
    let ethereum = MockServer::start().await;
    let client = build_client(
        NetworkInfo {
            rpc_url: ethereum.uri(),
            ..NetworkInfo::ethereum_sepolia()
        },
        &ClientOptions::default(),
    )
    .unwrap();
    let err = client
        .request_test_funds("0x9858EfFD232B4033E47d90003D41EC34EcaEda94", 1)
        .await
        .unwrap_err();
    assert!(matches!(err, WalletError::Network(NetworkError::Faucet(_))));
}

#[tokio::test]
async fn dropping_the_session_cancels_slow_fetches() {
    let solana = MockServer::start().await;
    let ethereum = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            rpc_ok(json!({"context": {"slot": 1}, "value": 1u64})).set_delay(Duration::from_secs(3)),
        )
        .mount(&solana)
        .await;

    let session = WalletSession::from_phrase(ABANDON, None)
        .unwrap()
        .with_config(&config_for(&solana, &ethereum))
        .unwrap();
    let wallet = session.add_wallet(Chain::Solana).unwrap();
    let handle = session.refresh_balance(wallet.id).unwrap();
    drop(session);

    let state = tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("fetch should stop once the session is gone")
        .unwrap();
    assert_eq!(
        state,
        BalanceState::Unknown {
            reason: NetworkError::Cancelled.to_string()
        }
    );
}
