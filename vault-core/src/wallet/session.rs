// vault-core/src/wallet/session.rs
//
// Wallet Session - one mnemonic, an append-only list of derived wallets
//
// - Wallets are keyed by (chain, account index); indices grow 0, 1, 2, ... per chain
// - Balance fetches run as tokio tasks, each with its own CancellationToken
//   (child of the current batch token, itself a child of the session token)
// - A failed fetch marks only its own wallet `Unknown`
// - Dropping the session cancels every pending fetch and airdrop
//
// Locks are never held across `.await`.

use super::engine::DerivationEngine;
use super::keypair::WalletKeypair;
use crate::chains::Chain;
use crate::config::VaultConfig;
use crate::crypto::{Seed, WalletMnemonic};
use crate::error::{NetworkError, WalletError, WalletResult};
use crate::network::{build_client, Balance, ChainClient};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

// =============================================================================
// RECORD TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WalletId {
    pub chain: Chain,
    pub account_index: u32,
}

impl WalletId {
    pub const fn new(chain: Chain, account_index: u32) -> Self {
        Self {
            chain,
            account_index,
        }
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.chain, self.account_index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceState {
    /// Never fetched, or a fetch is in flight
    Pending,
    Known(Balance),
    /// Last fetch failed or was cancelled
    Unknown { reason: String },
}

impl BalanceState {
    pub fn balance(&self) -> Option<&Balance> {
        match self {
            BalanceState::Known(b) => Some(b),
            _ => None,
        }
    }
}

/// Snapshot of one wallet in the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletRecord {
    pub id: WalletId,
    pub keypair: WalletKeypair,
    pub balance: BalanceState,
    pub show_private_key: bool,
}

impl WalletRecord {
    /// Private key when revealed, a fixed mask otherwise.
    pub fn displayed_private_key(&self) -> &str {
        if self.show_private_key {
            self.keypair.private_key()
        } else {
            "••••••••••••••••••••••••••••••••"
        }
    }
}

struct Entry {
    record: WalletRecord,
    fetch: Option<CancellationToken>,
    // Bumped per refresh; stale tasks must not overwrite a newer result
    generation: u64,
}

// =============================================================================
// SESSION
// =============================================================================

pub struct WalletSession {
    mnemonic: WalletMnemonic,
    seed: Seed,
    entries: Arc<RwLock<Vec<Entry>>>,
    clients: HashMap<Chain, Arc<dyn ChainClient>>,
    shutdown: CancellationToken,
    batch: Mutex<CancellationToken>,
}

impl fmt::Debug for WalletSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletSession")
            .field("mnemonic", &self.mnemonic)
            .field("wallets", &self.entries.read().len())
            .field("clients", &self.clients.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl WalletSession {
    /// Session over an existing mnemonic, with no chain clients attached.
    pub fn new(mnemonic: WalletMnemonic, passphrase: Option<&str>) -> WalletResult<Self> {
        let seed = mnemonic.to_seed(passphrase)?;
        let shutdown = CancellationToken::new();
        let batch = Mutex::new(shutdown.child_token());
        Ok(Self {
            mnemonic,
            seed,
            entries: Arc::new(RwLock::new(Vec::new())),
            clients: HashMap::new(),
            shutdown,
            batch,
        })
    }

    /// Session over a freshly generated 12-word mnemonic.
    pub fn generate() -> WalletResult<Self> {
        Self::new(WalletMnemonic::generate()?, None)
    }

    pub fn from_phrase(phrase: &str, passphrase: Option<&str>) -> WalletResult<Self> {
        Self::new(WalletMnemonic::from_phrase(phrase)?, passphrase)
    }

    /// Attach `client` for the chain it reports; replaces any previous one.
    pub fn with_client(mut self, client: Arc<dyn ChainClient>) -> Self {
        self.set_client(client);
        self
    }

    /// Attach one RPC client per chain built from `config`.
    pub fn with_config(mut self, config: &VaultConfig) -> WalletResult<Self> {
        let options = config.client_options();
        for chain in Chain::ALL {
            self.set_client(build_client(config.network(chain).clone(), &options)?);
        }
        Ok(self)
    }

    pub fn set_client(&mut self, client: Arc<dyn ChainClient>) {
        let chain = client.network_info().chain;
        self.clients.insert(chain, client);
    }

    pub fn client(&self, chain: Chain) -> Option<&Arc<dyn ChainClient>> {
        self.clients.get(&chain)
    }

    pub fn mnemonic(&self) -> &WalletMnemonic {
        &self.mnemonic
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    // =========================================================================
    // WALLETS
    // =========================================================================

    /// Derive and append the next wallet for `chain`.
    pub fn add_wallet(&self, chain: Chain) -> WalletResult<WalletRecord> {
        let mut entries = self.entries.write();
        let account_index = entries
            .iter()
            .filter(|e| e.record.id.chain == chain)
            .count() as u32;
        let keypair = DerivationEngine::derive(&*self.seed, chain, account_index)?;
        let record = WalletRecord {
            id: WalletId::new(chain, account_index),
            keypair,
            balance: BalanceState::Pending,
            show_private_key: false,
        };
        entries.push(Entry {
            record: record.clone(),
            fetch: None,
            generation: 0,
        });
        info!(
            wallet = %record.id,
            address = %record.keypair.short_public_id(),
            "wallet added"
        );
        Ok(record)
    }

    /// Flip private-key visibility; returns the new state.
    pub fn toggle_private_key(&self, id: WalletId) -> Option<bool> {
        let mut entries = self.entries.write();
        let entry = entries.iter_mut().find(|e| e.record.id == id)?;
        entry.record.show_private_key = !entry.record.show_private_key;
        Some(entry.record.show_private_key)
    }

    pub fn record(&self, id: WalletId) -> Option<WalletRecord> {
        self.entries
            .read()
            .iter()
            .find(|e| e.record.id == id)
            .map(|e| e.record.clone())
    }

    /// All wallets in creation order.
    pub fn records(&self) -> Vec<WalletRecord> {
        self.entries.read().iter().map(|e| e.record.clone()).collect()
    }

    /// Wallets of one chain, by account index.
    pub fn wallets(&self, chain: Chain) -> Vec<WalletRecord> {
        self.entries
            .read()
            .iter()
            .filter(|e| e.record.id.chain == chain)
            .map(|e| e.record.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    // =========================================================================
    // NETWORK
    // =========================================================================

    fn require_client(&self, chain: Chain) -> WalletResult<Arc<dyn ChainClient>> {
        self.clients.get(&chain).cloned().ok_or_else(|| {
            WalletError::Config(format!("No client configured for {}", chain))
        })
    }

    fn unknown_wallet(id: WalletId) -> WalletError {
        WalletError::Validation(format!("Unknown wallet {}", id))
    }

    /// Start a balance fetch for `id` on the current tokio runtime.
    ///
    /// The record goes to `Pending` immediately. The task resolves to the state it
    /// stored; a newer refresh of the same wallet cancels this one.
    pub fn refresh_balance(&self, id: WalletId) -> WalletResult<JoinHandle<BalanceState>> {
        let client = self.require_client(id.chain)?;
        let batch = self.batch.lock().clone();

        let (address, token, generation) = {
            let mut entries = self.entries.write();
            let entry = entries
                .iter_mut()
                .find(|e| e.record.id == id)
                .ok_or_else(|| Self::unknown_wallet(id))?;
            if let Some(previous) = entry.fetch.take() {
                previous.cancel();
            }
            let token = batch.child_token();
            entry.fetch = Some(token.clone());
            entry.generation += 1;
            entry.record.balance = BalanceState::Pending;
            (
                entry.record.keypair.public_id().to_string(),
                token,
                entry.generation,
            )
        };

        let entries = Arc::clone(&self.entries);
        Ok(tokio::spawn(async move {
            let state = tokio::select! {
                _ = token.cancelled() => BalanceState::Unknown {
                    reason: NetworkError::Cancelled.to_string(),
                },
                result = client.get_balance(&address) => match result {
                    Ok(balance) => {
                        debug!(wallet = %id, %balance, "balance fetched");
                        BalanceState::Known(balance)
                    }
                    Err(e) => {
                        warn!(wallet = %id, error = %e, "balance fetch failed");
                        BalanceState::Unknown { reason: e.to_string() }
                    }
                },
            };

            let mut entries = entries.write();
            if let Some(entry) = entries
                .iter_mut()
                .find(|e| e.record.id == id && e.generation == generation)
            {
                entry.record.balance = state.clone();
                entry.fetch = None;
            }
            state
        }))
    }

    /// Refresh every wallet whose chain has a client.
    pub fn refresh_all(&self) -> Vec<(WalletId, JoinHandle<BalanceState>)> {
        let ids: Vec<WalletId> = self.entries.read().iter().map(|e| e.record.id).collect();
        ids.into_iter()
            .filter(|id| self.clients.contains_key(&id.chain))
            .filter_map(|id| self.refresh_balance(id).ok().map(|h| (id, h)))
            .collect()
    }

    /// Request `amount` whole native tokens from the chain's faucet, then refresh
    /// the wallet's balance. Returns the funding transaction signature.
    pub async fn request_test_funds(&self, id: WalletId, amount: f64) -> WalletResult<String> {
        let client = self.require_client(id.chain)?;
        let amount_raw = client.network_info().to_base_units(amount).ok_or_else(|| {
            WalletError::Validation(format!("Invalid faucet amount {} for {}", amount, id.chain))
        })?;
        let address = self
            .record(id)
            .ok_or_else(|| Self::unknown_wallet(id))?
            .keypair
            .public_id()
            .to_string();
        let token = self.batch.lock().child_token();

        let result = tokio::select! {
            _ = token.cancelled() => Err(WalletError::Network(NetworkError::Cancelled)),
            result = client.request_test_funds(&address, amount_raw) => result,
        };

        match result {
            Ok(signature) => {
                info!(wallet = %id, amount, %signature, "test funds received");
                // Best effort; the airdrop itself already succeeded
                let _ = self.refresh_balance(id);
                Ok(signature)
            }
            Err(e) => {
                warn!(wallet = %id, error = %e, "test funds request failed");
                Err(e)
            }
        }
    }

    /// Cancel every pending fetch and airdrop. The session stays usable.
    pub fn cancel_all(&self) {
        let mut batch = self.batch.lock();
        batch.cancel();
        *batch = self.shutdown.child_token();
        debug!("pending wallet requests cancelled");
    }
}

impl Drop for WalletSession {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
