//! vault - generate a mnemonic and derive Solana / Ethereum wallets from it.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vault_core::{
    BalanceState, Chain, VaultConfig, WalletId, WalletMnemonic, WalletRecord, WalletSession, WordCount,
};

#[derive(Parser)]
#[command(name = "vault")]
#[command(about = "BIP-39 mnemonic and HD wallet tool for Solana and Ethereum")]
#[command(version)]
struct Cli {
    /// TOML config with RPC endpoints and timeouts
    #[arg(short, long, global = true, env = "VAULT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a new mnemonic and print its first wallet per chain
    Generate {
        /// 12, 15, 18, 21 or 24
        #[arg(short, long, default_value = "12")]
        words: usize,
    },
    /// Derive wallets from an existing mnemonic
    Derive {
        #[arg(short, long, env = "VAULT_MNEMONIC", hide_env_values = true)]
        phrase: String,

        /// BIP-39 passphrase
        #[arg(long, env = "VAULT_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,

        /// Number of Solana accounts
        #[arg(long, default_value = "1")]
        solana: u32,

        /// Number of Ethereum accounts
        #[arg(long, default_value = "1")]
        ethereum: u32,

        /// Fetch balances over RPC
        #[arg(short, long)]
        balances: bool,

        /// Print private keys
        #[arg(long)]
        show_keys: bool,
    },
    /// Request a devnet SOL airdrop for one Solana account
    Airdrop {
        #[arg(short, long, env = "VAULT_MNEMONIC", hide_env_values = true)]
        phrase: String,

        #[arg(long, env = "VAULT_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,

        #[arg(long, default_value = "0")]
        account: u32,

        /// Amount in SOL
        #[arg(long, default_value = "1")]
        amount: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => VaultConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => VaultConfig::default(),
    };

    match cli.command {
        Command::Generate { words } => generate(words),
        Command::Derive {
            phrase,
            passphrase,
            solana,
            ethereum,
            balances,
            show_keys,
        } => {
            let session = WalletSession::from_phrase(&phrase, passphrase.as_deref())?;
            for _ in 0..solana {
                session.add_wallet(Chain::Solana)?;
            }
            for _ in 0..ethereum {
                session.add_wallet(Chain::Ethereum)?;
            }
            let session = if balances {
                let session = session.with_config(&config)?;
                for (_, handle) in session.refresh_all() {
                    handle.await?;
                }
                session
            } else {
                session
            };
            print_wallets(&session, &config, show_keys);
            Ok(())
        }
        Command::Airdrop {
            phrase,
            passphrase,
            account,
            amount,
        } => {
            if !config.solana.is_testnet {
                bail!("{} has no faucet", config.solana.name);
            }
            let session = WalletSession::from_phrase(&phrase, passphrase.as_deref())?
                .with_config(&config)?;
            for _ in 0..=account {
                session.add_wallet(Chain::Solana)?;
            }
            let id = WalletId::new(Chain::Solana, account);
            let signature = session.request_test_funds(id, amount).await?;
            println!("Airdrop confirmed: {}", signature);

            if let Ok(handle) = session.refresh_balance(id) {
                if let BalanceState::Known(balance) = handle.await? {
                    println!("Balance: {}", balance.display_fixed(6));
                }
            }
            Ok(())
        }
    }
}

fn generate(words: usize) -> anyhow::Result<()> {
    let word_count = WordCount::from_count(words)
        .with_context(|| format!("unsupported word count {}", words))?;
    let session = WalletSession::new(WalletMnemonic::generate_with(word_count)?, None)?;

    println!("Seed phrase ({} words):", session.mnemonic().word_count());
    for (i, word) in session.mnemonic().words().iter().enumerate() {
        println!("  {:>2}. {}", i + 1, word);
    }
    println!();

    for chain in Chain::ALL {
        session.add_wallet(chain)?;
    }
    print_wallets(&session, &VaultConfig::default(), false);
    Ok(())
}

fn print_wallets(session: &WalletSession, config: &VaultConfig, show_keys: bool) {
    for chain in Chain::ALL {
        let wallets = session.wallets(chain);
        if wallets.is_empty() {
            continue;
        }
        println!("{} ({})", config.network(chain).name, chain.symbol());
        for record in &wallets {
            print_record(record, config, show_keys);
        }
        println!();
    }
}

fn print_record(record: &WalletRecord, config: &VaultConfig, show_keys: bool) {
    let keypair = &record.keypair;
    println!("  Wallet {}  {}", record.id.account_index + 1, keypair.path());
    println!("    Public key:  {}", keypair.public_id());
    if show_keys {
        println!("    Private key: {}", keypair.private_key());
    }
    match &record.balance {
        BalanceState::Known(balance) => println!("    Balance:     {}", balance.display_fixed(6)),
        BalanceState::Unknown { reason } => println!("    Balance:     unavailable ({})", reason),
        BalanceState::Pending => {}
    }
    if let Some(url) = config.network(record.id.chain).explorer_address_url(keypair.public_id()) {
        println!("    Explorer:    {}", url);
    }
}
