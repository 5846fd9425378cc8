use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use monero_rpc::config::{load_config, validate_config, AuthConfig, ClientConfig, ConfigError};
use monero_rpc::observability::init_logging;
use monero_rpc::units::{atomic_to_decimal, new_payment_id_256, new_payment_id_64, str_to_atomic};
use monero_rpc::wallet::GetBalanceRequest;
use monero_rpc::{MoneroRpc, Network};

#[derive(Parser)]
#[command(name = "monero-rpc-cli")]
#[command(about = "Query a Monero daemon or wallet over JSON-RPC", long_about = None)]
struct Cli {
    /// JSON-RPC endpoint, e.g. http://127.0.0.1:18082/json_rpc
    #[arg(short, long)]
    url: Option<String>,

    /// Network whose default endpoint to use when no URL is given
    #[arg(short, long)]
    network: Option<Network>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Digest auth username (--rpc-login)
    #[arg(long)]
    user: Option<String>,

    /// Digest auth password
    #[arg(long, requires = "user")]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daemon status (get_info)
    Info,
    /// Daemon block count
    Height,
    /// Wallet balance of one account
    Balance {
        #[arg(short, long, default_value_t = 0)]
        account: u64,
    },
    /// Call any method with optional JSON params
    Call {
        method: String,
        params: Option<String>,
    },
    /// Generate a random payment id
    PaymentId {
        /// 64 hex chars instead of 16
        #[arg(long)]
        long: bool,
    },
    /// Convert XMR to atomic units, or back with --atomic
    Convert {
        amount: String,
        /// Treat the input as atomic units
        #[arg(long)]
        atomic: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Offline commands need no config or connection.
    match &cli.command {
        Commands::PaymentId { long } => {
            let id = if *long { new_payment_id_256() } else { new_payment_id_64() };
            println!("{}", id);
            return Ok(());
        }
        Commands::Convert { amount, atomic } => {
            if *atomic {
                println!("{}", atomic_to_decimal(amount.trim().parse()?));
            } else {
                println!("{}", str_to_atomic(amount)?);
            }
            return Ok(());
        }
        _ => {}
    }

    let config = resolve_config(&cli)?;
    init_logging(&config.observability.log_level);
    let rpc = MoneroRpc::from_config(&config)?;

    match cli.command {
        Commands::Info => print_json(&rpc.daemon().get_info().await?)?,
        Commands::Height => print_json(&rpc.daemon().get_block_count().await?)?,
        Commands::Balance { account } => {
            let req = GetBalanceRequest {
                account_index: account,
                ..Default::default()
            };
            let res = rpc.wallet().get_balance(&req).await?;
            println!("balance:          {} XMR", atomic_to_decimal(res.balance));
            println!("unlocked balance: {} XMR", atomic_to_decimal(res.unlocked_balance));
        }
        Commands::Call { method, params } => {
            let params: Option<Value> = params.as_deref().map(serde_json::from_str).transpose()?;
            let res: Value = rpc.call(&method, params.as_ref()).await?;
            print_json(&res)?;
        }
        Commands::PaymentId { .. } | Commands::Convert { .. } => {}
    }

    Ok(())
}

/// Config file first, then command-line overrides, validated together.
fn resolve_config(cli: &Cli) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };

    if let Some(network) = cli.network {
        config.network = network;
        if cli.url.is_none() {
            config.endpoint = None;
        }
    }
    if let Some(url) = &cli.url {
        config.endpoint = Some(url.clone());
    }
    if let Some(user) = &cli.user {
        config.auth = Some(AuthConfig {
            username: user.clone(),
            password: cli.password.clone().unwrap_or_default(),
        });
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("monero-rpc-cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = parse(&["--network", "testnet", "--user", "monero", "--password", "pw", "height"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.resolved_endpoint(), "http://127.0.0.1:28081/json_rpc");
        assert_eq!(config.auth.unwrap().username, "monero");
    }

    #[test]
    fn test_flag_overrides_are_validated() {
        let cli = parse(&["--user", "", "info"]);
        let err = resolve_config(&cli).unwrap_err();
        assert!(err.to_string().contains("auth.username"), "{err}");

        let cli = parse(&["--url", "ftp://127.0.0.1/json_rpc", "info"]);
        let err = resolve_config(&cli).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"), "{err}");
    }
}
