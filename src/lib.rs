//! Async client for the Monero daemon (`monerod`) and wallet
//! (`monero-wallet-rpc`) JSON-RPC interfaces.
//!
//! # Architecture Overview
//!
//! ```text
//!   caller
//!     │
//!     ▼
//!   client::MoneroRpc ──▶ daemon::Daemon / wallet::Wallet (typed facades)
//!                               │
//!                               ▼
//!                         rpc::Transport ──▶ HTTP POST /json_rpc
//!                               │               (Digest auth on 401)
//!                               ▼
//!                         rpc::envelope ──▶ result | RpcError
//!
//!   units      atomic ⇄ XMR conversion, payment ids
//!   config     TOML client config
//!   observability  tracing subscriber setup
//! ```

// Must come first: the facades use `rpc_methods!`.
#[macro_use]
pub mod rpc;

pub mod client;
pub mod config;
pub mod daemon;
pub mod observability;
pub mod units;
pub mod wallet;

pub use client::{MoneroRpc, Network, MAINNET_URI, STAGENET_URI, TESTNET_URI};
pub use config::ClientConfig;
pub use daemon::Daemon;
pub use rpc::{Credentials, ErrorKind, RpcError, RpcResult, Transport};
pub use units::Amount;
pub use wallet::Wallet;
