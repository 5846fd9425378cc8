//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for binaries and tests
//! - Configure log level from the environment or config
//!
//! # Design Decisions
//! - `RUST_LOG` takes precedence over the configured level
//! - Installing twice is a no-op, so tests can call it freely

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global fmt subscriber writing to stderr.
///
/// `default_level` applies to this crate when `RUST_LOG` is unset or invalid.
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging(default_level: &str) -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("monero_rpc={level}"))
        .unwrap_or_else(|_| EnvFilter::new("monero_rpc=info"))
}
