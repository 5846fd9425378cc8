//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! transport.rs / auth.rs / config loader
//!     → tracing events (method, id, status, elapsed)
//!     → logging.rs subscriber (only when a binary installs it)
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - The library only emits `tracing` events; installing a subscriber is the
//!   binary's choice
//! - Credentials and request bodies are never logged

pub mod logging;

pub use logging::init_logging;
