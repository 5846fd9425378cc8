//! JSON-RPC dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! facade method (daemon / wallet)
//!     → transport.rs (encode envelope, HTTP POST)
//!     → auth.rs (answer a Digest challenge, resend once)
//!     → envelope.rs (decode result | error)
//!     → error.rs (typed failure back to the caller)
//! ```
//!
//! # Design Decisions
//! - One attempt per call; no retries, no caching
//! - The HTTP client is injected so timeouts, proxies and TLS stay with the caller
//! - A `null` result is a success that leaves the response slot untouched

pub mod auth;
pub mod envelope;
pub mod error;
#[macro_use]
pub mod macros;
pub mod skip;
pub mod transport;

pub use auth::Credentials;
pub use error::{ErrorKind, RpcError, RpcResult};
pub use macros::MethodSpec;
pub use transport::Transport;
