//! Client configuration subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → MoneroRpc::from_config
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file is a valid mainnet config
//! - Validation separates syntactic (serde) from semantic checks
//! - Config is read once; there is no reload

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AuthConfig, ClientConfig, ObservabilityConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
