//! Atomic-unit arithmetic and payment identifiers.
//!
//! Balances travel over RPC as `u64` counts of piconero, the smallest unit:
//! 1 XMR = 10^12 atomic units.
//!
//! # Precision
//! - `atomic_to_decimal` is string-based and exact for every `u64`
//! - the `f64` conversions inherit float rounding above 2^53 atomic units
//!   and truncate (never round) when scaling up

pub mod amount;
pub mod payment_id;

pub use amount::{
    atomic_to_decimal, atomic_to_f64, f64_to_atomic, str_to_atomic, Amount, AmountError,
    ATOMIC_UNITS_PER_XMR, DECIMALS,
};
pub use payment_id::{new_payment_id_256, new_payment_id_64};
