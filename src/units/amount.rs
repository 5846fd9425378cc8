//! Conversions between atomic units and XMR.

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Atomic units in one XMR.
pub const ATOMIC_UNITS_PER_XMR: u64 = 1_000_000_000_000;

/// Fractional digits of one XMR.
pub const DECIMALS: usize = 12;

const SCALE: f64 = 1e12;

/// Errors from parsing a human-entered amount.
#[derive(Debug, Error)]
pub enum AmountError {
    #[error("invalid amount '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Render an atomic balance as a decimal XMR string with exactly 12
/// fractional digits.
pub fn atomic_to_decimal(atomic: u64) -> String {
    let digits = format!("{:0width$}", atomic, width = DECIMALS + 1);
    let split = digits.len() - DECIMALS;
    format!("{}.{}", &digits[..split], &digits[split..])
}

/// Convert an atomic balance to XMR as a float.
pub fn atomic_to_f64(atomic: u64) -> f64 {
    atomic as f64 / SCALE
}

/// Convert XMR to atomic units, truncating toward zero.
///
/// Negative and NaN inputs yield 0; values past `u64::MAX` saturate.
pub fn f64_to_atomic(xmr: f64) -> u64 {
    (xmr * SCALE) as u64
}

/// Parse a decimal XMR string into atomic units.
///
/// Goes through `f64`, so the same truncation as [`f64_to_atomic`] applies.
pub fn str_to_atomic(xmr: &str) -> Result<u64, AmountError> {
    let value: f64 = xmr.trim().parse().map_err(|source| AmountError::Parse {
        input: xmr.to_string(),
        source,
    })?;
    Ok(f64_to_atomic(value))
}

/// An XMR amount held in atomic units.
///
/// Serializes as the bare integer, matching the RPC wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(pub u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_atomic(atomic: u64) -> Self {
        Self(atomic)
    }

    pub fn from_xmr(xmr: f64) -> Self {
        Self(f64_to_atomic(xmr))
    }

    pub fn atomic(self) -> u64 {
        self.0
    }

    pub fn as_xmr(self) -> f64 {
        atomic_to_f64(self.0)
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }
}

impl From<u64> for Amount {
    fn from(atomic: u64) -> Self {
        Self(atomic)
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&atomic_to_decimal(self.0))
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        str_to_atomic(s).map(Amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_to_decimal() {
        assert_eq!(atomic_to_decimal(1_000_000_000_000), "1.000000000000");
        assert_eq!(atomic_to_decimal(0), "0.000000000000");
        assert_eq!(atomic_to_decimal(1), "0.000000000001");
        assert_eq!(atomic_to_decimal(123_456_789_012_345), "123.456789012345");
    }

    #[test]
    fn test_atomic_to_decimal_is_exact_above_float_range() {
        assert_eq!(atomic_to_decimal(u64::MAX), "18446744.073709551615");
        assert_eq!(atomic_to_decimal((1 << 53) + 1), "9007.199254740993");
    }

    #[test]
    fn test_float_conversions() {
        assert_eq!(atomic_to_f64(1_000_000_000_000), 1.0);
        assert_eq!(f64_to_atomic(1.0), 1_000_000_000_000);
        assert_eq!(f64_to_atomic(0.5), 500_000_000_000);
    }

    #[test]
    fn test_f64_to_atomic_saturates() {
        assert_eq!(f64_to_atomic(-1.0), 0);
        assert_eq!(f64_to_atomic(f64::NAN), 0);
        assert_eq!(f64_to_atomic(1e30), u64::MAX);
    }

    #[test]
    fn test_round_trip_on_exact_values() {
        for atomic in [
            0u64,
            125_000_000_000,
            250_000_000_000,
            500_000_000_000,
            1_000_000_000_000,
            7_000_000_000_000,
            4_096_000_000_000_000,
        ] {
            assert_eq!(f64_to_atomic(atomic_to_f64(atomic)), atomic, "atomic = {}", atomic);
        }
    }

    #[test]
    fn test_round_trip_truncation_boundary() {
        // 61 / 1e12 * 1e12 lands just below 61 and truncates.
        assert_eq!(f64_to_atomic(atomic_to_f64(61)), 60);
        // The decimal string path stays exact.
        assert_eq!(atomic_to_decimal(61), "0.000000000061");
    }

    #[test]
    fn test_str_to_atomic() {
        assert_eq!(str_to_atomic("1.5").unwrap(), 1_500_000_000_000);
        assert_eq!(str_to_atomic(" 2 ").unwrap(), 2_000_000_000_000);
        assert_eq!(str_to_atomic("0").unwrap(), 0);
    }

    #[test]
    fn test_str_to_atomic_rejects_garbage() {
        let err = str_to_atomic("not-a-number").unwrap_err();
        assert!(err.to_string().contains("not-a-number"));
        assert!(str_to_atomic("").is_err());
    }

    #[test]
    fn test_amount_display_and_parse() {
        let amount: Amount = "0.25".parse().unwrap();
        assert_eq!(amount, Amount(250_000_000_000));
        assert_eq!(amount.to_string(), "0.250000000000");
        assert_eq!(Amount::from_xmr(1.0).atomic(), ATOMIC_UNITS_PER_XMR);
        assert_eq!(Amount(ATOMIC_UNITS_PER_XMR).as_xmr(), 1.0);
    }

    #[test]
    fn test_amount_checked_math() {
        assert_eq!(Amount(5).checked_sub(Amount(7)), None);
        assert_eq!(Amount(5).checked_add(Amount(7)), Some(Amount(12)));
        assert_eq!(Amount(u64::MAX).checked_add(Amount(1)), None);
    }

    #[test]
    fn test_amount_serializes_as_integer() {
        let encoded = serde_json::to_string(&Amount(42)).unwrap();
        assert_eq!(encoded, "42");
        let decoded: Amount = serde_json::from_str("4771949057248").unwrap();
        assert_eq!(decoded, Amount(4_771_949_057_248));
    }
}
