//! Pure conversion of integer-encoded (base-unit) amounts into
//! human-readable decimal values.
//!
//! The relayer stores prices and volumes as big integers scaled by the base
//! token's decimal precision. All math uses `rust_decimal::Decimal` for exact
//! arithmetic. No async, no network calls.

use std::fmt;

use rust_decimal::Decimal;

/// Errors that can occur while scaling amounts.
#[derive(Debug, Clone)]
pub enum ScalingError {
    InvalidDigits { input: String },
    UnsupportedScale { decimals: u8 },
    Overflow { context: String },
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::InvalidDigits { input } => {
                write!(f, "Not an integer amount: '{}'", input)
            }
            ScalingError::UnsupportedScale { decimals } => {
                write!(f, "Decimal precision {} exceeds the supported maximum of 28", decimals)
            }
            ScalingError::Overflow { context } => write!(f, "Overflow: {}", context),
        }
    }
}

impl std::error::Error for ScalingError {}

/// Convert an integer-encoded amount into a fixed-point decimal value.
///
/// `raw` is the base-unit integer as a decimal string (the relayer serializes
/// big integers as strings), `decimals` the token's fractional-digit count.
/// For example, `"1250000"` with 6 decimals becomes `1.25`.
pub fn from_base_units(raw: &str, decimals: u8) -> Result<Decimal, ScalingError> {
    if decimals > 28 {
        return Err(ScalingError::UnsupportedScale { decimals });
    }

    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScalingError::InvalidDigits {
            input: raw.to_string(),
        });
    }

    let mantissa: i128 = trimmed.parse().map_err(|_| ScalingError::Overflow {
        context: format!("'{}' does not fit in i128", trimmed),
    })?;

    Decimal::try_from_i128_with_scale(mantissa, decimals as u32).map_err(|_| {
        ScalingError::Overflow {
            context: format!("'{}' at scale {} exceeds Decimal range", trimmed, decimals),
        }
    })
}
