//! Display formatting for timestamps and decimal amounts.
//!
//! The pair view shows each trade with a short date string and a trimmed
//! decimal amount. Rounding here is display-only; state keeps exact values.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Format a timestamp as a short display string, e.g. `"12 Feb 14:05"`.
pub fn short_date(ts: &DateTime<Utc>) -> String {
    ts.format("%d %b %H:%M").to_string()
}

/// Format a `Decimal` for display: round to at most 8 fractional digits and
/// trim trailing zeros.
pub fn display_amount(value: &Decimal) -> String {
    let rounded = value.round_dp(8);
    let s = rounded.to_string();
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
