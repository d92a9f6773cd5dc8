//! Trade domain — normalized trade records and the pair-view history state.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
pub mod state;
pub mod wire;

use crate::shared::PairId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::TradeHistory;

/// A normalized trade record, ready for UI rendering.
///
/// `price` and `volume` are fixed-point decimals converted from the relayer's
/// integer encoding using the base token's decimal precision. `trend` marks
/// whether the price rose or held versus the reference prior trade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub pair: PairId,
    pub traded_at: DateTime<Utc>,
    /// Short display string derived from `traded_at`, e.g. `"12 Feb 14:05"`.
    pub display_time: String,
    pub price: Decimal,
    pub volume: Decimal,
    pub trend: bool,
}

impl std::fmt::Display for Trade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} @ {}",
            self.display_time,
            self.pair,
            crate::shared::fmt::display_amount(&self.volume),
            crate::shared::fmt::display_amount(&self.price)
        )
    }
}
