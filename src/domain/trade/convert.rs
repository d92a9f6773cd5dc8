//! Conversions from wire types to normalized trades.
//!
//! All amounts are converted with the base token's decimal precision; trend
//! flags are assigned over the whole batch so each entry compares against the
//! entry that follows it in response order.

use super::wire::{TradeEntry, WsTrade};
use super::Trade;
use crate::shared::scaling::{from_base_units, ScalingError};
use crate::shared::{fmt, PairId};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors normalizing a single wire entry.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid trade timestamp: {0}")]
    BadTimestamp(u64),

    #[error("Invalid {field}: {source}")]
    BadAmount {
        field: &'static str,
        source: ScalingError,
    },
}

impl Trade {
    /// Normalize one REST history entry. The trend flag is left `true` here
    /// and assigned by [`transform_history`].
    pub fn from_entry(
        entry: &TradeEntry,
        pair: &PairId,
        decimals: u8,
    ) -> Result<Self, ConvertError> {
        let traded_at = timestamp_secs(entry.traded_at)?;
        Ok(Self {
            pair: pair.clone(),
            traded_at,
            display_time: fmt::short_date(&traded_at),
            price: amount(&entry.price, decimals, "price")?,
            volume: amount(&entry.volume, decimals, "volume")?,
            trend: true,
        })
    }

    /// Normalize one WS trade event. The trend flag is assigned when the
    /// record is pushed into a [`super::TradeHistory`].
    pub fn from_event(event: &WsTrade, decimals: u8) -> Result<Self, ConvertError> {
        let traded_at = timestamp_secs(event.traded_at)?;
        Ok(Self {
            pair: PairId::derive(&event.token, &event.base),
            traded_at,
            display_time: fmt::short_date(&traded_at),
            price: amount(&event.price, decimals, "price")?,
            volume: amount(&event.volume, decimals, "volume")?,
            trend: true,
        })
    }
}

fn timestamp_secs(secs: u64) -> Result<DateTime<Utc>, ConvertError> {
    DateTime::<Utc>::from_timestamp(secs as i64, 0).ok_or(ConvertError::BadTimestamp(secs))
}

fn amount(raw: &str, decimals: u8, field: &'static str) -> Result<rust_decimal::Decimal, ConvertError> {
    from_base_units(raw, decimals).map_err(|source| ConvertError::BadAmount { field, source })
}

/// Normalize a full trade-history response.
///
/// Response order is preserved. The trend flag of entry `i` is
/// `price[i] >= price[i + 1]`; the final entry is always `true`. The relayer
/// returns batches newest-first, so `i + 1` is the chronological predecessor —
/// a batch with increasing timestamps violates that contract and is logged.
///
/// Malformed entries are skipped with a warning rather than failing the whole
/// batch; partial history is more useful than none.
pub fn transform_history(entries: &[TradeEntry], pair: &PairId, decimals: u8) -> Vec<Trade> {
    let mut trades: Vec<Trade> = Vec::with_capacity(entries.len());
    for entry in entries {
        match Trade::from_entry(entry, pair, decimals) {
            Ok(trade) => trades.push(trade),
            Err(e) => {
                tracing::warn!(pair = %pair, error = %e, "Skipping malformed trade entry");
            }
        }
    }

    if trades
        .windows(2)
        .any(|w| w[0].traded_at < w[1].traded_at)
    {
        tracing::warn!(pair = %pair, "Trade history batch is not newest-first");
    }

    let last = trades.len().saturating_sub(1);
    for i in 0..trades.len() {
        let up = i == last || trades[i].price >= trades[i + 1].price;
        trades[i].trend = up;
    }

    trades
}
