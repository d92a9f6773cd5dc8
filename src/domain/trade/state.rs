//! Trade state containers — app-owned, SDK-provided update logic.

use super::Trade;
use crate::shared::PairId;
use std::collections::VecDeque;

/// Token returned by [`TradeHistory::begin_load`], consumed by
/// [`TradeHistory::commit`]. A commit whose token was superseded by a later
/// `begin_load` (or a pair switch) is discarded, so a slow response can never
/// overwrite fresher state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadGeneration(u64);

/// Trade history buffer for one pair view, newest entry at the front.
///
/// The app owns instances of this type. The SDK provides update methods:
/// wholesale replacement on a history fetch and prepend on each live trade.
/// Length is capped with oldest-eviction.
#[derive(Debug, Clone)]
pub struct TradeHistory {
    pub pair: PairId,
    trades: VecDeque<Trade>,
    max_size: usize,
    generation: u64,
}

impl TradeHistory {
    pub fn new(pair: PairId, max_size: usize) -> Self {
        Self {
            pair,
            trades: VecDeque::with_capacity(max_size),
            max_size,
            generation: 0,
        }
    }

    /// Start tracking a history load. Any commit from an earlier load becomes
    /// stale the moment this is called.
    pub fn begin_load(&mut self) -> LoadGeneration {
        self.generation += 1;
        LoadGeneration(self.generation)
    }

    /// Replace all trades with a fetched batch.
    ///
    /// Returns `false` (leaving state untouched) if `generation` is stale.
    pub fn commit(&mut self, generation: LoadGeneration, trades: Vec<Trade>) -> bool {
        if generation.0 != self.generation {
            tracing::debug!(
                pair = %self.pair,
                stale = generation.0,
                current = self.generation,
                "Discarding stale trade history load"
            );
            return false;
        }

        self.trades.clear();
        for trade in trades.into_iter().take(self.max_size) {
            self.trades.push_back(trade);
        }
        true
    }

    /// Prepend a live trade, assigning its trend flag against the current
    /// most-recent entry: `true` if the buffer is empty or the new price is
    /// greater than or equal to the front price. Evicts the oldest entry at
    /// capacity.
    pub fn push(&mut self, mut trade: Trade) {
        trade.trend = match self.trades.front() {
            Some(front) => trade.price >= front.price,
            None => true,
        };

        if self.trades.len() >= self.max_size {
            self.trades.pop_back();
        }
        self.trades.push_front(trade);
    }

    /// Switch the view to another pair: clears all trades and invalidates any
    /// in-flight load.
    pub fn reset(&mut self, pair: PairId) {
        self.pair = pair;
        self.trades.clear();
        self.generation += 1;
    }

    pub fn trades(&self) -> &VecDeque<Trade> {
        &self.trades
    }

    pub fn latest(&self) -> Option<&Trade> {
        self.trades.front()
    }

    pub fn clear(&mut self) {
        self.trades.clear();
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_trade(traded_at: i64, price: &str) -> Trade {
        let ts: DateTime<Utc> = DateTime::from_timestamp(traded_at, 0).unwrap();
        Trade {
            pair: PairId::from("0xaa/0xbb"),
            traded_at: ts,
            display_time: crate::shared::fmt::short_date(&ts),
            price: dec(price),
            volume: dec("1"),
            trend: true,
        }
    }

    fn history() -> TradeHistory {
        TradeHistory::new(PairId::from("0xaa/0xbb"), 10)
    }

    #[test]
    fn test_push_into_empty_is_trending_up() {
        let mut th = history();
        th.push(make_trade(100, "5.00"));
        assert!(th.latest().unwrap().trend);
    }

    #[test]
    fn test_push_lower_price_is_trending_down() {
        // Spec example: [5.00/true] + incoming 4.00 -> [4.00/false, 5.00/true]
        let mut th = history();
        th.push(make_trade(100, "5.00"));
        th.push(make_trade(200, "4.00"));

        assert_eq!(th.len(), 2);
        let trades: Vec<_> = th.trades().iter().collect();
        assert_eq!(trades[0].price, dec("4.00"));
        assert!(!trades[0].trend);
        assert_eq!(trades[1].price, dec("5.00"));
        assert!(trades[1].trend);
    }

    #[test]
    fn test_push_equal_price_is_trending_up() {
        let mut th = history();
        th.push(make_trade(100, "5.00"));
        th.push(make_trade(200, "5.00"));
        assert!(th.latest().unwrap().trend);
    }

    #[test]
    fn test_push_shifts_prior_entries_back() {
        let mut th = history();
        th.push(make_trade(100, "1"));
        th.push(make_trade(200, "2"));
        th.push(make_trade(300, "3"));

        let prices: Vec<_> = th.trades().iter().map(|t| t.price).collect();
        assert_eq!(prices, [dec("3"), dec("2"), dec("1")]);
    }

    #[test]
    fn test_push_evicts_oldest_at_capacity() {
        let mut th = TradeHistory::new(PairId::from("0xaa/0xbb"), 3);
        for (i, p) in ["1", "2", "3", "4"].iter().enumerate() {
            th.push(make_trade(i as i64 * 100, p));
        }
        assert_eq!(th.len(), 3);
        let prices: Vec<_> = th.trades().iter().map(|t| t.price).collect();
        assert_eq!(prices, [dec("4"), dec("3"), dec("2")]);
    }

    #[test]
    fn test_commit_replaces_all() {
        let mut th = history();
        th.push(make_trade(100, "1"));

        let generation = th.begin_load();
        let committed = th.commit(generation, vec![make_trade(300, "3"), make_trade(200, "2")]);

        assert!(committed);
        assert_eq!(th.len(), 2);
        assert_eq!(th.latest().unwrap().price, dec("3"));
    }

    #[test]
    fn test_commit_truncates_to_capacity() {
        let mut th = TradeHistory::new(PairId::from("0xaa/0xbb"), 2);
        let generation = th.begin_load();
        th.commit(
            generation,
            vec![make_trade(300, "3"), make_trade(200, "2"), make_trade(100, "1")],
        );
        assert_eq!(th.len(), 2);
        assert_eq!(th.latest().unwrap().price, dec("3"));
    }

    #[test]
    fn test_stale_commit_discarded() {
        let mut th = history();
        let first = th.begin_load();
        let second = th.begin_load();

        assert!(!th.commit(first, vec![make_trade(100, "1")]));
        assert!(th.is_empty());

        assert!(th.commit(second, vec![make_trade(200, "2")]));
        assert_eq!(th.len(), 1);
    }

    #[test]
    fn test_reset_invalidates_inflight_load() {
        let mut th = history();
        th.push(make_trade(100, "1"));
        let generation = th.begin_load();

        th.reset(PairId::from("0xcc/0xdd"));
        assert!(th.is_empty());
        assert_eq!(th.pair.as_str(), "0xcc/0xdd");

        // The pre-switch load can no longer land
        assert!(!th.commit(generation, vec![make_trade(200, "2")]));
        assert!(th.is_empty());
    }
}
