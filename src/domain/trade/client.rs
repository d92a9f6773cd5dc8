//! Trades sub-client — history loading and live-event application.

use crate::client::DexfeedClient;
use crate::domain::trade::convert::transform_history;
use crate::domain::trade::state::TradeHistory;
use crate::domain::trade::wire::WsTrade;
use crate::domain::trade::Trade;
use crate::error::SdkError;
use crate::shared::PairId;

/// Sub-client for trade operations.
pub struct Trades<'a> {
    pub(crate) client: &'a DexfeedClient,
}

impl<'a> Trades<'a> {
    /// Fetch and normalize the trade history for a pair of symbols.
    ///
    /// Both symbols are resolved through the token registry; price and volume
    /// are converted with the base token's decimal precision.
    pub async fn history(&self, token: &str, base: &str) -> Result<Vec<Trade>, SdkError> {
        let token = self.client.tokens().by_symbol(token).await?;
        let base = self.client.tokens().by_symbol(base).await?;
        let pair = PairId::derive(&token.address, &base.address);

        let raw = self
            .client
            .http
            .get_trade_history(token.address.as_str(), base.address.as_str())
            .await?;

        Ok(transform_history(&raw, &pair, base.decimals))
    }

    /// Load the history for a pair into a state container.
    ///
    /// The load is generation-guarded: if the container starts another load
    /// (or switches pair) while this request is in flight, the result is
    /// discarded. Returns whether the batch was committed.
    pub async fn load(
        &self,
        history: &mut TradeHistory,
        token: &str,
        base: &str,
    ) -> Result<bool, SdkError> {
        let generation = history.begin_load();
        let trades = self.history(token, base).await?;
        Ok(history.commit(generation, trades))
    }

    /// Apply one live trade event to a state container.
    ///
    /// `base` is the active base symbol of the pair view, passed explicitly;
    /// its decimal precision is resolved through the registry cache. The
    /// normalized record is prepended and its trend flag assigned against the
    /// previous most-recent entry.
    pub async fn append_event(
        &self,
        history: &mut TradeHistory,
        event: &WsTrade,
        base: &str,
    ) -> Result<(), SdkError> {
        let base = self.client.tokens().by_symbol(base).await?;
        let trade = Trade::from_event(event, base.decimals)?;
        history.push(trade);
        Ok(())
    }
}
