//! Tokens sub-client — registry lookups with a TTL cache.

use crate::client::DexfeedClient;
use crate::domain::token::Token;
use crate::error::{LookupError, SdkError};
use std::time::Instant;

/// Sub-client for token registry operations.
pub struct Tokens<'a> {
    pub(crate) client: &'a DexfeedClient,
}

impl<'a> Tokens<'a> {
    /// Resolve a token by symbol (case-insensitive). Uses TTL cache.
    ///
    /// An unknown symbol is a `LookupError::UnknownSymbol`, so callers can
    /// distinguish a bad pair selection from a transport failure.
    pub async fn by_symbol(&self, symbol: &str) -> Result<Token, SdkError> {
        let key = symbol.to_uppercase();

        {
            let cache = self.client.token_cache.read().await;
            if let Some((token, fetched_at)) = cache.get(&key) {
                if fetched_at.elapsed() < self.client.token_cache_ttl {
                    return Ok(token.clone());
                }
            }
        }

        let tokens = self.refresh().await?;
        tokens
            .into_iter()
            .find(|t| t.symbol.eq_ignore_ascii_case(symbol))
            .ok_or_else(|| SdkError::Lookup(LookupError::UnknownSymbol(symbol.to_string())))
    }

    /// Fetch the full token list, refreshing the cache.
    pub async fn all(&self) -> Result<Vec<Token>, SdkError> {
        self.refresh().await
    }

    /// Invalidate a cached token by symbol.
    pub async fn invalidate(&self, symbol: &str) {
        self.client
            .token_cache
            .write()
            .await
            .remove(&symbol.to_uppercase());
    }

    /// Clear the whole registry cache.
    pub async fn clear_cache(&self) {
        self.client.token_cache.write().await.clear();
    }

    async fn refresh(&self) -> Result<Vec<Token>, SdkError> {
        let resp = self.client.http.get_tokens().await?;
        let tokens: Vec<Token> = resp.tokens.into_iter().map(Token::from).collect();

        let now = Instant::now();
        let mut cache = self.client.token_cache.write().await;
        for token in &tokens {
            cache.insert(token.symbol.to_uppercase(), (token.clone(), now));
        }

        Ok(tokens)
    }
}
