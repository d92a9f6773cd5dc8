//! High-level client — `DexfeedClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::domain::token::client::Tokens;
use crate::domain::token::Token;
use crate::domain::trade::client::Trades;
use crate::error::SdkError;
use crate::http::DexfeedHttp;
use crate::ws::WsConfig;

use async_lock::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::token::client::Tokens as TokensClient;
pub use crate::domain::trade::client::Trades as TradesClient;

/// The primary entry point for the Dexfeed SDK.
///
/// Provides nested sub-client accessors per domain:
/// `client.tokens()`, `client.trades()`.
pub struct DexfeedClient {
    pub(crate) http: DexfeedHttp,
    pub(crate) ws_config: WsConfig,
    /// Token registry cache: SYMBOL → (Token, fetched_at)
    pub(crate) token_cache: Arc<RwLock<HashMap<String, (Token, Instant)>>>,
    /// Cache TTL for registry entries
    pub(crate) token_cache_ttl: Duration,
}

impl DexfeedClient {
    pub fn builder() -> DexfeedClientBuilder {
        DexfeedClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    /// Get a WS config for creating a WebSocket connection.
    ///
    /// The WS client is intentionally not embedded in `DexfeedClient`
    /// because WS connection lifetimes are typically managed at the
    /// application layer (e.g. tied to a pair view's lifecycle).
    pub fn ws_config(&self) -> &WsConfig {
        &self.ws_config
    }

    /// Create a new native WS client from the current config.
    #[cfg(feature = "ws-native")]
    pub fn ws(&self) -> crate::ws::native::WsClient {
        crate::ws::native::WsClient::new(self.ws_config.clone())
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        self.token_cache.write().await.clear();
    }
}

impl Clone for DexfeedClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            ws_config: self.ws_config.clone(),
            token_cache: self.token_cache.clone(),
            token_cache_ttl: self.token_cache_ttl,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DexfeedClientBuilder {
    base_url: String,
    ws_url: String,
    token_cache_ttl: Duration,
}

impl Default for DexfeedClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            ws_url: crate::network::DEFAULT_WS_URL.to_string(),
            token_cache_ttl: Duration::from_secs(300),
        }
    }
}

impl DexfeedClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn ws_url(mut self, url: &str) -> Self {
        self.ws_url = url.to_string();
        self
    }

    pub fn token_cache_ttl(mut self, ttl: Duration) -> Self {
        self.token_cache_ttl = ttl;
        self
    }

    pub fn build(self) -> Result<DexfeedClient, SdkError> {
        Ok(DexfeedClient {
            http: DexfeedHttp::new(&self.base_url),
            ws_config: WsConfig {
                url: self.ws_url,
                ..WsConfig::default()
            },
            token_cache: Arc::new(RwLock::new(HashMap::new())),
            token_cache_ttl: self.token_cache_ttl,
        })
    }
}
