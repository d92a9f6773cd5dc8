//! # Dexfeed SDK
//!
//! A Rust client for the Dexfeed relayer backend. It covers the data a pair
//! view needs: the token registry, normalized trade history, and live trade
//! events streamed over WebSocket.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, base-unit scaling, domain models
//! 2. **HTTP API** — `DexfeedHttp` with per-endpoint retry policies
//! 3. **WebSocket** — `ws-native` feature: `tokio-tungstenite` client
//! 4. **High-Level Client** — `DexfeedClient` with nested sub-clients and caching
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dexfeed::prelude::*;
//!
//! let client = DexfeedClient::builder()
//!     .base_url("https://api.dexfeed.io")
//!     .build()?;
//!
//! let mut history = TradeHistory::new(PairId::new("0xabc…/0xdef…"), 200);
//! client.trades().load(&mut history, "WETH", "DAI").await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: WebSocket ───────────────────────────────────────────────────────

/// WebSocket client: messages, subscriptions, events.
pub mod ws;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `DexfeedClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{PairId, TokenAddress};
    pub use crate::shared::scaling::{from_base_units, ScalingError};

    // Domain types — token registry
    pub use crate::domain::token::Token;

    // Domain types — trade + history state
    pub use crate::domain::trade::state::LoadGeneration;
    pub use crate::domain::trade::{Trade, TradeHistory};

    // Errors
    pub use crate::error::{LookupError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_WS_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{DexfeedClient, DexfeedClientBuilder, TokensClient, TradesClient};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // WebSocket types
    pub use crate::ws::{Kind, MessageIn, MessageOut, SubscribeParams, UnsubscribeParams, WsEvent};
}
