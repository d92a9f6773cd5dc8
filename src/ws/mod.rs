//! WebSocket layer — messages, subscriptions, events.
//!
//! The transport lives behind the `ws-native` feature (`tokio-tungstenite`).
//! This module defines the shared message/event types.
//!
//! Inbound messages use the relayer's channel envelope:
//! `{"messageType": "TRADE", "messageContent": { … }}`. Order events share
//! the pair channel; their payloads are passed through opaquely since this
//! SDK only consumes trades.

pub mod subscriptions;

#[cfg(feature = "ws-native")]
pub mod native;

use crate::domain::trade::wire::WsTrade;
use serde::{Deserialize, Serialize};

pub use subscriptions::{SubscribeParams, Subscription, UnsubscribeParams};

// ─── Outbound messages ───────────────────────────────────────────────────────

/// Messages sent from client to server.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum MessageOut {
    #[serde(rename = "subscribe")]
    Subscribe { params: SubscribeParams },
    #[serde(rename = "unsubscribe")]
    Unsubscribe { params: UnsubscribeParams },
    #[serde(rename = "ping")]
    Ping,
}

impl MessageOut {
    pub fn subscribe_trades(pairs: Vec<crate::shared::PairId>) -> Self {
        MessageOut::Subscribe {
            params: SubscribeParams::Trades { pairs },
        }
    }

    pub fn unsubscribe_trades(pairs: Vec<crate::shared::PairId>) -> Self {
        MessageOut::Unsubscribe {
            params: UnsubscribeParams::Trades { pairs },
        }
    }

    pub fn ping() -> Self {
        MessageOut::Ping
    }
}

// ─── Inbound messages ────────────────────────────────────────────────────────

/// Raw inbound message from the server.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageIn {
    #[serde(flatten)]
    pub kind: Kind,
}

/// The type of inbound WebSocket message.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "messageType", content = "messageContent")]
pub enum Kind {
    #[serde(rename = "TRADE")]
    Trade(WsTrade),
    #[serde(rename = "NEW_ORDER")]
    NewOrder(serde_json::Value),
    #[serde(rename = "CANCEL_ORDER")]
    CancelOrder(serde_json::Value),
    #[serde(rename = "ORDER_FILL")]
    OrderFill(serde_json::Value),
    #[serde(rename = "PONG")]
    Pong,
    #[serde(rename = "ERROR")]
    Error(WsErrorPayload),
}

#[derive(Debug, Clone, Deserialize)]
pub struct WsErrorPayload {
    pub message: String,
    pub code: Option<String>,
}

// ─── WsEvent ─────────────────────────────────────────────────────────────────

/// High-level events emitted by the WS client to the consumer.
#[derive(Debug, Clone)]
pub enum WsEvent {
    /// A parsed message from the server.
    Message(Kind),
    /// Connection established.
    Connected,
    /// Connection lost (may trigger reconnect).
    Disconnected { code: Option<u16>, reason: String },
    /// A deserialization or protocol error.
    Error(String),
    /// Reconnection gave up after the configured number of attempts.
    MaxReconnectReached,
}

/// Connection state of the WS client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ReadyState {
    Connecting = 0,
    Open = 1,
    Closing = 2,
    Closed = 3,
}

impl From<u16> for ReadyState {
    fn from(v: u16) -> Self {
        match v {
            0 => ReadyState::Connecting,
            1 => ReadyState::Open,
            2 => ReadyState::Closing,
            _ => ReadyState::Closed,
        }
    }
}

/// Configuration for the WS client.
#[derive(Debug, Clone)]
pub struct WsConfig {
    pub url: String,
    pub reconnect: bool,
    pub max_reconnect_attempts: u32,
    pub base_reconnect_delay_ms: u32,
    pub ping_interval_ms: u64,
    pub pong_timeout_ms: u64,
}

impl Default for WsConfig {
    fn default() -> Self {
        Self {
            url: crate::network::DEFAULT_WS_URL.to_string(),
            reconnect: true,
            max_reconnect_attempts: 10,
            base_reconnect_delay_ms: 1000,
            ping_interval_ms: 30_000,
            pong_timeout_ms: 10_000,
        }
    }
}
