//! Network URL constants for the Dexfeed SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.dexfeed.io";

/// Default WebSocket URL.
pub const DEFAULT_WS_URL: &str = "wss://stream.dexfeed.io/ws";
