//! Wire types for trade responses (REST + WS).

use crate::shared::serde_util::numeric_string;
use crate::shared::TokenAddress;
use serde::{Deserialize, Serialize};

/// One raw entry of a REST trade-history response.
///
/// `price` and `volume` are base-unit big integers; the relayer serializes
/// them as strings. `traded_at` is epoch seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TradeEntry {
    pub traded_at: u64,
    #[serde(deserialize_with = "numeric_string::deserialize")]
    pub price: String,
    #[serde(deserialize_with = "numeric_string::deserialize")]
    pub volume: String,
}

/// WS trade event, published on the pair channel when an order match lands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WsTrade {
    pub token: TokenAddress,
    pub base: TokenAddress,
    pub traded_at: u64,
    #[serde(deserialize_with = "numeric_string::deserialize")]
    pub price: String,
    #[serde(deserialize_with = "numeric_string::deserialize")]
    pub volume: String,
    #[serde(default)]
    pub tx_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_entry_accepts_string_amounts() {
        let json = r#"{"traded_at": 1700000000, "price": "1250000", "volume": "30000000"}"#;
        let entry: TradeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.traded_at, 1_700_000_000);
        assert_eq!(entry.price, "1250000");
        assert_eq!(entry.volume, "30000000");
    }

    #[test]
    fn test_trade_entry_accepts_numeric_amounts() {
        let json = r#"{"traded_at": 1700000000, "price": 1250000, "volume": 30000000}"#;
        let entry: TradeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.price, "1250000");
    }

    #[test]
    fn test_ws_trade_deserializes() {
        let json = r#"{
            "token": "0xAAAA000000000000000000000000000000000001",
            "base": "0xbbbb000000000000000000000000000000000002",
            "traded_at": 1700000100,
            "price": "5000000",
            "volume": "1000000",
            "tx_hash": "0xfeed"
        }"#;
        let trade: WsTrade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.token.as_str(), "0xaaaa000000000000000000000000000000000001");
        assert_eq!(trade.tx_hash.as_deref(), Some("0xfeed"));
    }

    #[test]
    fn test_ws_trade_tx_hash_optional() {
        let json = r#"{
            "token": "0xaa",
            "base": "0xbb",
            "traded_at": 1,
            "price": "1",
            "volume": "1"
        }"#;
        let trade: WsTrade = serde_json::from_str(json).unwrap();
        assert!(trade.tx_hash.is_none());
    }
}
