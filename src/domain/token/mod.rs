//! Token domain — the listed-token registry.
//!
//! The registry maps a display symbol to the token's contract address and
//! decimal precision. Decimal precision drives all base-unit conversion for
//! prices and volumes quoted in that token.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::TokenAddress;
use serde::{Deserialize, Serialize};

/// A listed token: symbol, contract address, decimal precision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub symbol: String,
    pub address: TokenAddress,
    pub decimals: u8,
}

impl From<wire::TokenResponse> for Token {
    fn from(t: wire::TokenResponse) -> Self {
        Self {
            symbol: t.symbol,
            address: t.address,
            decimals: t.decimals,
        }
    }
}
