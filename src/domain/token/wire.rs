//! Wire types for token registry responses.

use crate::shared::TokenAddress;
use serde::{Deserialize, Serialize};

/// REST response for a single listed token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub symbol: String,
    pub address: TokenAddress,
    pub decimals: u8,
}

/// REST response for the full token list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokensResponse {
    pub tokens: Vec<TokenResponse>,
}
