//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the relayer sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod fmt;
pub mod scaling;
pub mod serde_util;

pub use fmt::{display_amount, short_date};
pub use scaling::{from_base_units, ScalingError};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── TokenAddress ────────────────────────────────────────────────────────────

/// An EVM token contract address stored as a lowercase `0x…` hex string.
///
/// Serializes transparently as a JSON string. Can be used as a HashMap key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenAddress(String);

impl TokenAddress {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TokenAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TokenAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl Serialize for TokenAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TokenAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TokenAddress::new(s))
    }
}

// ─── PairId ──────────────────────────────────────────────────────────────────

/// Newtype for pair channel keys (e.g. `"0xabc…/0xdef…"`).
///
/// The relayer keys its pub/sub channels by `{token}/{base}` in lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairId(String);

impl PairId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the pair channel key from the token and base addresses.
    ///
    /// Format: `{token}/{base}`, lowercase.
    pub fn derive(token: &TokenAddress, base: &TokenAddress) -> Self {
        Self(format!("{}/{}", token.as_str(), base.as_str()))
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PairId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PairId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for PairId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PairId(s.to_string()))
    }
}

impl Serialize for PairId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PairId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PairId(s))
    }
}
