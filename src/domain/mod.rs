//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching relayer responses
//! - `convert.rs` — Fallible conversions with validation
//! - `state.rs` — State containers with update methods (for WS-driven data)
//! - `client.rs` — Sub-client with HTTP methods and caching

pub mod token;
pub mod trade;
