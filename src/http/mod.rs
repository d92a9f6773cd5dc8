//! HTTP client layer — `DexfeedHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::DexfeedHttp;
pub use retry::{RetryConfig, RetryPolicy};
