//! web3rpc-http — HTTP JSON-RPC transport for web3rpc.
//!
//! One request, one POST. Retrying, pooling and rate limiting are left to the
//! caller; a failed POST is reported as-is.

pub mod client;

pub use client::{HttpClientConfig, HttpRpcClient};
