//! web3rpc — typed client for the namespaced JSON-RPC surface of a geth node.
//!
//! # Overview
//!
//! A [`Web3`] facade wraps one shared transport handle and exposes nine
//! namespace clients: [`Admin`], [`Clique`], [`Debug`], [`Eth`], [`Miner`],
//! [`Net`], [`Personal`], [`Rpc`] and [`TxPool`]. Each method performs exactly
//! one JSON-RPC round trip through the handle under the caller's
//! [`CallContext`] and decodes the result into a typed value.
//!
//! ```no_run
//! use std::sync::Arc;
//! use web3rpc::{CallContext, RpcTransport, Web3};
//!
//! # async fn run(transport: Arc<dyn RpcTransport>) -> web3rpc::Result<()> {
//! let web3 = Web3::new(transport);
//! let ctx = CallContext::with_timeout(std::time::Duration::from_secs(5));
//! let head = web3.eth().block_number(&ctx).await?;
//! let peers = web3.net().peer_count(&ctx).await?;
//! println!("head={head} peers={peers}");
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod clique;
pub mod debug;
pub mod eth;
pub mod miner;
pub mod net;
pub mod personal;
pub mod rpc;
pub mod txpool;
pub mod types;
pub mod web3;

pub use admin::Admin;
pub use clique::Clique;
pub use debug::Debug;
pub use eth::Eth;
pub use miner::Miner;
pub use net::Net;
pub use personal::Personal;
pub use rpc::Rpc;
pub use txpool::TxPool;
pub use web3::Web3;

pub use web3rpc_core::{
    rpc_params, CallContext, JsonRpcError, JsonRpcRequest, JsonRpcResponse, MockTransport,
    RpcTransport, RpcTransportExt, TransportError,
};

/// Result of every namespace method.
pub type Result<T, E = TransportError> = std::result::Result<T, E>;
