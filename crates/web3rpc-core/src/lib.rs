//! web3rpc-core — foundation traits and types for web3rpc.
//!
//! # Overview
//!
//! web3rpc exposes the namespaced JSON-RPC surface of a geth-style node as
//! typed Rust methods. This crate defines the pieces every namespace shares:
//!
//! - [`RpcTransport`] — the transport handle every backend implements
//! - [`RpcTransportExt`] — typed invoke on top of any transport
//! - [`CallContext`] — cancellation and deadline threaded through each call
//! - [`JsonRpcRequest`] / [`JsonRpcResponse`] — wire types
//! - [`TransportError`] — structured error type
//! - [`mock`] module — in-memory transport for tests

pub mod context;
pub mod error;
pub mod mock;
pub mod request;
pub mod transport;

pub use context::CallContext;
pub use error::TransportError;
pub use mock::MockTransport;
pub use request::{to_param, JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId, RpcParam};
pub use transport::{RpcTransport, RpcTransportExt};

/// Build the positional parameter list for a call.
///
/// Each argument is serialized in order; `None` becomes JSON `null` and keeps
/// its slot. Must be used inside a function returning
/// `Result<_, TransportError>`.
#[macro_export]
macro_rules! rpc_params {
    () => {
        ::std::vec::Vec::<$crate::RpcParam>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::to_param(&$arg)?),+]
    };
}
