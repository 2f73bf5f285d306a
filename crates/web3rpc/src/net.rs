//! `net` namespace: peer-to-peer network status.

use std::sync::Arc;

use web3rpc_core::{rpc_params, CallContext, RpcTransport, RpcTransportExt};

use crate::types::U64;
use crate::Result;

#[derive(Clone)]
pub struct Net {
    transport: Arc<dyn RpcTransport>,
}

impl Net {
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    /// Network id as a decimal string.
    pub async fn version(&self, ctx: &CallContext) -> Result<String> {
        self.transport.call(ctx, "net_version", rpc_params![]).await
    }

    /// Whether the node is accepting inbound connections.
    pub async fn listening(&self, ctx: &CallContext) -> Result<bool> {
        self.transport.call(ctx, "net_listening", rpc_params![]).await
    }

    pub async fn peer_count(&self, ctx: &CallContext) -> Result<U64> {
        self.transport.call(ctx, "net_peerCount", rpc_params![]).await
    }
}
