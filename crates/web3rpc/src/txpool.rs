//! `txpool` namespace: views of the pending and queued transaction pool.

use std::sync::Arc;

use web3rpc_core::{rpc_params, CallContext, RpcTransport, RpcTransportExt};

use crate::types::{Address, TxPoolContent, TxPoolContentFrom, TxPoolInspect, TxPoolStatus};
use crate::Result;

#[derive(Clone)]
pub struct TxPool {
    transport: Arc<dyn RpcTransport>,
}

impl TxPool {
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    /// Every pooled transaction, grouped by section, sender and nonce.
    pub async fn content(&self, ctx: &CallContext) -> Result<TxPoolContent> {
        self.transport.call(ctx, "txpool_content", rpc_params![]).await
    }

    /// Pooled transactions sent by `address`.
    pub async fn content_from(
        &self,
        ctx: &CallContext,
        address: Address,
    ) -> Result<TxPoolContentFrom> {
        self.transport
            .call(ctx, "txpool_contentFrom", rpc_params![address])
            .await
    }

    pub async fn inspect(&self, ctx: &CallContext) -> Result<TxPoolInspect> {
        self.transport.call(ctx, "txpool_inspect", rpc_params![]).await
    }

    /// Counts of pending and queued transactions.
    pub async fn status(&self, ctx: &CallContext) -> Result<TxPoolStatus> {
        self.transport.call(ctx, "txpool_status", rpc_params![]).await
    }
}
