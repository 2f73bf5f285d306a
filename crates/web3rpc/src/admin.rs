//! `admin` namespace: node administration.
//!
//! Peer management, chain import/export and control of the HTTP and
//! WebSocket RPC servers. Optional server arguments are sent as `null` and the
//! node falls back to its configured defaults.

use std::sync::Arc;

use web3rpc_core::{rpc_params, CallContext, RpcTransport, RpcTransportExt};

use crate::types::{NodeInfo, PeerInfo};
use crate::Result;

#[derive(Clone)]
pub struct Admin {
    transport: Arc<dyn RpcTransport>,
}

impl Admin {
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    pub async fn node_info(&self, ctx: &CallContext) -> Result<NodeInfo> {
        self.transport.call(ctx, "admin_nodeInfo", rpc_params![]).await
    }

    pub async fn peers(&self, ctx: &CallContext) -> Result<Vec<PeerInfo>> {
        self.transport.call(ctx, "admin_peers", rpc_params![]).await
    }

    /// Absolute path of the node's data directory.
    pub async fn datadir(&self, ctx: &CallContext) -> Result<String> {
        self.transport.call(ctx, "admin_datadir", rpc_params![]).await
    }

    /// Connect to `url` (an enode URL) and keep reconnecting if the link drops.
    pub async fn add_peer(&self, ctx: &CallContext, url: &str) -> Result<bool> {
        self.transport
            .call(ctx, "admin_addPeer", rpc_params![url])
            .await
    }

    pub async fn remove_peer(&self, ctx: &CallContext, url: &str) -> Result<bool> {
        self.transport
            .call(ctx, "admin_removePeer", rpc_params![url])
            .await
    }

    /// Allow `url` to connect even when peer slots are full.
    pub async fn add_trusted_peer(&self, ctx: &CallContext, url: &str) -> Result<bool> {
        self.transport
            .call(ctx, "admin_addTrustedPeer", rpc_params![url])
            .await
    }

    /// Drop `url` from the trusted set. An existing connection is kept.
    pub async fn remove_trusted_peer(&self, ctx: &CallContext, url: &str) -> Result<bool> {
        self.transport
            .call(ctx, "admin_removeTrustedPeer", rpc_params![url])
            .await
    }

    /// Export the chain to `file`, or only blocks `first..=last` when both are given.
    pub async fn export_chain(
        &self,
        ctx: &CallContext,
        file: &str,
        first: Option<u64>,
        last: Option<u64>,
    ) -> Result<bool> {
        self.transport
            .call(ctx, "admin_exportChain", rpc_params![file, first, last])
            .await
    }

    pub async fn import_chain(&self, ctx: &CallContext, file: &str) -> Result<bool> {
        self.transport
            .call(ctx, "admin_importChain", rpc_params![file])
            .await
    }

    pub async fn start_http(
        &self,
        ctx: &CallContext,
        host: Option<&str>,
        port: Option<u16>,
        cors: Option<&str>,
        apis: Option<&str>,
        vhosts: Option<&str>,
    ) -> Result<bool> {
        self.transport
            .call(
                ctx,
                "admin_startHTTP",
                rpc_params![host, port, cors, apis, vhosts],
            )
            .await
    }

    pub async fn stop_http(&self, ctx: &CallContext) -> Result<bool> {
        self.transport.call(ctx, "admin_stopHTTP", rpc_params![]).await
    }

    #[deprecated(note = "use `start_http`")]
    pub async fn start_rpc(
        &self,
        ctx: &CallContext,
        host: Option<&str>,
        port: Option<u16>,
        cors: Option<&str>,
        apis: Option<&str>,
        vhosts: Option<&str>,
    ) -> Result<bool> {
        tracing::warn!(
            method = "admin_startRPC",
            use_instead = "admin_startHTTP",
            "deprecated endpoint"
        );
        self.transport
            .call(
                ctx,
                "admin_startRPC",
                rpc_params![host, port, cors, apis, vhosts],
            )
            .await
    }

    #[deprecated(note = "use `stop_http`")]
    pub async fn stop_rpc(&self, ctx: &CallContext) -> Result<bool> {
        tracing::warn!(
            method = "admin_stopRPC",
            use_instead = "admin_stopHTTP",
            "deprecated endpoint"
        );
        self.transport.call(ctx, "admin_stopRPC", rpc_params![]).await
    }

    pub async fn start_ws(
        &self,
        ctx: &CallContext,
        host: Option<&str>,
        port: Option<u16>,
        allowed_origins: Option<&str>,
        apis: Option<&str>,
    ) -> Result<bool> {
        self.transport
            .call(
                ctx,
                "admin_startWS",
                rpc_params![host, port, allowed_origins, apis],
            )
            .await
    }

    pub async fn stop_ws(&self, ctx: &CallContext) -> Result<bool> {
        self.transport.call(ctx, "admin_stopWS", rpc_params![]).await
    }
}
