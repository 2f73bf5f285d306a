//! `clique` namespace: proof-of-authority signer management.

use std::collections::BTreeMap;
use std::sync::Arc;

use web3rpc_core::{rpc_params, CallContext, RpcTransport, RpcTransportExt};

use crate::types::{Address, BlockNumber, BlockNumberOrHashOrRlp, CliqueStatus, Snapshot, B256};
use crate::Result;

#[derive(Clone)]
pub struct Clique {
    transport: Arc<dyn RpcTransport>,
}

impl Clique {
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    /// Pending proposals of this signer: `true` to authorize, `false` to drop.
    pub async fn proposals(&self, ctx: &CallContext) -> Result<BTreeMap<Address, bool>> {
        self.transport
            .call(ctx, "clique_proposals", rpc_params![])
            .await
    }

    pub async fn status(&self, ctx: &CallContext) -> Result<CliqueStatus> {
        self.transport.call(ctx, "clique_status", rpc_params![]).await
    }

    /// Withdraw this signer's pending proposal for `address`.
    pub async fn discard(&self, ctx: &CallContext, address: Address) -> Result<()> {
        self.transport
            .execute(ctx, "clique_discard", rpc_params![address])
            .await
    }

    /// Recover the signer of a block, or of the head when `block` is `None`.
    pub async fn get_signer(
        &self,
        ctx: &CallContext,
        block: Option<BlockNumberOrHashOrRlp>,
    ) -> Result<Address> {
        self.transport
            .call(ctx, "clique_getSigner", rpc_params![block])
            .await
    }

    /// Authorized signers at `number`, or at the head when `None`.
    pub async fn get_signers(
        &self,
        ctx: &CallContext,
        number: Option<BlockNumber>,
    ) -> Result<Vec<Address>> {
        self.transport
            .call(ctx, "clique_getSigners", rpc_params![number])
            .await
    }

    pub async fn get_signers_at_hash(&self, ctx: &CallContext, hash: B256) -> Result<Vec<Address>> {
        self.transport
            .call(ctx, "clique_getSignersAtHash", rpc_params![hash])
            .await
    }

    pub async fn get_snapshot(
        &self,
        ctx: &CallContext,
        number: Option<BlockNumber>,
    ) -> Result<Snapshot> {
        self.transport
            .call(ctx, "clique_getSnapshot", rpc_params![number])
            .await
    }

    pub async fn get_snapshot_at_hash(&self, ctx: &CallContext, hash: B256) -> Result<Snapshot> {
        self.transport
            .call(ctx, "clique_getSnapshotAtHash", rpc_params![hash])
            .await
    }

    /// Vote to add (`auth = true`) or remove `address` as a signer.
    pub async fn propose(&self, ctx: &CallContext, address: Address, auth: bool) -> Result<()> {
        self.transport
            .execute(ctx, "clique_propose", rpc_params![address, auth])
            .await
    }
}
