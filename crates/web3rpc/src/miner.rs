//! `miner` namespace: block production controls.

use std::sync::Arc;

use web3rpc_core::{rpc_params, CallContext, RpcTransport, RpcTransportExt};

use crate::types::{Address, U256, U64};
use crate::Result;

#[derive(Clone)]
pub struct Miner {
    transport: Arc<dyn RpcTransport>,
}

impl Miner {
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    pub async fn start(&self, ctx: &CallContext) -> Result<()> {
        self.transport.execute(ctx, "miner_start", rpc_params![]).await
    }

    pub async fn stop(&self, ctx: &CallContext) -> Result<()> {
        self.transport.execute(ctx, "miner_stop", rpc_params![]).await
    }

    /// Set the address that receives block rewards.
    pub async fn set_etherbase(&self, ctx: &CallContext, etherbase: Address) -> Result<bool> {
        self.transport
            .call(ctx, "miner_setEtherbase", rpc_params![etherbase])
            .await
    }

    /// Set the extra-data field of sealed blocks (at most 32 bytes).
    pub async fn set_extra(&self, ctx: &CallContext, extra: &str) -> Result<bool> {
        self.transport
            .call(ctx, "miner_setExtra", rpc_params![extra])
            .await
    }

    /// Set the minimum gas price accepted into mined blocks.
    pub async fn set_gas_price(&self, ctx: &CallContext, gas_price: U256) -> Result<bool> {
        self.transport
            .call(ctx, "miner_setGasPrice", rpc_params![gas_price])
            .await
    }

    pub async fn set_gas_limit(&self, ctx: &CallContext, gas_limit: u64) -> Result<bool> {
        self.transport
            .call(ctx, "miner_setGasLimit", rpc_params![U64::from(gas_limit)])
            .await
    }

    /// Set how often, in milliseconds, the miner recreates the pending block.
    pub async fn set_recommit_interval(&self, ctx: &CallContext, interval_ms: u64) -> Result<()> {
        self.transport
            .execute(ctx, "miner_setRecommitInterval", rpc_params![interval_ms])
            .await
    }

    pub async fn get_hashrate(&self, ctx: &CallContext) -> Result<U64> {
        self.transport
            .call(ctx, "miner_getHashrate", rpc_params![])
            .await
    }
}
