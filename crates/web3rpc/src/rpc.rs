use std::collections::BTreeMap;
use std::sync::Arc;

use web3rpc_core::{rpc_params, CallContext, RpcTransport, RpcTransportExt};

use crate::Result;

/// `rpc` namespace: introspection of the server itself.
#[derive(Clone)]
pub struct Rpc {
    transport: Arc<dyn RpcTransport>,
}

impl Rpc {
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    /// Enabled API namespaces mapped to their version, e.g. `"eth" => "1.0"`.
    pub async fn modules(&self, ctx: &CallContext) -> Result<BTreeMap<String, String>> {
        self.transport.call(ctx, "rpc_modules", rpc_params![]).await
    }
}
