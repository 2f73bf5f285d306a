//! The facade root.

use std::fmt;
use std::sync::Arc;

use web3rpc_core::RpcTransport;

use crate::{Admin, Clique, Debug, Eth, Miner, Net, Personal, Rpc, TxPool};

/// One transport handle, nine namespace views of it.
///
/// Construction performs no I/O. Every sub-client holds a clone of the same
/// `Arc`, so calls through any of them share the transport's connection and
/// request-id space. `Web3` is cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct Web3 {
    transport: Arc<dyn RpcTransport>,
    admin: Admin,
    clique: Clique,
    debug: Debug,
    eth: Eth,
    miner: Miner,
    net: Net,
    personal: Personal,
    rpc: Rpc,
    txpool: TxPool,
}

impl Web3 {
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self {
            admin: Admin::new(transport.clone()),
            clique: Clique::new(transport.clone()),
            debug: Debug::new(transport.clone()),
            eth: Eth::new(transport.clone()),
            miner: Miner::new(transport.clone()),
            net: Net::new(transport.clone()),
            personal: Personal::new(transport.clone()),
            rpc: Rpc::new(transport.clone()),
            txpool: TxPool::new(transport.clone()),
            transport,
        }
    }

    pub fn admin(&self) -> &Admin {
        &self.admin
    }

    pub fn clique(&self) -> &Clique {
        &self.clique
    }

    pub fn debug(&self) -> &Debug {
        &self.debug
    }

    pub fn eth(&self) -> &Eth {
        &self.eth
    }

    pub fn miner(&self) -> &Miner {
        &self.miner
    }

    pub fn net(&self) -> &Net {
        &self.net
    }

    pub fn personal(&self) -> &Personal {
        &self.personal
    }

    pub fn rpc(&self) -> &Rpc {
        &self.rpc
    }

    pub fn txpool(&self) -> &TxPool {
        &self.txpool
    }

    /// The shared transport handle.
    pub fn transport(&self) -> &Arc<dyn RpcTransport> {
        &self.transport
    }
}

impl From<Arc<dyn RpcTransport>> for Web3 {
    fn from(transport: Arc<dyn RpcTransport>) -> Self {
        Self::new(transport)
    }
}

impl fmt::Debug for Web3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Web3")
            .field("url", &self.transport.url())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use web3rpc_core::{CallContext, MockTransport};

    use super::*;

    #[test]
    fn construction_sends_nothing() {
        let mock = MockTransport::new();
        let web3 = Web3::new(Arc::new(mock.clone()));
        assert!(mock.requests().is_empty());
        assert_eq!(web3.transport().url(), "mock");
        assert!(format!("{web3:?}").contains("mock"));
    }

    #[tokio::test]
    async fn sub_clients_share_one_transport() {
        let mock = MockTransport::new();
        mock.respond("net_listening", serde_json::json!(true))
            .respond("eth_mining", serde_json::json!(false));
        let web3 = Web3::from(Arc::new(mock.clone()) as Arc<dyn RpcTransport>);
        let ctx = CallContext::background();

        assert!(web3.net().listening(&ctx).await.unwrap());
        assert!(!web3.eth().mining(&ctx).await.unwrap());

        let ids: Vec<_> = mock.requests().iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }
}
