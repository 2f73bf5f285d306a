//! The `RpcTransport` trait — the transport handle every namespace shares.

use async_trait::async_trait;
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::context::CallContext;
use crate::error::TransportError;
use crate::request::{JsonRpcRequest, JsonRpcResponse, RpcParam};

/// The async transport handle every backend must implement.
///
/// The transport owns connection management, request framing and id
/// correlation. It is assumed to be connected before any namespace client is
/// built from it, and it is released by its owner.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so one handle can serve concurrent
/// calls from every namespace.
///
/// # Object Safety
/// The trait is object-safe and is shared as `Arc<dyn RpcTransport>`.
#[async_trait]
pub trait RpcTransport: Send + Sync + 'static {
    /// Send a single JSON-RPC request and return the response.
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError>;

    /// Allocate the id for the next outgoing request.
    fn next_id(&self) -> u64;

    /// Return the transport's identifier (URL or name).
    fn url(&self) -> &str;
}

/// Typed calls on top of any [`RpcTransport`].
#[async_trait]
pub trait RpcTransportExt: RpcTransport {
    /// Perform one round trip and decode the result into `T`.
    ///
    /// The context is checked before the request is built, so a cancelled or
    /// expired context never reaches the transport.
    async fn call<T>(
        &self,
        ctx: &CallContext,
        method: &str,
        params: Vec<RpcParam>,
    ) -> Result<T, TransportError>
    where
        T: DeserializeOwned + Send,
    {
        if let Some(err) = ctx.err() {
            tracing::warn!(method, error = %err, "call skipped, context already done");
            return Err(err);
        }

        let req = JsonRpcRequest::new(self.next_id(), method, params);
        tracing::debug!(
            method,
            id = %req.id,
            params = req.params.len(),
            url = self.url(),
            "sending request"
        );

        let resp = ctx.run(self.send(req)).await.map_err(|e| {
            if e.is_context_error() {
                tracing::warn!(method, error = %e, "call abandoned");
            }
            e
        })?;
        let result = resp.into_result().map_err(TransportError::Rpc)?;
        tracing::trace!(method, result = %result, "received response");
        serde_json::from_value(result).map_err(TransportError::Deserialization)
    }

    /// Perform one round trip for a command whose payload is discarded.
    async fn execute(
        &self,
        ctx: &CallContext,
        method: &str,
        params: Vec<RpcParam>,
    ) -> Result<(), TransportError> {
        self.call::<IgnoredAny>(ctx, method, params).await?;
        Ok(())
    }
}

impl<T: RpcTransport + ?Sized> RpcTransportExt for T {}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::mock::MockTransport;
    use crate::request::JsonRpcError;

    #[tokio::test]
    async fn call_decodes_result() {
        let mock = MockTransport::new();
        mock.respond("eth_chainId", json!("0x1"));
        let transport: Arc<dyn RpcTransport> = Arc::new(mock.clone());

        let id: String = transport
            .call(&CallContext::background(), "eth_chainId", vec![])
            .await
            .unwrap();
        assert_eq!(id, "0x1");
        assert_eq!(mock.requests()[0].method, "eth_chainId");
    }

    #[tokio::test]
    async fn call_surfaces_rpc_error() {
        let mock = MockTransport::new();
        mock.respond_error(
            "eth_call",
            JsonRpcError {
                code: 3,
                message: "execution reverted".into(),
                data: None,
            },
        );
        let err = mock
            .call::<String>(&CallContext::background(), "eth_call", vec![])
            .await
            .unwrap_err();
        assert_eq!(err.rpc_error().map(|e| e.code), Some(3));
    }

    #[tokio::test]
    async fn call_reports_shape_mismatch_as_decode_error() {
        let mock = MockTransport::new();
        mock.respond("net_listening", json!("yes"));
        let err = mock
            .call::<bool>(&CallContext::background(), "net_listening", vec![])
            .await
            .unwrap_err();
        assert!(err.is_decode_error());
    }

    #[tokio::test]
    async fn execute_discards_any_payload() {
        let mock = MockTransport::new();
        mock.respond("miner_start", json!(null));
        mock.respond("debug_setHead", json!({"ignored": true}));
        let ctx = CallContext::background();
        mock.execute(&ctx, "miner_start", vec![]).await.unwrap();
        mock.execute(&ctx, "debug_setHead", vec![json!("0x10")])
            .await
            .unwrap();
        assert_eq!(mock.requests().len(), 2);
    }

    #[tokio::test]
    async fn cancelled_context_never_reaches_transport() {
        let mock = MockTransport::new();
        mock.respond("net_version", json!("1"));
        let ctx = CallContext::background();
        ctx.cancel();
        let err = mock
            .call::<String>(&ctx, "net_version", vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Cancelled));
        assert!(mock.requests().is_empty());
    }
}
