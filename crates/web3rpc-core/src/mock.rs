//! In-memory transport for tests.
//!
//! `MockTransport` records every request it receives and answers from a
//! per-method table of canned replies. Methods without a reply get the
//! node's "method not found" error.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;
use crate::request::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::transport::RpcTransport;

type ErrorFactory = Arc<dyn Fn() -> TransportError + Send + Sync>;

#[derive(Clone)]
enum Reply {
    Result(Value),
    Rpc(JsonRpcError),
    Fail(ErrorFactory),
    Hang,
}

#[derive(Default)]
struct MockState {
    replies: HashMap<String, Reply>,
    fallback: Option<Reply>,
    requests: Vec<JsonRpcRequest>,
}

/// Recording transport with canned replies. Clones share state.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
    ids: Arc<AtomicU64>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // A panicking test thread must not hide the recorded requests.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Answer `method` with `result`.
    pub fn respond(&self, method: &str, result: Value) -> &Self {
        self.state()
            .replies
            .insert(method.to_string(), Reply::Result(result));
        self
    }

    /// Answer `method` with a JSON-RPC error object.
    pub fn respond_error(&self, method: &str, error: JsonRpcError) -> &Self {
        self.state()
            .replies
            .insert(method.to_string(), Reply::Rpc(error));
        self
    }

    /// Fail `method` at the transport level with the error built by `make`.
    pub fn fail<F>(&self, method: &str, make: F) -> &Self
    where
        F: Fn() -> TransportError + Send + Sync + 'static,
    {
        self.state()
            .replies
            .insert(method.to_string(), Reply::Fail(Arc::new(make)));
        self
    }

    /// Fail every method without an explicit reply.
    pub fn fail_all<F>(&self, make: F) -> &Self
    where
        F: Fn() -> TransportError + Send + Sync + 'static,
    {
        self.state().fallback = Some(Reply::Fail(Arc::new(make)));
        self
    }

    /// Answer every method without an explicit reply with `result`.
    pub fn respond_all(&self, result: Value) -> &Self {
        self.state().fallback = Some(Reply::Result(result));
        self
    }

    /// Never answer `method`.
    pub fn hang(&self, method: &str) -> &Self {
        self.state().replies.insert(method.to_string(), Reply::Hang);
        self
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<JsonRpcRequest> {
        self.state().requests.clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<JsonRpcRequest> {
        self.state().requests.last().cloned()
    }

    /// Forget recorded requests, keeping the replies.
    pub fn clear_requests(&self) {
        self.state().requests.clear();
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError> {
        let reply = {
            let mut state = self.state();
            state.requests.push(req.clone());
            state
                .replies
                .get(&req.method)
                .cloned()
                .or_else(|| state.fallback.clone())
        };

        match reply {
            Some(Reply::Result(value)) => Ok(JsonRpcResponse::success(req.id, value)),
            Some(Reply::Rpc(error)) => Ok(JsonRpcResponse::failure(req.id, error)),
            Some(Reply::Fail(make)) => Err(make()),
            Some(Reply::Hang) => std::future::pending().await,
            None => Ok(JsonRpcResponse::failure(
                req.id,
                JsonRpcError {
                    code: -32601,
                    message: format!(
                        "the method {} does not exist/is not available",
                        req.method
                    ),
                    data: None,
                },
            )),
        }
    }

    fn next_id(&self) -> u64 {
        self.ids.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn url(&self) -> &str {
        "mock"
    }
}
