//! HTTP JSON-RPC client backed by `reqwest`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use web3rpc_core::error::TransportError;
use web3rpc_core::request::{JsonRpcRequest, JsonRpcResponse};
use web3rpc_core::transport::RpcTransport;

/// Configuration for `HttpRpcClient`.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Upper bound on one POST, enforced by the HTTP client.
    pub request_timeout: Duration,
    /// Extra headers sent with every request (e.g. `Authorization`).
    pub headers: Vec<(String, String)>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            headers: Vec::new(),
        }
    }
}

/// HTTP JSON-RPC client.
pub struct HttpRpcClient {
    url: String,
    http: reqwest::Client,
    request_timeout: Duration,
    ids: AtomicU64,
}

impl HttpRpcClient {
    /// Create a new client for the given JSON-RPC endpoint URL.
    pub fn new(url: impl Into<String>, config: HttpClientConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TransportError::Other(format!("invalid header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| TransportError::Other(format!("invalid header value: {e}")))?;
            headers.insert(name, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| TransportError::Http(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            http,
            request_timeout: config.request_timeout,
            ids: AtomicU64::new(1),
        })
    }

    /// Create with default configuration.
    pub fn default_for(url: impl Into<String>) -> Result<Self, TransportError> {
        Self::new(url, HttpClientConfig::default())
    }

    fn map_reqwest(&self, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout {
                ms: timeout_ms(self.request_timeout),
            }
        } else {
            TransportError::Http(e.to_string())
        }
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn timeout_ms(timeout: Duration) -> u64 {
    u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)
}

#[async_trait]
impl RpcTransport for HttpRpcClient {
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError> {
        let resp = self
            .http
            .post(&self.url)
            .json(&req)
            .send()
            .await
            .map_err(|e| self.map_reqwest(e))?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| self.map_reqwest(e))?;

        // Nodes answer JSON-RPC errors with non-2xx codes too; prefer the
        // error object when the body carries one.
        match serde_json::from_slice::<JsonRpcResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => {
                let text = String::from_utf8_lossy(&body);
                tracing::debug!(status = status.as_u16(), url = %self.url, "non-JSON error body");
                Err(TransportError::Http(format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    text.trim()
                )))
            }
            Err(e) => Err(TransportError::Http(format!("malformed JSON-RPC response: {e}"))),
        }
    }

    fn next_id(&self) -> u64 {
        self.ids.fetch_add(1, Ordering::Relaxed)
    }

    fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = HttpClientConfig::default();
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.headers.is_empty());
    }

    #[test]
    fn ids_increase() {
        let client = HttpRpcClient::default_for("http://127.0.0.1:8545").unwrap();
        let first = client.next_id();
        assert_eq!(client.next_id(), first + 1);
        assert_eq!(client.url(), "http://127.0.0.1:8545");
    }

    #[test]
    fn timeout_ms_saturates() {
        assert_eq!(timeout_ms(Duration::from_millis(1500)), 1500);
        assert_eq!(timeout_ms(Duration::MAX), u64::MAX);
    }

    #[test]
    fn rejects_bad_header() {
        let config = HttpClientConfig {
            headers: vec![("bad header".into(), "x".into())],
            ..Default::default()
        };
        assert!(HttpRpcClient::new("http://127.0.0.1:8545", config).is_err());
    }

    #[tokio::test]
    async fn unreachable_node_is_transport_failure() {
        let config = HttpClientConfig {
            request_timeout: Duration::from_millis(500),
            ..Default::default()
        };
        // Port 9 (discard) on loopback is closed on test machines.
        let client = HttpRpcClient::new("http://127.0.0.1:9", config).unwrap();
        let err = client
            .send(JsonRpcRequest::new(1, "net_version", vec![]))
            .await
            .unwrap_err();
        assert!(err.is_transport_failure());
    }
}
