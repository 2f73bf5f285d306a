//! Transport-level error types.

use thiserror::Error;

use crate::request::JsonRpcError;

/// Errors that can occur during an RPC call.
///
/// Variants fall into three groups: transport failures (the request never
/// produced a usable response), remote protocol errors (the node answered
/// with a JSON-RPC error object) and decode mismatches (the node answered,
/// but not in the declared shape).
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed (connection refused, bad status, etc.).
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON-RPC protocol-level error returned by the node.
    #[error("RPC error {}: {}", .0.code, .0.message)]
    Rpc(JsonRpcError),

    /// The transport gave up waiting for the node.
    #[error("Request timed out after {ms}ms")]
    Timeout { ms: u64 },

    /// The call context was cancelled.
    #[error("context canceled")]
    Cancelled,

    /// The call context deadline passed before a response arrived.
    #[error("context deadline exceeded")]
    DeadlineExceeded,

    /// A call argument could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Response could not be deserialized into the declared result type.
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// An unexpected error.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Returns `true` if the call failed before a response was decoded:
    /// connection trouble, timeouts and context cancellation.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            Self::Http(_)
                | Self::Timeout { .. }
                | Self::Cancelled
                | Self::DeadlineExceeded
                | Self::Other(_)
        )
    }

    /// Returns `true` if the node answered with a JSON-RPC error object.
    pub fn is_remote_error(&self) -> bool {
        matches!(self, Self::Rpc(_))
    }

    /// Returns `true` if the response payload did not match the result type.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Deserialization(_))
    }

    /// Returns `true` if the failure came from the call context.
    pub fn is_context_error(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }

    /// The remote error object, if the node returned one.
    pub fn rpc_error(&self) -> Option<&JsonRpcError> {
        match self {
            Self::Rpc(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        let remote = TransportError::Rpc(JsonRpcError {
            code: -32601,
            message: "the method eth_foo does not exist/is not available".into(),
            data: None,
        });
        assert!(remote.is_remote_error());
        assert!(!remote.is_transport_failure());
        assert_eq!(remote.rpc_error().map(|e| e.code), Some(-32601));

        let decode: TransportError = serde_json::from_str::<u64>("\"nope\"").unwrap_err().into();
        assert!(decode.is_decode_error());
        assert!(decode.rpc_error().is_none());

        assert!(TransportError::Cancelled.is_transport_failure());
        assert!(TransportError::Cancelled.is_context_error());
        assert!(TransportError::Http("connection refused".into()).is_transport_failure());
        assert!(!TransportError::Timeout { ms: 10 }.is_context_error());
    }

    #[test]
    fn display_matches_context_wording() {
        assert_eq!(TransportError::Cancelled.to_string(), "context canceled");
        assert_eq!(
            TransportError::DeadlineExceeded.to_string(),
            "context deadline exceeded"
        );
    }
}
