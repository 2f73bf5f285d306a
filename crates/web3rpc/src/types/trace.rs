//! Tracer configuration and trace results for the debug namespace.

use std::collections::BTreeMap;

use alloy_primitives::{Address, Bytes, B256, U256};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::state::{BlockOverrides, StateOverride};

/// Options of the default struct logger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub enable_memory: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disable_stack: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disable_storage: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub enable_return_data: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub debug: bool,
    /// Maximum number of struct logs to capture; 0 means unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Value>,
}

/// Options for `debug_trace*` calls.
///
/// Without `tracer` the struct logger runs and the result is a
/// [`StructLogResult`]. A named tracer such as `callTracer` produces its own
/// shape, so results are kept as raw JSON in [`TraceResult`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceConfig {
    #[serde(flatten)]
    pub logger: LoggerConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracer: Option<String>,
    /// Go duration string, e.g. `"5s"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reexec: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracer_config: Option<Value>,
}

impl TraceConfig {
    pub fn call_tracer() -> Self {
        Self::with_tracer("callTracer")
    }

    pub fn with_tracer(tracer: impl Into<String>) -> Self {
        Self {
            tracer: Some(tracer.into()),
            ..Default::default()
        }
    }

    pub fn timeout(mut self, timeout: impl Into<String>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }

    pub fn tracer_config(mut self, config: Value) -> Self {
        self.tracer_config = Some(config);
        self
    }
}

/// Options for `debug_traceCall`: a [`TraceConfig`] plus overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceCallConfig {
    #[serde(flatten)]
    pub config: TraceConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_overrides: Option<StateOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_overrides: Option<BlockOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_index: Option<u64>,
}

impl From<TraceConfig> for TraceCallConfig {
    fn from(config: TraceConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }
}

/// Options for the `debug_standardTrace*` family, which write traces to files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StdTraceConfig {
    #[serde(flatten)]
    pub logger: LoggerConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reexec: Option<u64>,
    /// Only trace this transaction; all transactions when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<B256>,
}

/// Tracer output, kept as JSON since its shape depends on the tracer used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceResult(pub Value);

impl TraceResult {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.0)
    }

    /// Decode output of the default struct logger.
    pub fn struct_logs(&self) -> Result<StructLogResult, serde_json::Error> {
        self.decode()
    }

    /// Decode output of `callTracer`.
    pub fn call_frame(&self) -> Result<CallFrame, serde_json::Error> {
        self.decode()
    }
}

/// One entry of a block trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxTraceResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<B256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<TraceResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructLogResult {
    pub gas: u64,
    pub failed: bool,
    pub return_value: String,
    pub struct_logs: Vec<StructLog>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructLog {
    pub pc: u64,
    pub op: String,
    pub gas: u64,
    pub gas_cost: u64,
    pub depth: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund: Option<u64>,
}

/// Output of `callTracer`: one frame per message call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallFrame {
    #[serde(rename = "type")]
    pub call_type: String,
    pub from: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    pub gas: U256,
    pub gas_used: U256,
    pub input: Bytes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revert_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub calls: Vec<CallFrame>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn trace_config_flattens_logger_options() {
        let mut config = TraceConfig::call_tracer().timeout("10s");
        config.logger.disable_storage = true;
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({ "disableStorage": true, "tracer": "callTracer", "timeout": "10s" })
        );
        assert_eq!(serde_json::to_value(TraceConfig::default()).unwrap(), json!({}));
    }

    #[test]
    fn call_frame_from_trace_result() {
        let result = TraceResult(json!({
            "type": "CALL",
            "from": Address::repeat_byte(1),
            "to": Address::repeat_byte(2),
            "value": "0x0",
            "gas": "0x5208",
            "gasUsed": "0x5208",
            "input": "0x",
            "calls": [{
                "type": "STATICCALL",
                "from": Address::repeat_byte(2),
                "to": Address::repeat_byte(3),
                "gas": "0x100",
                "gasUsed": "0x10",
                "input": "0x01"
            }]
        }));
        let frame = result.call_frame().unwrap();
        assert_eq!(frame.call_type, "CALL");
        assert_eq!(frame.calls.len(), 1);
        assert_eq!(frame.calls[0].call_type, "STATICCALL");
        assert!(result.struct_logs().is_err());
    }

    #[test]
    fn struct_logger_output() {
        let result = TraceResult(json!({
            "gas": 21000,
            "failed": false,
            "returnValue": "",
            "structLogs": [{ "pc": 0, "op": "PUSH1", "gas": 100, "gasCost": 3, "depth": 1 }]
        }));
        let logs = result.struct_logs().unwrap();
        assert_eq!(logs.gas, 21000);
        assert_eq!(logs.struct_logs[0].op, "PUSH1");
    }
}
