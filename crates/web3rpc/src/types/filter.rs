//! Log filters, logs and fee history.

use alloy_primitives::{Address, Bytes, B256, U256, U64};
use serde::{Deserialize, Serialize};

use super::block::BlockNumber;
use super::transaction::RpcTransaction;

/// A filter field that accepts either one value or a list of alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueOrArray<T> {
    Value(T),
    Array(Vec<T>),
}

impl<T> From<T> for ValueOrArray<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Vec<T>> for ValueOrArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values)
    }
}

/// Criteria for `eth_getLogs` and `eth_newFilter`.
///
/// `block_hash` and the `from_block`/`to_block` range are mutually exclusive.
/// A `None` topic position matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<B256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_block: Option<BlockNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_block: Option<BlockNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<ValueOrArray<Address>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<Option<ValueOrArray<B256>>>,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_block_hash(mut self, hash: B256) -> Self {
        self.block_hash = Some(hash);
        self
    }

    pub fn from_block(mut self, block: impl Into<BlockNumber>) -> Self {
        self.from_block = Some(block.into());
        self
    }

    pub fn to_block(mut self, block: impl Into<BlockNumber>) -> Self {
        self.to_block = Some(block.into());
        self
    }

    pub fn address(mut self, address: impl Into<ValueOrArray<Address>>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Constrain topic position `index`, padding earlier positions with wildcards.
    pub fn topic(mut self, index: usize, topic: impl Into<ValueOrArray<B256>>) -> Self {
        if self.topics.len() <= index {
            self.topics.resize(index + 1, None);
        }
        self.topics[index] = Some(topic.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
    pub block_number: Option<U64>,
    pub transaction_hash: Option<B256>,
    pub transaction_index: Option<U64>,
    pub block_hash: Option<B256>,
    pub log_index: Option<U64>,
    #[serde(default)]
    pub removed: bool,
}

/// Identifier of an installed filter, as handed out by the node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterId(pub String);

impl FilterId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FilterId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for FilterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What `eth_getFilterChanges` returns, depending on the filter kind.
///
/// Block and pending-transaction filters yield hashes, log filters yield logs.
/// Full pending transactions appear when the filter was installed with
/// `full_tx = true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterChanges {
    Hashes(Vec<B256>),
    Logs(Vec<Log>),
    Transactions(Vec<RpcTransaction>),
}

impl FilterChanges {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Hashes(v) => v.is_empty(),
            Self::Logs(v) => v.is_empty(),
            Self::Transactions(v) => v.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeHistory {
    pub oldest_block: U64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<Vec<Vec<U256>>>,
    #[serde(default)]
    pub base_fee_per_gas: Vec<U256>,
    #[serde(default)]
    pub gas_used_ratio: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee_per_blob_gas: Option<Vec<U256>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_gas_used_ratio: Option<Vec<f64>>,
}
