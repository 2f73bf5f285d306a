//! State overrides and Merkle proofs.

use std::collections::BTreeMap;

use alloy_primitives::{Address, Bytes, B256, U256, U64};
use serde::{Deserialize, Serialize};

/// Temporary replacement of one account's state for a single call.
///
/// `state` replaces the whole storage, `state_diff` patches individual slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<U64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Bytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<BTreeMap<B256, B256>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_diff: Option<BTreeMap<B256, B256>>,
}

pub type StateOverride = BTreeMap<Address, OverrideAccount>;

/// Header fields to override while executing a call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<U64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<U64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coinbase: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random: Option<B256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_fee: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_base_fee: Option<U256>,
}

/// Result of `eth_getProof`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResult {
    pub address: Address,
    pub account_proof: Vec<Bytes>,
    pub balance: U256,
    pub code_hash: B256,
    pub nonce: U64,
    pub storage_hash: B256,
    pub storage_proof: Vec<StorageResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageResult {
    pub key: String,
    pub value: U256,
    pub proof: Vec<Bytes>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn override_keyed_by_address() {
        let addr = Address::repeat_byte(0x01);
        let mut overrides = StateOverride::new();
        overrides.insert(
            addr,
            OverrideAccount {
                balance: Some(U256::from(1000)),
                ..Default::default()
            },
        );
        let value = serde_json::to_value(&overrides).unwrap();
        let key = serde_json::to_value(addr).unwrap();
        let key = key.as_str().unwrap();
        assert_eq!(value[key], json!({ "balance": "0x3e8" }));
        assert_eq!(value.as_object().unwrap().len(), 1);
    }
}
