//! State dumps and other debug namespace results.

use std::collections::BTreeMap;

use alloy_primitives::{Address, Bytes, B256};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::block::Block;

/// A full or partial state dump.
///
/// Accounts are keyed by address when the preimage is known, otherwise by
/// the `0x`-prefixed account key hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dump {
    pub root: String,
    pub accounts: BTreeMap<String, DumpAccount>,
    /// Resume key for iterative dumps; absent when the dump is complete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DumpAccount {
    /// Decimal balance.
    pub balance: String,
    pub nonce: u64,
    pub root: String,
    pub code_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Result of `debug_storageRangeAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageRangeResult {
    /// Keyed by the hashed slot.
    pub storage: BTreeMap<B256, StorageEntry>,
    pub next_key: Option<B256>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageEntry {
    /// Slot preimage, when the node knows it.
    pub key: Option<B256>,
    pub value: B256,
}

/// A block the node rejected, as returned by `debug_getBadBlocks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadBlockArgs {
    pub hash: B256,
    pub block: Block,
    pub rlp: Bytes,
}

/// Go runtime statistics from `debug_memStats`; field set varies by Go version.
pub type RuntimeStats = serde_json::Map<String, Value>;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn dump_with_resume_key() {
        let dump: Dump = serde_json::from_value(json!({
            "root": "0xabc",
            "accounts": {
                "0x0000000000000000000000000000000000000001": {
                    "balance": "1000",
                    "nonce": 3,
                    "root": "0x56e8",
                    "codeHash": "0xc5d2",
                    "address": "0x0000000000000000000000000000000000000001",
                    "key": "0x1468"
                }
            },
            "next": "AAAA"
        }))
        .unwrap();
        assert_eq!(dump.accounts.len(), 1);
        assert_eq!(dump.next.as_deref(), Some("AAAA"));
        let account = dump.accounts.values().next().unwrap();
        assert_eq!(account.nonce, 3);
        assert_eq!(account.address, Some(Address::with_last_byte(1)));
    }

    #[test]
    fn storage_range_without_next_key() {
        let slot = B256::repeat_byte(0x10);
        let mut storage = serde_json::Map::new();
        storage.insert(slot.to_string(), json!({ "key": null, "value": B256::ZERO }));
        let range: StorageRangeResult = serde_json::from_value(json!({
            "storage": storage,
            "nextKey": null
        }))
        .unwrap();
        assert!(range.next_key.is_none());
        assert_eq!(range.storage[&slot].value, B256::ZERO);
    }
}
