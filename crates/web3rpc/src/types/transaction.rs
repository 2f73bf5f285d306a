//! Transaction arguments, rendered transactions and receipts.

use alloy_primitives::{Address, Bytes, B256, U256, U64};
use serde::{Deserialize, Serialize};

use super::filter::Log;

/// Arguments for calls, gas estimation and transaction submission.
///
/// Every field is optional; the node fills in what it can (nonce, gas, fees).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<U64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<U64>,
    /// Legacy name for `input`, still accepted by the node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Bytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_list: Option<AccessList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<U64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_blob_gas: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_versioned_hashes: Option<Vec<B256>>,
    /// Blob sidecar: raw blobs with their KZG commitments and proofs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blobs: Option<Vec<Bytes>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitments: Option<Vec<Bytes>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proofs: Option<Vec<Bytes>>,
}

impl TransactionArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    pub fn to(mut self, to: Address) -> Self {
        self.to = Some(to);
        self
    }

    pub fn gas(mut self, gas: u64) -> Self {
        self.gas = Some(U64::from(gas));
        self
    }

    pub fn gas_price(mut self, price: U256) -> Self {
        self.gas_price = Some(price);
        self
    }

    pub fn value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(U64::from(nonce));
        self
    }

    pub fn input(mut self, input: impl Into<Bytes>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn access_list(mut self, list: AccessList) -> Self {
        self.access_list = Some(list);
        self
    }

    pub fn blob_fee(mut self, max_fee_per_blob_gas: U256, hashes: Vec<B256>) -> Self {
        self.max_fee_per_blob_gas = Some(max_fee_per_blob_gas);
        self.blob_versioned_hashes = Some(hashes);
        self
    }

    pub fn blob_sidecar(
        mut self,
        blobs: Vec<Bytes>,
        commitments: Vec<Bytes>,
        proofs: Vec<Bytes>,
    ) -> Self {
        self.blobs = Some(blobs);
        self.commitments = Some(commitments);
        self.proofs = Some(proofs);
        self
    }

    /// Call payload, preferring `input` over the legacy `data`.
    pub fn payload(&self) -> Option<&Bytes> {
        self.input.as_ref().or(self.data.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessListItem {
    pub address: Address,
    #[serde(default)]
    pub storage_keys: Vec<B256>,
}

pub type AccessList = Vec<AccessListItem>;

/// Result of `eth_createAccessList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessListResult {
    pub access_list: AccessList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub gas_used: U64,
}

/// A transaction as rendered by the node.
///
/// Block fields are null while the transaction is pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    pub block_hash: Option<B256>,
    pub block_number: Option<U64>,
    pub from: Address,
    pub gas: U64,
    pub gas_price: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_blob_gas: Option<U256>,
    pub hash: B256,
    pub input: Bytes,
    pub nonce: U64,
    pub to: Option<Address>,
    pub transaction_index: Option<U64>,
    pub value: U256,
    #[serde(rename = "type", default)]
    pub tx_type: U64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_list: Option<AccessList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<U64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_versioned_hashes: Option<Vec<B256>>,
    pub v: U256,
    pub r: U256,
    pub s: U256,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_parity: Option<U64>,
}

/// A signed transaction as returned by the signing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTransaction {
    #[serde(rename = "type", default)]
    pub tx_type: U64,
    pub nonce: U64,
    pub gas: U64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_blob_gas: Option<U256>,
    pub to: Option<Address>,
    pub value: U256,
    pub input: Bytes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_list: Option<AccessList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<U64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_versioned_hashes: Option<Vec<B256>>,
    pub v: U256,
    pub r: U256,
    pub s: U256,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_parity: Option<U64>,
    pub hash: B256,
}

/// RLP encoding plus decoded form of a transaction signed by the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignTransactionResult {
    pub raw: Bytes,
    pub tx: SignedTransaction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: B256,
    pub transaction_index: U64,
    pub block_hash: B256,
    pub block_number: U64,
    pub from: Address,
    pub to: Option<Address>,
    pub cumulative_gas_used: U64,
    pub gas_used: U64,
    pub effective_gas_price: Option<U256>,
    pub contract_address: Option<Address>,
    pub logs: Vec<Log>,
    pub logs_bloom: Bytes,
    #[serde(rename = "type", default)]
    pub tx_type: U64,
    /// `1` for success, `0` for failure. Absent on pre-Byzantium receipts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<U64>,
    /// Post-transaction state root on pre-Byzantium receipts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<B256>,
}

impl TransactionReceipt {
    /// Whether execution succeeded; `None` when the receipt predates status codes.
    pub fn succeeded(&self) -> Option<bool> {
        self.status.map(|s| s == U64::from(1))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn transaction_args_omit_unset_fields() {
        let to = Address::repeat_byte(0x22);
        let args = TransactionArgs::new().to(to).gas(21_000).input(vec![0xde, 0xad]);
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({ "to": to, "gas": "0x5208", "input": "0xdead" })
        );
        assert_eq!(serde_json::to_value(TransactionArgs::new()).unwrap(), json!({}));
    }

    #[test]
    fn legacy_data_field_is_kept() {
        let args: TransactionArgs = serde_json::from_value(json!({ "data": "0xdead" })).unwrap();
        assert_eq!(args.payload(), Some(&Bytes::from(vec![0xde, 0xad])));
        assert_eq!(serde_json::to_value(&args).unwrap(), json!({ "data": "0xdead" }));

        let both = TransactionArgs {
            data: Some(Bytes::from(vec![0x01])),
            ..TransactionArgs::new().input(vec![0x02])
        };
        assert_eq!(both.payload(), Some(&Bytes::from(vec![0x02])));
    }

    #[test]
    fn blob_args_serialize() {
        let hash = B256::repeat_byte(0x01);
        let args = TransactionArgs::new()
            .blob_fee(U256::from(7), vec![hash])
            .blob_sidecar(
                vec![Bytes::from(vec![0xaa])],
                vec![Bytes::from(vec![0xbb])],
                vec![Bytes::from(vec![0xcc])],
            );
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({
                "maxFeePerBlobGas": "0x7",
                "blobVersionedHashes": [hash],
                "blobs": ["0xaa"],
                "commitments": ["0xbb"],
                "proofs": ["0xcc"]
            })
        );
    }

    #[test]
    fn blob_transaction_keeps_blob_fields() {
        let hash = B256::repeat_byte(0x01);
        let raw = json!({
            "blockHash": B256::repeat_byte(2),
            "blockNumber": "0x10",
            "from": Address::repeat_byte(3),
            "gas": "0x5208",
            "gasPrice": "0x3b9aca00",
            "maxFeePerGas": "0x3b9aca00",
            "maxPriorityFeePerGas": "0x1",
            "maxFeePerBlobGas": "0x2",
            "hash": B256::repeat_byte(4),
            "input": "0x",
            "nonce": "0x0",
            "to": Address::repeat_byte(5),
            "transactionIndex": "0x0",
            "value": "0x0",
            "type": "0x3",
            "accessList": [],
            "chainId": "0x1",
            "blobVersionedHashes": [hash],
            "v": "0x1",
            "r": "0x2",
            "s": "0x3",
            "yParity": "0x1"
        });
        let tx: RpcTransaction = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(tx.tx_type, U64::from(3));
        assert_eq!(tx.max_fee_per_blob_gas, Some(U256::from(2)));
        assert_eq!(tx.blob_versioned_hashes, Some(vec![hash]));
        assert_eq!(serde_json::to_value(&tx).unwrap(), raw);
    }

    #[test]
    fn receipt_status() {
        let receipt = json!({
            "transactionHash": B256::repeat_byte(1),
            "transactionIndex": "0x0",
            "blockHash": B256::repeat_byte(2),
            "blockNumber": "0x10",
            "from": Address::repeat_byte(3),
            "to": null,
            "cumulativeGasUsed": "0x5208",
            "gasUsed": "0x5208",
            "effectiveGasPrice": "0x3b9aca00",
            "contractAddress": Address::repeat_byte(4),
            "logs": [],
            "logsBloom": "0x00",
            "type": "0x2",
            "status": "0x1"
        });
        let receipt: TransactionReceipt = serde_json::from_value(receipt).unwrap();
        assert_eq!(receipt.succeeded(), Some(true));
        assert_eq!(receipt.tx_type, U64::from(2));
        assert!(receipt.to.is_none());
    }
}
