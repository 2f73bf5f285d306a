//! Clique proof-of-authority snapshots and status.

use std::collections::BTreeMap;

use alloy_primitives::{Address, Bytes, B256};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::block::BlockNumberOrHash;

/// Argument of `clique_getSigner`: a block selector or a raw RLP header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNumberOrHashOrRlp {
    Block(BlockNumberOrHash),
    Rlp(Bytes),
}

impl Serialize for BlockNumberOrHashOrRlp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Block(b) => b.serialize(serializer),
            Self::Rlp(rlp) => rlp.serialize(serializer),
        }
    }
}

impl From<BlockNumberOrHash> for BlockNumberOrHashOrRlp {
    fn from(b: BlockNumberOrHash) -> Self {
        Self::Block(b)
    }
}

impl From<Bytes> for BlockNumberOrHashOrRlp {
    fn from(rlp: Bytes) -> Self {
        Self::Rlp(rlp)
    }
}

/// Voting state of the authorization scheme at a given block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub number: u64,
    pub hash: B256,
    /// Authorized signers; values are empty placeholders on the wire.
    pub signers: BTreeMap<Address, Value>,
    /// Recent signers keyed by the block number they signed.
    pub recents: BTreeMap<u64, Address>,
    #[serde(default)]
    pub votes: Vec<Vote>,
    #[serde(default)]
    pub tally: BTreeMap<Address, Tally>,
}

impl Snapshot {
    pub fn signer_addresses(&self) -> Vec<Address> {
        self.signers.keys().copied().collect()
    }
}

/// A single vote cast by a signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub signer: Address,
    pub block: u64,
    pub address: Address,
    pub authorize: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub authorize: bool,
    pub votes: u64,
}

/// Signing statistics from `clique_status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliqueStatus {
    pub inturn_percent: f64,
    pub sealer_activity: BTreeMap<Address, u64>,
    pub num_blocks: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::BlockNumber;

    #[test]
    fn signer_argument_forms() {
        let arg = BlockNumberOrHashOrRlp::from(BlockNumberOrHash::from(BlockNumber::Latest));
        assert_eq!(serde_json::to_value(&arg).unwrap(), json!("latest"));
        let arg = BlockNumberOrHashOrRlp::from(Bytes::from(vec![0xf9, 0x02]));
        assert_eq!(serde_json::to_value(&arg).unwrap(), json!("0xf902"));
    }

    #[test]
    fn snapshot_parses() {
        let signer = Address::repeat_byte(0x5a);
        let mut signers = serde_json::Map::new();
        signers.insert(serde_json::to_value(signer).unwrap().as_str().unwrap().to_string(), json!({}));
        let mut recents = serde_json::Map::new();
        recents.insert("7".to_string(), serde_json::to_value(signer).unwrap());
        let snapshot: Snapshot = serde_json::from_value(json!({
            "number": 7,
            "hash": B256::repeat_byte(1),
            "signers": signers,
            "recents": recents,
            "votes": [],
            "tally": {}
        }))
        .unwrap();
        assert_eq!(snapshot.signer_addresses(), vec![signer]);
        assert_eq!(snapshot.recents[&7], signer);
    }
}
