//! Block selectors, headers and blocks.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{Address, Bytes, B256, B64, U256, U64};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use super::transaction::RpcTransaction;

/// A block height or one of the node's named tags.
///
/// On the wire a height is a hex quantity (`"0x1b4"`), a tag is its lowercase
/// name (`"latest"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockNumber {
    Earliest,
    #[default]
    Latest,
    Pending,
    Finalized,
    Safe,
    Number(u64),
}

impl BlockNumber {
    /// The height, if this is not a tag.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Earliest => Some("earliest"),
            Self::Latest => Some("latest"),
            Self::Pending => Some("pending"),
            Self::Finalized => Some("finalized"),
            Self::Safe => Some("safe"),
            Self::Number(_) => None,
        }
    }

    /// Map geth's negative sentinel heights onto tags.
    fn from_signed(n: i64) -> Option<Self> {
        match n {
            -1 => Some(Self::Pending),
            -2 => Some(Self::Latest),
            -3 => Some(Self::Finalized),
            -4 => Some(Self::Safe),
            n if n >= 0 => Some(Self::Number(n as u64)),
            _ => None,
        }
    }
}

impl From<u64> for BlockNumber {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl fmt::Display for BlockNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag() {
            Some(tag) => f.write_str(tag),
            None => write!(f, "{:#x}", self.as_number().unwrap_or_default()),
        }
    }
}

/// Error returned when a string is neither a tag nor a block height.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid block number {0:?}")]
pub struct ParseBlockNumberError(pub String);

impl FromStr for BlockNumber {
    type Err = ParseBlockNumberError;

    /// Accepts tags, `0x`-prefixed hex heights and plain decimal heights.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s {
            "earliest" => Self::Earliest,
            "latest" => Self::Latest,
            "pending" => Self::Pending,
            "finalized" => Self::Finalized,
            "safe" => Self::Safe,
            other => {
                let n = match other.strip_prefix("0x").or_else(|| other.strip_prefix("0X")) {
                    Some(hex) => u64::from_str_radix(hex, 16),
                    None => other.parse::<u64>(),
                };
                Self::Number(n.map_err(|_| ParseBlockNumberError(s.to_string()))?)
            }
        };
        Ok(parsed)
    }
}

impl Serialize for BlockNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BlockNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BlockNumberVisitor;

        impl<'de> Visitor<'de> for BlockNumberVisitor {
            type Value = BlockNumber;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a block tag or hex block number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(BlockNumber::Number(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                BlockNumber::from_signed(v)
                    .ok_or_else(|| E::custom(format!("invalid block number {v}")))
            }
        }

        deserializer.deserialize_any(BlockNumberVisitor)
    }
}

/// A block addressed by height/tag or by hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockNumberOrHash {
    Number(BlockNumber),
    Hash {
        hash: B256,
        /// Fail instead of answering from a non-canonical block.
        require_canonical: bool,
    },
}

impl BlockNumberOrHash {
    pub fn latest() -> Self {
        Self::Number(BlockNumber::Latest)
    }

    /// Address a block by hash, accepting non-canonical blocks.
    pub fn hash(hash: B256) -> Self {
        Self::Hash {
            hash,
            require_canonical: false,
        }
    }

    /// Address a canonical block by hash.
    pub fn canonical_hash(hash: B256) -> Self {
        Self::Hash {
            hash,
            require_canonical: true,
        }
    }
}

impl Default for BlockNumberOrHash {
    fn default() -> Self {
        Self::latest()
    }
}

impl From<BlockNumber> for BlockNumberOrHash {
    fn from(n: BlockNumber) -> Self {
        Self::Number(n)
    }
}

impl From<u64> for BlockNumberOrHash {
    fn from(n: u64) -> Self {
        Self::Number(BlockNumber::Number(n))
    }
}

impl From<B256> for BlockNumberOrHash {
    fn from(hash: B256) -> Self {
        Self::hash(hash)
    }
}

impl Serialize for BlockNumberOrHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        match self {
            Self::Number(n) => n.serialize(serializer),
            Self::Hash {
                hash,
                require_canonical: false,
            } => hash.serialize(serializer),
            Self::Hash {
                hash,
                require_canonical: true,
            } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("blockHash", hash)?;
                map.serialize_entry("requireCanonical", &true)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for BlockNumberOrHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::String(s) if s.len() == 66 && s.starts_with("0x") => {
                let hash = s.parse::<B256>().map_err(de::Error::custom)?;
                Ok(Self::hash(hash))
            }
            Value::String(s) => s.parse().map(Self::Number).map_err(de::Error::custom),
            Value::Object(map) => {
                if let Some(hash) = map.get("blockHash") {
                    if map.contains_key("blockNumber") {
                        return Err(de::Error::custom(
                            "cannot specify both blockHash and blockNumber",
                        ));
                    }
                    let hash = B256::deserialize(hash).map_err(de::Error::custom)?;
                    let require_canonical = map
                        .get("requireCanonical")
                        .and_then(Value::as_bool)
                        .unwrap_or(false);
                    Ok(Self::Hash {
                        hash,
                        require_canonical,
                    })
                } else if let Some(number) = map.get("blockNumber") {
                    BlockNumber::deserialize(number)
                        .map(Self::Number)
                        .map_err(de::Error::custom)
                } else {
                    Err(de::Error::custom("expected blockHash or blockNumber"))
                }
            }
            Value::Number(n) => n
                .as_i64()
                .and_then(BlockNumber::from_signed)
                .map(Self::Number)
                .ok_or_else(|| de::Error::custom(format!("invalid block number {n}"))),
            other => Err(de::Error::custom(format!(
                "invalid block number or hash {other}"
            ))),
        }
    }
}

/// A block header as rendered by the node.
///
/// `hash`, `nonce` and `miner` are null for the pending block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub hash: Option<B256>,
    pub parent_hash: B256,
    pub sha3_uncles: B256,
    pub miner: Option<Address>,
    pub state_root: B256,
    pub transactions_root: B256,
    pub receipts_root: B256,
    pub logs_bloom: Bytes,
    pub difficulty: U256,
    pub number: U64,
    pub gas_limit: U64,
    pub gas_used: U64,
    pub timestamp: U64,
    pub extra_data: Bytes,
    pub mix_hash: B256,
    pub nonce: Option<B64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_fee_per_gas: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdrawals_root: Option<B256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_gas_used: Option<U64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excess_blob_gas: Option<U64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_beacon_block_root: Option<B256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_hash: Option<B256>,
}

/// The transaction list of a block: hashes only, or full objects when the
/// block was requested with `full_tx = true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockTransactions {
    Hashes(Vec<B256>),
    Full(Vec<RpcTransaction>),
}

impl Default for BlockTransactions {
    fn default() -> Self {
        Self::Hashes(Vec::new())
    }
}

impl BlockTransactions {
    pub fn len(&self) -> usize {
        match self {
            Self::Hashes(h) => h.len(),
            Self::Full(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transaction hashes in block order, whichever form was returned.
    pub fn hashes(&self) -> Vec<B256> {
        match self {
            Self::Hashes(h) => h.clone(),
            Self::Full(t) => t.iter().map(|tx| tx.hash).collect(),
        }
    }
}

/// A validator withdrawal (post-Shanghai blocks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    pub index: U64,
    pub validator_index: U64,
    pub address: Address,
    pub amount: U64,
}

/// A block: header fields plus body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(flatten)]
    pub header: Header,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<U64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_difficulty: Option<U256>,
    #[serde(default)]
    pub uncles: Vec<B256>,
    #[serde(default)]
    pub transactions: BlockTransactions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdrawals: Option<Vec<Withdrawal>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn block_number_wire_form() {
        assert_eq!(serde_json::to_value(BlockNumber::Number(0)).unwrap(), json!("0x0"));
        assert_eq!(serde_json::to_value(BlockNumber::Number(436)).unwrap(), json!("0x1b4"));
        assert_eq!(serde_json::to_value(BlockNumber::Latest).unwrap(), json!("latest"));
        assert_eq!(serde_json::to_value(BlockNumber::Finalized).unwrap(), json!("finalized"));
    }

    #[test]
    fn block_number_parses_tags_hex_and_sentinels() {
        let n: BlockNumber = serde_json::from_value(json!("0x1b4")).unwrap();
        assert_eq!(n, BlockNumber::Number(436));
        let n: BlockNumber = serde_json::from_value(json!("safe")).unwrap();
        assert_eq!(n, BlockNumber::Safe);
        let n: BlockNumber = serde_json::from_value(json!(-1)).unwrap();
        assert_eq!(n, BlockNumber::Pending);
        assert!(serde_json::from_value::<BlockNumber>(json!("tomorrow")).is_err());
        assert_eq!("1234".parse::<BlockNumber>().unwrap(), BlockNumber::Number(1234));
    }

    #[test]
    fn block_number_or_hash_wire_form() {
        let hash = B256::repeat_byte(0xab);
        assert_eq!(
            serde_json::to_value(BlockNumberOrHash::hash(hash)).unwrap(),
            serde_json::to_value(hash).unwrap()
        );
        assert_eq!(
            serde_json::to_value(BlockNumberOrHash::canonical_hash(hash)).unwrap(),
            json!({ "blockHash": hash, "requireCanonical": true })
        );
        assert_eq!(
            serde_json::to_value(BlockNumberOrHash::from(16u64)).unwrap(),
            json!("0x10")
        );
    }

    #[test]
    fn block_number_or_hash_parses_all_forms() {
        let hash = B256::repeat_byte(0x11);
        let parsed: BlockNumberOrHash =
            serde_json::from_value(serde_json::to_value(hash).unwrap()).unwrap();
        assert_eq!(parsed, BlockNumberOrHash::hash(hash));

        let parsed: BlockNumberOrHash =
            serde_json::from_value(json!({ "blockHash": hash, "requireCanonical": true })).unwrap();
        assert_eq!(parsed, BlockNumberOrHash::canonical_hash(hash));

        let parsed: BlockNumberOrHash =
            serde_json::from_value(json!({ "blockNumber": "pending" })).unwrap();
        assert_eq!(parsed, BlockNumber::Pending.into());

        assert!(serde_json::from_value::<BlockNumberOrHash>(
            json!({ "blockHash": hash, "blockNumber": "0x1" })
        )
        .is_err());
    }

    #[test]
    fn block_transactions_hashes_or_full() {
        let hashes: BlockTransactions =
            serde_json::from_value(json!([B256::repeat_byte(1), B256::repeat_byte(2)])).unwrap();
        assert_eq!(hashes.len(), 2);
        assert!(matches!(hashes, BlockTransactions::Hashes(_)));

        let empty: BlockTransactions = serde_json::from_value(json!([])).unwrap();
        assert!(empty.is_empty());
    }
}
