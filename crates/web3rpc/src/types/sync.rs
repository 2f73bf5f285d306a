use alloy_primitives::U64;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Progress counters reported while the node is syncing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncProgress {
    pub starting_block: U64,
    pub current_block: U64,
    pub highest_block: U64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_accounts: Option<U64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_account_bytes: Option<U64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_bytecodes: Option<U64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_bytecode_bytes: Option<U64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_storage: Option<U64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_storage_bytes: Option<U64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healed_trienodes: Option<U64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healed_trienode_bytes: Option<U64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healed_bytecodes: Option<U64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healed_bytecode_bytes: Option<U64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healing_trienodes: Option<U64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healing_bytecode: Option<U64>,
}

/// Result of `eth_syncing`: the literal `false`, or a progress object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    NotSyncing,
    Syncing(Box<SyncProgress>),
}

impl SyncStatus {
    pub fn is_syncing(&self) -> bool {
        matches!(self, Self::Syncing(_))
    }

    pub fn progress(&self) -> Option<&SyncProgress> {
        match self {
            Self::NotSyncing => None,
            Self::Syncing(p) => Some(&**p),
        }
    }
}

impl Serialize for SyncStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NotSyncing => serializer.serialize_bool(false),
            Self::Syncing(progress) => progress.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SyncStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Bool(false) => Ok(Self::NotSyncing),
            Value::Bool(true) => Err(de::Error::custom(
                "eth_syncing returned true without progress",
            )),
            obj @ Value::Object(_) => SyncProgress::deserialize(obj)
                .map(|p| Self::Syncing(Box::new(p)))
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!("invalid sync status {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn false_means_not_syncing() {
        let status: SyncStatus = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(status, SyncStatus::NotSyncing);
        assert!(!status.is_syncing());
        assert_eq!(serde_json::to_value(&status).unwrap(), json!(false));
    }

    #[test]
    fn object_means_syncing() {
        let status: SyncStatus = serde_json::from_value(json!({
            "startingBlock": "0x0",
            "currentBlock": "0x64",
            "highestBlock": "0xc8"
        }))
        .unwrap();
        let progress = status.progress().unwrap();
        assert_eq!(progress.current_block, U64::from(100));
        assert_eq!(progress.highest_block, U64::from(200));
    }

    #[test]
    fn true_is_rejected() {
        assert!(serde_json::from_value::<SyncStatus>(json!(true)).is_err());
    }
}
