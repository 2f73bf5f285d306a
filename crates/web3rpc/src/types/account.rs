use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// An account held by one of the node's wallets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: Address,
    /// Wallet URL, e.g. `keystore:///path/to/key`.
    pub url: String,
}

/// A wallet as listed by `personal_listWallets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWallet {
    pub url: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    #[serde(default)]
    pub accounts: Vec<Account>,
}
