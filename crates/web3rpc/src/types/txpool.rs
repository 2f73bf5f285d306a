//! Transaction pool views.
//!
//! The outer key is the pool section (`"pending"`, `"queued"`), transactions
//! are keyed by their decimal nonce.

use std::collections::BTreeMap;

use alloy_primitives::{Address, U64};

use super::transaction::RpcTransaction;

/// Full pool contents, grouped by section and sender.
pub type TxPoolContent = BTreeMap<String, BTreeMap<Address, BTreeMap<String, RpcTransaction>>>;

/// Pool contents for a single sender, grouped by section.
pub type TxPoolContentFrom = BTreeMap<String, BTreeMap<String, RpcTransaction>>;

/// One-line textual summaries, e.g. `"0x0216…: 1 wei + 21000 gas × 1 wei"`.
pub type TxPoolInspect = BTreeMap<String, BTreeMap<Address, BTreeMap<String, String>>>;

/// Number of transactions per section.
pub type TxPoolStatus = BTreeMap<String, U64>;
