//! Value shapes that cross the RPC boundary.
//!
//! Types used by more than one namespace (transaction arguments, RPC
//! transactions, state overrides, trace results) are defined once here.

pub mod account;
pub mod block;
pub mod clique;
pub mod debug;
pub mod filter;
pub mod node;
pub mod state;
pub mod sync;
pub mod trace;
pub mod transaction;
pub mod txpool;

pub use alloy_primitives::{Address, Bytes, B256, B64, U256, U64};

pub use account::{Account, RawWallet};
pub use block::{
    Block, BlockNumber, BlockNumberOrHash, BlockTransactions, Header, ParseBlockNumberError,
    Withdrawal,
};
pub use clique::{BlockNumberOrHashOrRlp, CliqueStatus, Snapshot, Tally, Vote};
pub use debug::{BadBlockArgs, Dump, DumpAccount, RuntimeStats, StorageEntry, StorageRangeResult};
pub use filter::{FeeHistory, FilterChanges, FilterId, FilterQuery, Log, ValueOrArray};
pub use node::{NodeInfo, NodePorts, PeerInfo, PeerNetworkInfo};
pub use state::{AccountResult, BlockOverrides, OverrideAccount, StateOverride, StorageResult};
pub use sync::{SyncProgress, SyncStatus};
pub use trace::{
    CallFrame, LoggerConfig, StdTraceConfig, StructLog, StructLogResult, TraceCallConfig,
    TraceConfig, TraceResult, TxTraceResult,
};
pub use transaction::{
    AccessList, AccessListItem, AccessListResult, RpcTransaction, SignTransactionResult,
    SignedTransaction, TransactionArgs, TransactionReceipt,
};
pub use txpool::{TxPoolContent, TxPoolContentFrom, TxPoolInspect, TxPoolStatus};
