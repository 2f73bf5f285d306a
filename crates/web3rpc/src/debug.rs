//! `debug` namespace: chain inspection, tracing and Go runtime profiling.
//!
//! Profiling methods write to files on the node's host; paths are
//! interpreted there, not locally.

use std::sync::Arc;

use web3rpc_core::{rpc_params, CallContext, RpcTransport, RpcTransportExt};

use crate::types::{
    Address, BadBlockArgs, BlockNumber, BlockNumberOrHash, Bytes, Dump, RuntimeStats,
    StdTraceConfig, StorageRangeResult, TraceCallConfig, TraceConfig, TraceResult,
    TransactionArgs, TxTraceResult, B256, U64,
};
use crate::Result;

#[derive(Clone)]
pub struct Debug {
    transport: Arc<dyn RpcTransport>,
}

impl Debug {
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    // ─── chain data ─────────────────────────────────────────────────────────

    /// Page through the state at `block`, starting at account key `start`.
    #[allow(clippy::too_many_arguments)]
    pub async fn account_range(
        &self,
        ctx: &CallContext,
        block: BlockNumberOrHash,
        start: Bytes,
        max_results: u64,
        nocode: bool,
        nostorage: bool,
        incompletes: bool,
    ) -> Result<Dump> {
        self.transport
            .call(
                ctx,
                "debug_accountRange",
                rpc_params![block, start, max_results, nocode, nostorage, incompletes],
            )
            .await
    }

    /// Human-readable dump of a block.
    pub async fn print_block(&self, ctx: &CallContext, number: u64) -> Result<String> {
        self.transport
            .call(ctx, "debug_printBlock", rpc_params![number])
            .await
    }

    pub async fn get_raw_header(&self, ctx: &CallContext, block: BlockNumberOrHash) -> Result<Bytes> {
        self.transport
            .call(ctx, "debug_getRawHeader", rpc_params![block])
            .await
    }

    pub async fn get_raw_block(&self, ctx: &CallContext, block: BlockNumberOrHash) -> Result<Bytes> {
        self.transport
            .call(ctx, "debug_getRawBlock", rpc_params![block])
            .await
    }

    /// Consensus-encoded receipts of every transaction in the block.
    pub async fn get_raw_receipts(
        &self,
        ctx: &CallContext,
        block: BlockNumberOrHash,
    ) -> Result<Vec<Bytes>> {
        self.transport
            .call(ctx, "debug_getRawReceipts", rpc_params![block])
            .await
    }

    pub async fn get_raw_transaction(&self, ctx: &CallContext, hash: B256) -> Result<Bytes> {
        self.transport
            .call(ctx, "debug_getRawTransaction", rpc_params![hash])
            .await
    }

    /// Rewind the local chain to block `number`. Destructive.
    pub async fn set_head(&self, ctx: &CallContext, number: u64) -> Result<()> {
        self.transport
            .execute(ctx, "debug_setHead", rpc_params![U64::from(number)])
            .await
    }

    pub async fn dump_block(&self, ctx: &CallContext, number: BlockNumber) -> Result<Dump> {
        self.transport
            .call(ctx, "debug_dumpBlock", rpc_params![number])
            .await
    }

    pub async fn chaindb_property(&self, ctx: &CallContext, property: &str) -> Result<String> {
        self.transport
            .call(ctx, "debug_chaindbProperty", rpc_params![property])
            .await
    }

    /// Flatten the key-value database. Can take a long time.
    pub async fn chaindb_compact(&self, ctx: &CallContext) -> Result<()> {
        self.transport
            .execute(ctx, "debug_chaindbCompact", rpc_params![])
            .await
    }

    /// Preimage of a sha3 hash, if the node recorded it.
    pub async fn preimage(&self, ctx: &CallContext, hash: B256) -> Result<Bytes> {
        self.transport
            .call(ctx, "debug_preimage", rpc_params![hash])
            .await
    }

    pub async fn get_bad_blocks(&self, ctx: &CallContext) -> Result<Vec<BadBlockArgs>> {
        self.transport
            .call(ctx, "debug_getBadBlocks", rpc_params![])
            .await
    }

    /// Storage of `contract` as seen after transaction `tx_index` of `block`.
    pub async fn storage_range_at(
        &self,
        ctx: &CallContext,
        block: BlockNumberOrHash,
        tx_index: u64,
        contract: Address,
        key_start: Bytes,
        max_result: u64,
    ) -> Result<StorageRangeResult> {
        self.transport
            .call(
                ctx,
                "debug_storageRangeAt",
                rpc_params![block, tx_index, contract, key_start, max_result],
            )
            .await
    }

    /// Accounts changed between `start` and `end`, or within `start` alone.
    pub async fn get_modified_accounts_by_number(
        &self,
        ctx: &CallContext,
        start: u64,
        end: Option<u64>,
    ) -> Result<Vec<Address>> {
        self.transport
            .call(
                ctx,
                "debug_getModifiedAccountsByNumber",
                rpc_params![start, end],
            )
            .await
    }

    pub async fn get_modified_accounts_by_hash(
        &self,
        ctx: &CallContext,
        start: B256,
        end: Option<B256>,
    ) -> Result<Vec<Address>> {
        self.transport
            .call(ctx, "debug_getModifiedAccountsByHash", rpc_params![start, end])
            .await
    }

    /// First block in `from..to` whose state is available, searching in either direction.
    pub async fn get_accessible_state(
        &self,
        ctx: &CallContext,
        from: BlockNumber,
        to: BlockNumber,
    ) -> Result<u64> {
        self.transport
            .call(ctx, "debug_getAccessibleState", rpc_params![from, to])
            .await
    }

    /// Raw database read; `key` is hex with `0x` prefix or a plain string.
    pub async fn db_get(&self, ctx: &CallContext, key: &str) -> Result<Bytes> {
        self.transport
            .call(ctx, "debug_dbGet", rpc_params![key])
            .await
    }

    /// Read one item of the ancient store, e.g. `kind = "headers"`.
    pub async fn db_ancient(&self, ctx: &CallContext, kind: &str, number: u64) -> Result<Bytes> {
        self.transport
            .call(ctx, "debug_dbAncient", rpc_params![kind, number])
            .await
    }

    /// Number of items in the ancient store.
    pub async fn db_ancients(&self, ctx: &CallContext) -> Result<u64> {
        self.transport
            .call(ctx, "debug_dbAncients", rpc_params![])
            .await
    }

    /// `interval` is a Go duration string such as `"1h"`; `"0s"` flushes every block.
    pub async fn set_trie_flush_interval(&self, ctx: &CallContext, interval: &str) -> Result<()> {
        self.transport
            .execute(ctx, "debug_setTrieFlushInterval", rpc_params![interval])
            .await
    }

    pub async fn get_trie_flush_interval(&self, ctx: &CallContext) -> Result<String> {
        self.transport
            .call(ctx, "debug_getTrieFlushInterval", rpc_params![])
            .await
    }

    // ─── tracing ────────────────────────────────────────────────────────────

    /// Trace every transaction of an RLP-encoded block.
    pub async fn trace_block(
        &self,
        ctx: &CallContext,
        rlp: Bytes,
        config: Option<&TraceConfig>,
    ) -> Result<Vec<TxTraceResult>> {
        self.transport
            .call(ctx, "debug_traceBlock", rpc_params![rlp, config])
            .await
    }

    /// Like [`trace_block`](Self::trace_block), reading the RLP from a file on the node.
    pub async fn trace_block_from_file(
        &self,
        ctx: &CallContext,
        file: &str,
        config: Option<&TraceConfig>,
    ) -> Result<Vec<TxTraceResult>> {
        self.transport
            .call(ctx, "debug_traceBlockFromFile", rpc_params![file, config])
            .await
    }

    pub async fn trace_bad_block(
        &self,
        ctx: &CallContext,
        hash: B256,
        config: Option<&TraceConfig>,
    ) -> Result<Vec<TxTraceResult>> {
        self.transport
            .call(ctx, "debug_traceBadBlock", rpc_params![hash, config])
            .await
    }

    pub async fn trace_block_by_number(
        &self,
        ctx: &CallContext,
        number: BlockNumber,
        config: Option<&TraceConfig>,
    ) -> Result<Vec<TxTraceResult>> {
        self.transport
            .call(ctx, "debug_traceBlockByNumber", rpc_params![number, config])
            .await
    }

    pub async fn trace_block_by_hash(
        &self,
        ctx: &CallContext,
        hash: B256,
        config: Option<&TraceConfig>,
    ) -> Result<Vec<TxTraceResult>> {
        self.transport
            .call(ctx, "debug_traceBlockByHash", rpc_params![hash, config])
            .await
    }

    /// Write standard-json traces of a bad block to files; returns their paths.
    pub async fn standard_trace_bad_block_to_file(
        &self,
        ctx: &CallContext,
        hash: B256,
        config: Option<&StdTraceConfig>,
    ) -> Result<Vec<String>> {
        self.transport
            .call(
                ctx,
                "debug_standardTraceBadBlockToFile",
                rpc_params![hash, config],
            )
            .await
    }

    pub async fn standard_trace_block_to_file(
        &self,
        ctx: &CallContext,
        hash: B256,
        config: Option<&StdTraceConfig>,
    ) -> Result<Vec<String>> {
        self.transport
            .call(ctx, "debug_standardTraceBlockToFile", rpc_params![hash, config])
            .await
    }

    /// State root after each transaction of the block.
    pub async fn intermediate_roots(
        &self,
        ctx: &CallContext,
        hash: B256,
        config: Option<&TraceConfig>,
    ) -> Result<Vec<B256>> {
        self.transport
            .call(ctx, "debug_intermediateRoots", rpc_params![hash, config])
            .await
    }

    pub async fn trace_transaction(
        &self,
        ctx: &CallContext,
        hash: B256,
        config: Option<&TraceConfig>,
    ) -> Result<TraceResult> {
        self.transport
            .call(ctx, "debug_traceTransaction", rpc_params![hash, config])
            .await
    }

    /// Trace a call executed on top of `block` without creating a transaction.
    pub async fn trace_call(
        &self,
        ctx: &CallContext,
        args: &TransactionArgs,
        block: BlockNumberOrHash,
        config: Option<&TraceCallConfig>,
    ) -> Result<TraceResult> {
        self.transport
            .call(ctx, "debug_traceCall", rpc_params![args, block, config])
            .await
    }

    // ─── logging ────────────────────────────────────────────────────────────

    /// Set the global log level (0 = silent, 5 = trace).
    pub async fn verbosity(&self, ctx: &CallContext, level: i32) -> Result<()> {
        self.transport
            .execute(ctx, "debug_verbosity", rpc_params![level])
            .await
    }

    /// Per-module log levels, e.g. `"eth/*=5,p2p=4"`.
    pub async fn vmodule(&self, ctx: &CallContext, pattern: &str) -> Result<()> {
        self.transport
            .execute(ctx, "debug_vmodule", rpc_params![pattern])
            .await
    }

    // ─── go runtime ─────────────────────────────────────────────────────────

    /// Goroutine stacks, optionally only those matching `filter`.
    pub async fn stacks(&self, ctx: &CallContext, filter: Option<&str>) -> Result<String> {
        self.transport
            .call(ctx, "debug_stacks", rpc_params![filter])
            .await
    }

    pub async fn free_os_memory(&self, ctx: &CallContext) -> Result<()> {
        self.transport
            .execute(ctx, "debug_freeOSMemory", rpc_params![])
            .await
    }

    /// Set the GC target percentage and return the previous value.
    pub async fn set_gc_percent(&self, ctx: &CallContext, v: i32) -> Result<i32> {
        self.transport
            .call(ctx, "debug_setGCPercent", rpc_params![v])
            .await
    }

    pub async fn mem_stats(&self, ctx: &CallContext) -> Result<RuntimeStats> {
        self.transport
            .call(ctx, "debug_memStats", rpc_params![])
            .await
    }

    pub async fn gc_stats(&self, ctx: &CallContext) -> Result<RuntimeStats> {
        self.transport
            .call(ctx, "debug_gcStats", rpc_params![])
            .await
    }

    /// CPU profile for `nsec` seconds, written to `file`.
    pub async fn cpu_profile(&self, ctx: &CallContext, file: &str, nsec: u64) -> Result<()> {
        self.transport
            .execute(ctx, "debug_cpuProfile", rpc_params![file, nsec])
            .await
    }

    pub async fn start_cpu_profile(&self, ctx: &CallContext, file: &str) -> Result<()> {
        self.transport
            .execute(ctx, "debug_startCPUProfile", rpc_params![file])
            .await
    }

    pub async fn stop_cpu_profile(&self, ctx: &CallContext) -> Result<()> {
        self.transport
            .execute(ctx, "debug_stopCPUProfile", rpc_params![])
            .await
    }

    /// Go execution trace for `nsec` seconds, written to `file`.
    pub async fn go_trace(&self, ctx: &CallContext, file: &str, nsec: u64) -> Result<()> {
        self.transport
            .execute(ctx, "debug_goTrace", rpc_params![file, nsec])
            .await
    }

    pub async fn start_go_trace(&self, ctx: &CallContext, file: &str) -> Result<()> {
        self.transport
            .execute(ctx, "debug_startGoTrace", rpc_params![file])
            .await
    }

    pub async fn stop_go_trace(&self, ctx: &CallContext) -> Result<()> {
        self.transport
            .execute(ctx, "debug_stopGoTrace", rpc_params![])
            .await
    }

    /// Goroutine blocking profile for `nsec` seconds, written to `file`.
    pub async fn block_profile(&self, ctx: &CallContext, file: &str, nsec: u64) -> Result<()> {
        self.transport
            .execute(ctx, "debug_blockProfile", rpc_params![file, nsec])
            .await
    }

    pub async fn set_block_profile_rate(&self, ctx: &CallContext, rate: i32) -> Result<()> {
        self.transport
            .execute(ctx, "debug_setBlockProfileRate", rpc_params![rate])
            .await
    }

    pub async fn write_block_profile(&self, ctx: &CallContext, file: &str) -> Result<()> {
        self.transport
            .execute(ctx, "debug_writeBlockProfile", rpc_params![file])
            .await
    }

    /// Mutex contention profile for `nsec` seconds, written to `file`.
    pub async fn mutex_profile(&self, ctx: &CallContext, file: &str, nsec: u64) -> Result<()> {
        self.transport
            .execute(ctx, "debug_mutexProfile", rpc_params![file, nsec])
            .await
    }

    pub async fn set_mutex_profile_fraction(&self, ctx: &CallContext, rate: i32) -> Result<()> {
        self.transport
            .execute(ctx, "debug_setMutexProfileFraction", rpc_params![rate])
            .await
    }

    pub async fn write_mutex_profile(&self, ctx: &CallContext, file: &str) -> Result<()> {
        self.transport
            .execute(ctx, "debug_writeMutexProfile", rpc_params![file])
            .await
    }

    pub async fn write_mem_profile(&self, ctx: &CallContext, file: &str) -> Result<()> {
        self.transport
            .execute(ctx, "debug_writeMemProfile", rpc_params![file])
            .await
    }
}
