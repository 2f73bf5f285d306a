//! `eth` namespace: chain state, transactions, filters and fee market.
//!
//! Methods that take an optional block selector send `null` when it is
//! `None`; the node then evaluates against its own default (usually
//! `latest`, `pending` for gas estimation).

use std::sync::Arc;

use web3rpc_core::{rpc_params, CallContext, RpcTransport, RpcTransportExt};

use crate::types::{
    AccessListResult, AccountResult, Address, Block, BlockNumber, BlockNumberOrHash,
    BlockOverrides, Bytes, FeeHistory, FilterChanges, FilterId, FilterQuery, Header, Log,
    RpcTransaction, SignTransactionResult, StateOverride, SyncStatus, TransactionArgs,
    TransactionReceipt, B256, U256, U64,
};
use crate::Result;

#[derive(Clone)]
pub struct Eth {
    transport: Arc<dyn RpcTransport>,
}

impl Eth {
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    // ─── chain and node properties ──────────────────────────────────────────

    /// EIP-155 chain id used for replay-protected signing.
    pub async fn chain_id(&self, ctx: &CallContext) -> Result<U256> {
        self.transport.call(ctx, "eth_chainId", rpc_params![]).await
    }

    pub async fn block_number(&self, ctx: &CallContext) -> Result<U64> {
        self.transport
            .call(ctx, "eth_blockNumber", rpc_params![])
            .await
    }

    pub async fn syncing(&self, ctx: &CallContext) -> Result<SyncStatus> {
        self.transport.call(ctx, "eth_syncing", rpc_params![]).await
    }

    pub async fn coinbase(&self, ctx: &CallContext) -> Result<Address> {
        self.transport.call(ctx, "eth_coinbase", rpc_params![]).await
    }

    pub async fn mining(&self, ctx: &CallContext) -> Result<bool> {
        self.transport.call(ctx, "eth_mining", rpc_params![]).await
    }

    pub async fn hashrate(&self, ctx: &CallContext) -> Result<U64> {
        self.transport.call(ctx, "eth_hashrate", rpc_params![]).await
    }

    /// Addresses owned by the node's wallets.
    pub async fn accounts(&self, ctx: &CallContext) -> Result<Vec<Address>> {
        self.transport.call(ctx, "eth_accounts", rpc_params![]).await
    }

    pub async fn gas_price(&self, ctx: &CallContext) -> Result<U256> {
        self.transport.call(ctx, "eth_gasPrice", rpc_params![]).await
    }

    /// Suggested priority fee for a dynamic-fee transaction.
    pub async fn max_priority_fee_per_gas(&self, ctx: &CallContext) -> Result<U256> {
        self.transport
            .call(ctx, "eth_maxPriorityFeePerGas", rpc_params![])
            .await
    }

    /// Base fee and priority fee percentiles over `block_count` blocks ending at `last_block`.
    pub async fn fee_history(
        &self,
        ctx: &CallContext,
        block_count: u64,
        last_block: BlockNumber,
        reward_percentiles: &[f64],
    ) -> Result<FeeHistory> {
        self.transport
            .call(
                ctx,
                "eth_feeHistory",
                rpc_params![U64::from(block_count), last_block, reward_percentiles],
            )
            .await
    }

    // ─── blocks and headers ─────────────────────────────────────────────────

    /// `Ok(None)` when the block is unknown.
    pub async fn get_header_by_number(
        &self,
        ctx: &CallContext,
        number: BlockNumber,
    ) -> Result<Option<Header>> {
        self.transport
            .call(ctx, "eth_getHeaderByNumber", rpc_params![number])
            .await
    }

    pub async fn get_header_by_hash(&self, ctx: &CallContext, hash: B256) -> Result<Option<Header>> {
        self.transport
            .call(ctx, "eth_getHeaderByHash", rpc_params![hash])
            .await
    }

    /// With `full_tx` the block carries full transaction objects, otherwise hashes.
    pub async fn get_block_by_number(
        &self,
        ctx: &CallContext,
        number: BlockNumber,
        full_tx: bool,
    ) -> Result<Option<Block>> {
        self.transport
            .call(ctx, "eth_getBlockByNumber", rpc_params![number, full_tx])
            .await
    }

    pub async fn get_block_by_hash(
        &self,
        ctx: &CallContext,
        hash: B256,
        full_tx: bool,
    ) -> Result<Option<Block>> {
        self.transport
            .call(ctx, "eth_getBlockByHash", rpc_params![hash, full_tx])
            .await
    }

    pub async fn get_block_receipts(
        &self,
        ctx: &CallContext,
        block: BlockNumberOrHash,
    ) -> Result<Option<Vec<TransactionReceipt>>> {
        self.transport
            .call(ctx, "eth_getBlockReceipts", rpc_params![block])
            .await
    }

    // ─── account state ──────────────────────────────────────────────────────

    pub async fn get_balance(
        &self,
        ctx: &CallContext,
        address: Address,
        block: BlockNumberOrHash,
    ) -> Result<U256> {
        self.transport
            .call(ctx, "eth_getBalance", rpc_params![address, block])
            .await
    }

    /// Nonce of `address` at `block`.
    pub async fn get_transaction_count(
        &self,
        ctx: &CallContext,
        address: Address,
        block: BlockNumberOrHash,
    ) -> Result<U64> {
        self.transport
            .call(ctx, "eth_getTransactionCount", rpc_params![address, block])
            .await
    }

    pub async fn get_code(
        &self,
        ctx: &CallContext,
        address: Address,
        block: BlockNumberOrHash,
    ) -> Result<Bytes> {
        self.transport
            .call(ctx, "eth_getCode", rpc_params![address, block])
            .await
    }

    pub async fn get_storage_at(
        &self,
        ctx: &CallContext,
        address: Address,
        slot: U256,
        block: BlockNumberOrHash,
    ) -> Result<B256> {
        self.transport
            .call(ctx, "eth_getStorageAt", rpc_params![address, slot, block])
            .await
    }

    /// Account and storage Merkle proofs (EIP-1186).
    pub async fn get_proof(
        &self,
        ctx: &CallContext,
        address: Address,
        storage_keys: &[B256],
        block: BlockNumberOrHash,
    ) -> Result<AccountResult> {
        self.transport
            .call(ctx, "eth_getProof", rpc_params![address, storage_keys, block])
            .await
    }

    // ─── execution ──────────────────────────────────────────────────────────

    /// Execute a message call without creating a transaction. All four
    /// positions are always sent.
    pub async fn call(
        &self,
        ctx: &CallContext,
        args: &TransactionArgs,
        block: Option<BlockNumberOrHash>,
        overrides: Option<&StateOverride>,
        block_overrides: Option<&BlockOverrides>,
    ) -> Result<Bytes> {
        self.transport
            .call(
                ctx,
                "eth_call",
                rpc_params![args, block, overrides, block_overrides],
            )
            .await
    }

    pub async fn estimate_gas(
        &self,
        ctx: &CallContext,
        args: &TransactionArgs,
        block: Option<BlockNumberOrHash>,
        overrides: Option<&StateOverride>,
    ) -> Result<U64> {
        self.transport
            .call(ctx, "eth_estimateGas", rpc_params![args, block, overrides])
            .await
    }

    /// Access list the transaction would touch, and the gas it would use with it.
    pub async fn create_access_list(
        &self,
        ctx: &CallContext,
        args: &TransactionArgs,
        block: Option<BlockNumberOrHash>,
    ) -> Result<AccessListResult> {
        self.transport
            .call(ctx, "eth_createAccessList", rpc_params![args, block])
            .await
    }

    // ─── signing and submission ─────────────────────────────────────────────

    /// Sign `data` with the EIP-191 prefix using a node-held key.
    pub async fn sign(&self, ctx: &CallContext, address: Address, data: Bytes) -> Result<Bytes> {
        self.transport
            .call(ctx, "eth_sign", rpc_params![address, data])
            .await
    }

    /// Sign with a node-held key without submitting.
    pub async fn sign_transaction(
        &self,
        ctx: &CallContext,
        args: &TransactionArgs,
    ) -> Result<SignTransactionResult> {
        self.transport
            .call(ctx, "eth_signTransaction", rpc_params![args])
            .await
    }

    /// Fill in nonce, gas and fees and return the unsigned result.
    pub async fn fill_transaction(
        &self,
        ctx: &CallContext,
        args: &TransactionArgs,
    ) -> Result<SignTransactionResult> {
        self.transport
            .call(ctx, "eth_fillTransaction", rpc_params![args])
            .await
    }

    /// Sign with a node-held key and submit. Returns the transaction hash.
    pub async fn send_transaction(&self, ctx: &CallContext, args: &TransactionArgs) -> Result<B256> {
        self.transport
            .call(ctx, "eth_sendTransaction", rpc_params![args])
            .await
    }

    /// Submit an already signed, RLP-encoded transaction.
    pub async fn send_raw_transaction(&self, ctx: &CallContext, raw: Bytes) -> Result<B256> {
        self.transport
            .call(ctx, "eth_sendRawTransaction", rpc_params![raw])
            .await
    }

    /// Replace a pending transaction with new gas price and limit.
    pub async fn resend(
        &self,
        ctx: &CallContext,
        args: &TransactionArgs,
        gas_price: Option<U256>,
        gas_limit: Option<u64>,
    ) -> Result<B256> {
        self.transport
            .call(
                ctx,
                "eth_resend",
                rpc_params![args, gas_price, gas_limit.map(U64::from)],
            )
            .await
    }

    // ─── transactions ───────────────────────────────────────────────────────

    pub async fn get_transaction_by_hash(
        &self,
        ctx: &CallContext,
        hash: B256,
    ) -> Result<Option<RpcTransaction>> {
        self.transport
            .call(ctx, "eth_getTransactionByHash", rpc_params![hash])
            .await
    }

    /// `Ok(None)` while the transaction is pending or unknown.
    pub async fn get_transaction_receipt(
        &self,
        ctx: &CallContext,
        hash: B256,
    ) -> Result<Option<TransactionReceipt>> {
        self.transport
            .call(ctx, "eth_getTransactionReceipt", rpc_params![hash])
            .await
    }

    pub async fn get_raw_transaction_by_hash(&self, ctx: &CallContext, hash: B256) -> Result<Bytes> {
        self.transport
            .call(ctx, "eth_getRawTransactionByHash", rpc_params![hash])
            .await
    }

    pub async fn get_raw_transaction_by_block_hash_and_index(
        &self,
        ctx: &CallContext,
        block_hash: B256,
        index: u64,
    ) -> Result<Bytes> {
        self.transport
            .call(
                ctx,
                "eth_getRawTransactionByBlockHashAndIndex",
                rpc_params![block_hash, U64::from(index)],
            )
            .await
    }

    pub async fn get_raw_transaction_by_block_number_and_index(
        &self,
        ctx: &CallContext,
        number: BlockNumber,
        index: u64,
    ) -> Result<Bytes> {
        self.transport
            .call(
                ctx,
                "eth_getRawTransactionByBlockNumberAndIndex",
                rpc_params![number, U64::from(index)],
            )
            .await
    }

    /// Pooled transactions sent from one of the node's own accounts.
    pub async fn pending_transactions(&self, ctx: &CallContext) -> Result<Vec<RpcTransaction>> {
        self.transport
            .call(ctx, "eth_pendingTransactions", rpc_params![])
            .await
    }

    // ─── logs and filters ───────────────────────────────────────────────────

    pub async fn get_logs(&self, ctx: &CallContext, filter: &FilterQuery) -> Result<Vec<Log>> {
        self.transport
            .call(ctx, "eth_getLogs", rpc_params![filter])
            .await
    }

    /// Install a filter notified of each new block hash.
    pub async fn new_block_filter(&self, ctx: &CallContext) -> Result<FilterId> {
        self.transport
            .call(ctx, "eth_newBlockFilter", rpc_params![])
            .await
    }

    /// Install a filter for transactions entering the pool. With
    /// `full_tx = Some(true)` changes carry full transactions instead of hashes.
    pub async fn new_pending_transaction_filter(
        &self,
        ctx: &CallContext,
        full_tx: Option<bool>,
    ) -> Result<FilterId> {
        self.transport
            .call(ctx, "eth_newPendingTransactionFilter", rpc_params![full_tx])
            .await
    }

    pub async fn new_filter(&self, ctx: &CallContext, filter: &FilterQuery) -> Result<FilterId> {
        self.transport
            .call(ctx, "eth_newFilter", rpc_params![filter])
            .await
    }

    /// `false` if the filter did not exist.
    pub async fn uninstall_filter(&self, ctx: &CallContext, id: &FilterId) -> Result<bool> {
        self.transport
            .call(ctx, "eth_uninstallFilter", rpc_params![id])
            .await
    }

    /// All logs matching a log filter, regardless of what was already polled.
    pub async fn get_filter_logs(&self, ctx: &CallContext, id: &FilterId) -> Result<Vec<Log>> {
        self.transport
            .call(ctx, "eth_getFilterLogs", rpc_params![id])
            .await
    }

    /// Entries accumulated since the previous poll of this filter.
    pub async fn get_filter_changes(&self, ctx: &CallContext, id: &FilterId) -> Result<FilterChanges> {
        self.transport
            .call(ctx, "eth_getFilterChanges", rpc_params![id])
            .await
    }
}
