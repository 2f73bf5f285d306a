//! `personal` namespace: account and wallet management on the node.
//!
//! Passwords travel to the node in clear text; only use this namespace over
//! a trusted channel such as IPC or a local HTTP endpoint.

use std::sync::Arc;

use web3rpc_core::{rpc_params, CallContext, RpcTransport, RpcTransportExt};

use crate::types::{Account, Address, Bytes, RawWallet, SignTransactionResult, TransactionArgs, B256};
use crate::Result;

#[derive(Clone)]
pub struct Personal {
    transport: Arc<dyn RpcTransport>,
}

impl Personal {
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    /// Store an unencrypted hex private key in the keystore, encrypted with `password`.
    pub async fn import_raw_key(
        &self,
        ctx: &CallContext,
        private_key: &str,
        password: &str,
    ) -> Result<Address> {
        self.transport
            .call(ctx, "personal_importRawKey", rpc_params![private_key, password])
            .await
    }

    /// Sign `data` with the EIP-191 message prefix.
    pub async fn sign(
        &self,
        ctx: &CallContext,
        data: Bytes,
        address: Address,
        password: &str,
    ) -> Result<Bytes> {
        self.transport
            .call(ctx, "personal_sign", rpc_params![data, address, password])
            .await
    }

    /// Recover the address that produced `signature` over `data`.
    pub async fn ec_recover(
        &self,
        ctx: &CallContext,
        data: Bytes,
        signature: Bytes,
    ) -> Result<Address> {
        self.transport
            .call(ctx, "personal_ecRecover", rpc_params![data, signature])
            .await
    }

    pub async fn open_wallet(
        &self,
        ctx: &CallContext,
        url: &str,
        passphrase: Option<&str>,
    ) -> Result<()> {
        self.transport
            .execute(ctx, "personal_openWallet", rpc_params![url, passphrase])
            .await
    }

    /// Derive the account at `path` in a hardware wallet, pinning it when `pin` is set.
    pub async fn derive_account(
        &self,
        ctx: &CallContext,
        url: &str,
        path: &str,
        pin: Option<bool>,
    ) -> Result<Account> {
        self.transport
            .call(ctx, "personal_deriveAccount", rpc_params![url, path, pin])
            .await
    }

    pub async fn sign_transaction(
        &self,
        ctx: &CallContext,
        args: &TransactionArgs,
        password: &str,
    ) -> Result<SignTransactionResult> {
        self.transport
            .call(ctx, "personal_signTransaction", rpc_params![args, password])
            .await
    }

    /// Remove the pairing of a smartcard wallet.
    pub async fn unpair(&self, ctx: &CallContext, url: &str, pin: &str) -> Result<()> {
        self.transport
            .execute(ctx, "personal_unpair", rpc_params![url, pin])
            .await
    }

    /// Set up a new smartcard wallet, returning its mnemonic.
    pub async fn initialize_wallet(&self, ctx: &CallContext, url: &str) -> Result<String> {
        self.transport
            .call(ctx, "personal_initializeWallet", rpc_params![url])
            .await
    }

    pub async fn new_account(&self, ctx: &CallContext, password: &str) -> Result<Address> {
        self.transport
            .call(ctx, "personal_newAccount", rpc_params![password])
            .await
    }

    /// Unlock `address` for `duration` seconds (node default of 300 when `None`,
    /// indefinitely when `Some(0)`).
    pub async fn unlock_account(
        &self,
        ctx: &CallContext,
        address: Address,
        password: &str,
        duration: Option<u64>,
    ) -> Result<bool> {
        self.transport
            .call(
                ctx,
                "personal_unlockAccount",
                rpc_params![address, password, duration],
            )
            .await
    }

    /// Sign with the unlocked-for-one-call key and submit. Returns the tx hash.
    pub async fn send_transaction(
        &self,
        ctx: &CallContext,
        args: &TransactionArgs,
        password: &str,
    ) -> Result<B256> {
        self.transport
            .call(ctx, "personal_sendTransaction", rpc_params![args, password])
            .await
    }

    pub async fn lock_account(&self, ctx: &CallContext, address: Address) -> Result<bool> {
        self.transport
            .call(ctx, "personal_lockAccount", rpc_params![address])
            .await
    }

    pub async fn list_wallets(&self, ctx: &CallContext) -> Result<Vec<RawWallet>> {
        self.transport
            .call(ctx, "personal_listWallets", rpc_params![])
            .await
    }

    pub async fn list_accounts(&self, ctx: &CallContext) -> Result<Vec<Address>> {
        self.transport
            .call(ctx, "personal_listAccounts", rpc_params![])
            .await
    }
}
