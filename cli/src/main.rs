//! web3rpc CLI — query a geth node through the typed namespace clients.
//!
//! # Commands
//! ```text
//! web3rpc info
//! web3rpc block   [latest|pending|0x10|16] [--full]
//! web3rpc node    [--peers]
//! web3rpc txpool  [--inspect]
//! web3rpc clique  [--snapshot]
//! web3rpc call    <method> [json-params]
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use web3rpc::types::BlockNumber;
use web3rpc::{CallContext, RpcTransport, RpcTransportExt, Web3};
use web3rpc_http::{HttpClientConfig, HttpRpcClient};

mod logging;

use logging::{init_tracing, LogConfig};

#[derive(Parser)]
#[command(
    name = "web3rpc",
    about = "Query a geth node through its JSON-RPC namespaces",
    long_about = "
Query a geth node through its JSON-RPC namespaces.
All output is JSON on stdout; logs go to stderr.

ENVIRONMENT VARIABLES:
  WEB3RPC_URL            Node HTTP endpoint (default http://127.0.0.1:8545)
  WEB3RPC_TIMEOUT_SECS   Deadline applied to each command
  RUST_LOG               Log filter when --log-level is not given
",
    version
)]
struct Cli {
    /// Node HTTP endpoint
    #[arg(long, env = "WEB3RPC_URL", default_value = "http://127.0.0.1:8545", global = true)]
    url: String,

    /// Deadline for the whole command, in seconds
    #[arg(long, env = "WEB3RPC_TIMEOUT_SECS", global = true)]
    timeout_secs: Option<u64>,

    /// Log filter, e.g. "debug" or "web3rpc_core=trace"
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Network, chain and module summary
    Info,

    /// Fetch a block by number or tag
    Block {
        /// Block number (decimal or 0x-hex) or tag
        #[arg(default_value = "latest")]
        block: BlockNumber,
        /// Include full transaction objects
        #[arg(long)]
        full: bool,
    },

    /// Local node identity (admin namespace)
    Node {
        /// Also list connected peers
        #[arg(long)]
        peers: bool,
    },

    /// Transaction pool counts
    Txpool {
        /// Print one-line summaries of every pooled transaction
        #[arg(long)]
        inspect: bool,
    },

    /// Clique signers and sealing status
    Clique {
        /// Print the full voting snapshot at the head
        #[arg(long)]
        snapshot: bool,
    },

    /// Send a raw JSON-RPC request
    Call {
        /// Wire method name, e.g. eth_getBalance
        method: String,
        /// Positional parameters as a JSON array
        #[arg(default_value = "[]")]
        params: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&LogConfig {
        level: cli.log_level.clone(),
        json: cli.json_logs,
    });

    let client = HttpRpcClient::new(&cli.url, HttpClientConfig::default())
        .with_context(|| format!("cannot build HTTP client for {}", cli.url))?;
    let transport: Arc<dyn RpcTransport> = Arc::new(client);
    let web3 = Web3::new(transport);

    let ctx = match cli.timeout_secs {
        Some(secs) => CallContext::with_timeout(Duration::from_secs(secs)),
        None => CallContext::background(),
    };

    let interrupt = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, cancelling outstanding request");
            interrupt.cancel();
        }
    });

    match cli.command {
        Commands::Info => cmd_info(&web3, &ctx).await,
        Commands::Block { block, full } => cmd_block(&web3, &ctx, block, full).await,
        Commands::Node { peers } => cmd_node(&web3, &ctx, peers).await,
        Commands::Txpool { inspect } => cmd_txpool(&web3, &ctx, inspect).await,
        Commands::Clique { snapshot } => cmd_clique(&web3, &ctx, snapshot).await,
        Commands::Call { method, params } => cmd_call(&web3, &ctx, &method, &params).await,
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn cmd_info(web3: &Web3, ctx: &CallContext) -> Result<()> {
    let network = web3.net().version(ctx).await.context("net_version")?;
    let listening = web3.net().listening(ctx).await.context("net_listening")?;
    let peers = web3.net().peer_count(ctx).await.context("net_peerCount")?;
    let chain_id = web3.eth().chain_id(ctx).await.context("eth_chainId")?;
    let head = web3.eth().block_number(ctx).await.context("eth_blockNumber")?;
    let syncing = web3.eth().syncing(ctx).await.context("eth_syncing")?;
    let modules = web3.rpc().modules(ctx).await.context("rpc_modules")?;

    print_json(&json!({
        "url": web3.transport().url(),
        "network": network,
        "listening": listening,
        "peers": peers,
        "chainId": chain_id,
        "blockNumber": head,
        "syncing": syncing,
        "modules": modules,
    }))
}

async fn cmd_block(web3: &Web3, ctx: &CallContext, block: BlockNumber, full: bool) -> Result<()> {
    match web3.eth().get_block_by_number(ctx, block, full).await? {
        Some(block) => print_json(&block),
        None => anyhow::bail!("block {block} not found"),
    }
}

async fn cmd_node(web3: &Web3, ctx: &CallContext, peers: bool) -> Result<()> {
    let info = web3.admin().node_info(ctx).await.context("admin_nodeInfo")?;
    if !peers {
        return print_json(&info);
    }
    let peers = web3.admin().peers(ctx).await.context("admin_peers")?;
    print_json(&json!({ "node": info, "peers": peers }))
}

async fn cmd_txpool(web3: &Web3, ctx: &CallContext, inspect: bool) -> Result<()> {
    if inspect {
        print_json(&web3.txpool().inspect(ctx).await?)
    } else {
        print_json(&web3.txpool().status(ctx).await?)
    }
}

async fn cmd_clique(web3: &Web3, ctx: &CallContext, snapshot: bool) -> Result<()> {
    if snapshot {
        return print_json(&web3.clique().get_snapshot(ctx, None).await?);
    }
    let signers = web3.clique().get_signers(ctx, None).await.context("clique_getSigners")?;
    let status = web3.clique().status(ctx).await.context("clique_status")?;
    print_json(&json!({ "signers": signers, "status": status }))
}

async fn cmd_call(web3: &Web3, ctx: &CallContext, method: &str, params: &str) -> Result<()> {
    let params: Vec<Value> = serde_json::from_str(params)
        .with_context(|| format!("params must be a JSON array, got {params}"))?;
    let result: Value = web3.transport().call(ctx, method, params).await?;
    print_json(&result)
}
