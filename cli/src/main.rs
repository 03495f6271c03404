use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use serde_json::json;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
};
use std::str::FromStr;

use par_swap_sdk::{
    InitializePoolParams, ParSwapClient, SwapDirection, SwapParams,
};

// ─── Program constants ────────────────────────────────────────────────────────

const PROGRAM_ID: &str = "Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS";

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Expand `~/` to `$HOME/` in keypair paths.
fn expand_home(path: &str) -> String {
    if path.starts_with("~/") {
        format!("{}{}", std::env::var("HOME").unwrap_or_default(), &path[1..])
    } else {
        path.to_string()
    }
}

fn load_keypair(path: &str) -> Result<Keypair> {
    let expanded = expand_home(path);
    read_keypair_file(&expanded)
        .map_err(|e| anyhow!(
            "Cannot load keypair from '{}': {}\n  \
             Set PAR_SWAP_KEYPAIR or pass --keypair to specify a different path.",
            expanded, e
        ))
}

fn parse_mint(label: &str, value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value)
        .map_err(|_| anyhow!("{} '{}' is not a valid base-58 mint address.", label, value))
}

/// Parse `a-to-b` / `b-to-a` into a [`SwapDirection`].
fn parse_direction(value: &str) -> Result<SwapDirection> {
    match value {
        "a-to-b" => Ok(SwapDirection::AToB),
        "b-to-a" => Ok(SwapDirection::BToA),
        other => Err(anyhow!(
            "Unknown --direction '{}'. Valid values: a-to-b, b-to-a",
            other
        )),
    }
}

fn client(rpc_url: &str) -> Result<ParSwapClient> {
    let program_id = Pubkey::from_str(PROGRAM_ID)?;
    Ok(ParSwapClient::new(rpc_url).with_program_id(program_id))
}

// ─── Version banner ───────────────────────────────────────────────────────────

/// Print the ParSwap banner to stdout.
fn print_banner() {
    let ver = env!("CARGO_PKG_VERSION");
    println!();
    println!("  ParSwap  v{ver}  ·  fixed-rate exchange pool on Solana");
    println!("  {}", "─".repeat(62));
    println!("  Program   {PROGRAM_ID}");
    println!("  Rate      1:1, no fee, both directions");
    println!("  Docs      https://github.com/par-swap/par-swap");
    println!();
}

// ─── CLI definition ───────────────────────────────────────────────────────────

/// ParSwap — fixed-rate two-asset exchange pool on Solana.
///
/// Every command supports --json for machine-readable output.
/// Global options can also be set via environment variables:
///   PAR_SWAP_RPC_URL  — Solana JSON-RPC endpoint
///   PAR_SWAP_KEYPAIR  — path to an Ed25519 keypair JSON
#[derive(Parser)]
#[command(
    name        = "par-swap",
    version     = env!("CARGO_PKG_VERSION"),
    long_version = concat!(
        env!("CARGO_PKG_VERSION"), "\n",
        "Program:  Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS\n",
        "Network:  Solana mainnet-beta\n",
        "Rate:     fixed 1:1, no fee\n",
        "License:  MIT",
    ),
    about   = "Fixed-rate two-asset exchange — swap A for B and back at exactly 1:1.",
    after_help = "\
ENVIRONMENT:
  PAR_SWAP_RPC_URL    Solana JSON-RPC endpoint  [default: https://api.mainnet-beta.solana.com]
  PAR_SWAP_KEYPAIR    Path to Ed25519 keypair JSON  [default: ~/.config/solana/id.json]

QUICK START:
  par-swap init-pool --asset-a <MINT_A> --asset-b <MINT_B>
  par-swap preview   --direction a-to-b --amount 100000000
  par-swap swap      --direction a-to-b --amount 100000000
  par-swap pool-info

PROGRAM:
  Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS  (Solana mainnet-beta)"
)]
struct Cli {
    /// Solana JSON-RPC endpoint
    #[arg(
        long,
        global     = true,
        value_name = "URL",
        default_value = "https://api.mainnet-beta.solana.com",
        env = "PAR_SWAP_RPC_URL"
    )]
    rpc_url: String,

    /// Path to the signing Ed25519 keypair JSON file
    #[arg(
        long,
        global     = true,
        value_name = "PATH",
        default_value = "~/.config/solana/id.json",
        env = "PAR_SWAP_KEYPAIR"
    )]
    keypair: String,

    /// Output machine-readable JSON instead of human-readable text
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the singleton pool for a mint pair
    ///
    /// The pool authority is a PDA — no human key controls the reserves.
    /// Both reserve accounts are created empty; fund them with ordinary
    /// SPL transfers after initialization.
    #[command(
        name = "init-pool",
        after_help = "\
EXAMPLES:
  par-swap init-pool --asset-a <MINT_A> --asset-b <MINT_B>
  par-swap init-pool --asset-a <MINT_A> --asset-b <MINT_B> --json

NOTES:
  Running init-pool twice fails with AlreadyInitialized and leaves the
  existing pool and its reserve balances untouched."
    )]
    InitPool {
        /// Mint address of asset A (base-58)
        #[arg(long, value_name = "MINT")]
        asset_a: String,

        /// Mint address of asset B (base-58)
        #[arg(long, value_name = "MINT")]
        asset_b: String,
    },

    /// Execute an atomic swap at the fixed 1:1 rate
    ///
    /// A local pre-flight runs the same checks the program applies
    /// (zero amount, user balance, reserve liquidity) against live
    /// balances before the transaction is sent.
    #[command(
        after_help = "\
EXAMPLES:
  # Sell 100000000 of asset A for the same amount of asset B
  par-swap swap --direction a-to-b --amount 100000000

  # The reverse direction restores the balances exactly
  par-swap swap --direction b-to-a --amount 100000000

  # Machine-readable output
  par-swap swap --direction a-to-b --amount 100000000 --json

NOTES:
  Amounts are atomic units of the source asset's mint.
  The received amount always equals the amount sold — there is no
  fee and no price curve."
    )]
    Swap {
        /// Swap direction: a-to-b or b-to-a
        #[arg(long, value_name = "DIR")]
        direction: String,

        /// Amount of the source asset to sell (atomic units)
        #[arg(long, value_name = "AMOUNT")]
        amount: u64,
    },

    /// Preview a swap without sending any transaction
    ///
    /// Safe to call as often as needed — no funds are moved and no
    /// transaction is broadcast.
    #[command(
        after_help = "\
EXAMPLES:
  par-swap preview --direction a-to-b --amount 100000000
  par-swap preview --direction b-to-a --amount 100000000 --json

OUTPUT FIELDS:
  amount_out         — always equal to the amount sold (1:1, no fee)
  reserve_out_after  — payout-side reserve balance after the swap
  reserve_in_after   — receiving-side reserve balance after the swap"
    )]
    Preview {
        /// Swap direction: a-to-b or b-to-a
        #[arg(long, value_name = "DIR")]
        direction: String,

        /// Amount of the source asset to preview selling (atomic units)
        #[arg(long, value_name = "AMOUNT")]
        amount: u64,
    },

    /// Show pool accounts and live reserve balances
    ///
    /// Read-only — no keypair required, no transaction sent.
    #[command(
        name = "pool-info",
        after_help = "\
EXAMPLES:
  par-swap pool-info
  par-swap pool-info --json"
    )]
    PoolInfo,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    // When invoked with no arguments, show banner + full help and exit cleanly.
    if std::env::args().len() == 1 {
        print_banner();
        Cli::command().print_long_help().ok();
        println!();
        return Ok(());
    }

    let cli = Cli::parse();

    match &cli.command {
        Commands::InitPool { asset_a, asset_b } => {
            cmd_init_pool(&cli.rpc_url, &cli.keypair, asset_a, asset_b, cli.json).await?;
        }
        Commands::Swap { direction, amount } => {
            cmd_swap(&cli.rpc_url, &cli.keypair, direction, *amount, cli.json).await?;
        }
        Commands::Preview { direction, amount } => {
            cmd_preview(&cli.rpc_url, direction, *amount, cli.json).await?;
        }
        Commands::PoolInfo => {
            cmd_pool_info(&cli.rpc_url, cli.json).await?;
        }
    }

    Ok(())
}

// ─── init-pool ───────────────────────────────────────────────────────────────

async fn cmd_init_pool(
    rpc_url: &str,
    keypair_path: &str,
    asset_a: &str,
    asset_b: &str,
    json_output: bool,
) -> Result<()> {
    let asset_a_mint = parse_mint("--asset-a", asset_a)?;
    let asset_b_mint = parse_mint("--asset-b", asset_b)?;
    if asset_a_mint == asset_b_mint {
        return Err(anyhow!("--asset-a and --asset-b must be different mints."));
    }

    let admin = load_keypair(keypair_path)?;
    let result = client(rpc_url)?
        .initialize_pool(&admin, InitializePoolParams { asset_a_mint, asset_b_mint })
        .await
        .context("initialize transaction failed")?;

    if json_output {
        println!("{}", json!({
            "status":         "ok",
            "command":        "init-pool",
            "pool":           result.pool.to_string(),
            "pool_authority": result.pool_authority.to_string(),
            "asset_a_mint":   result.asset_a_mint.to_string(),
            "asset_b_mint":   result.asset_b_mint.to_string(),
            "reserve_a":      result.reserve_a.to_string(),
            "reserve_b":      result.reserve_b.to_string(),
            "tx":             result.signature,
        }));
    } else {
        println!("─── Pool Initialized ─────────────────────────────────────────────");
        println!("  Asset A mint     {}", result.asset_a_mint);
        println!("  Asset B mint     {}", result.asset_b_mint);
        println!("  Pool PDA         {}", result.pool);
        println!("  Pool authority   {}", result.pool_authority);
        println!("  Reserve A        {}", result.reserve_a);
        println!("  Reserve B        {}", result.reserve_b);
        println!("  Transaction      {}", result.signature);
        println!();
        println!("  Reserves are empty — fund them with SPL transfers to the");
        println!("  reserve addresses above before accepting swaps.");
    }
    Ok(())
}

// ─── swap ────────────────────────────────────────────────────────────────────

async fn cmd_swap(
    rpc_url: &str,
    keypair_path: &str,
    direction: &str,
    amount: u64,
    json_output: bool,
) -> Result<()> {
    let direction = parse_direction(direction)?;
    if amount == 0 {
        return Err(anyhow!("--amount must be > 0 (atomic units of the source mint)."));
    }

    let user = load_keypair(keypair_path)?;
    let result = client(rpc_url)?
        .swap(&user, SwapParams { direction, amount })
        .await
        .context("swap transaction failed")?;

    if json_output {
        println!("{}", json!({
            "status":     "ok",
            "command":    "swap",
            "direction":  result.direction.to_string(),
            "pool":       result.pool.to_string(),
            "amount_in":  result.amount_in,
            "amount_out": result.amount_out,
            "tx":         result.signature,
        }));
    } else {
        let dir = match direction {
            SwapDirection::AToB => "A → B",
            SwapDirection::BToA => "B → A",
        };
        println!("─── Swap Executed ────────────────────────────────────────────────");
        println!("  Direction        {dir}");
        println!("  Pool             {}", result.pool);
        println!("  Sold             {:>20}", result.amount_in);
        println!("  Received         {:>20}  (1:1, no fee)", result.amount_out);
        println!("  Transaction      {}", result.signature);
    }
    Ok(())
}

// ─── preview ─────────────────────────────────────────────────────────────────

async fn cmd_preview(
    rpc_url: &str,
    direction: &str,
    amount: u64,
    json_output: bool,
) -> Result<()> {
    let direction = parse_direction(direction)?;
    if amount == 0 {
        return Err(anyhow!("--amount must be > 0 (atomic units of the source mint)."));
    }

    let preview = client(rpc_url)?
        .preview(SwapParams { direction, amount })
        .await
        .context("preview failed")?;

    if json_output {
        println!("{}", json!({
            "status":            "ok",
            "command":           "preview",
            "direction":         preview.direction.to_string(),
            "amount_in":         preview.amount_in,
            "amount_out":        preview.amount_out,
            "reserve_in_after":  preview.reserve_in_after,
            "reserve_out_after": preview.reserve_out_after,
        }));
    } else {
        println!("─── Swap Preview ─────────────────────────────────────────────────");
        println!("  Sell             {:>20}", preview.amount_in);
        println!("  Receive          {:>20}  (1:1, no fee)", preview.amount_out);
        println!("  Reserve in  →    {:>20}", preview.reserve_in_after);
        println!("  Reserve out →    {:>20}", preview.reserve_out_after);
        println!();
        println!("  No transaction was sent.");
    }
    Ok(())
}

// ─── pool-info ───────────────────────────────────────────────────────────────

async fn cmd_pool_info(rpc_url: &str, json_output: bool) -> Result<()> {
    let info = client(rpc_url)?
        .pool_info()
        .await
        .context("Failed to fetch pool — has init-pool been run on this cluster?")?;

    if json_output {
        println!("{}", json!({
            "status":            "ok",
            "command":           "pool-info",
            "pool":              info.pool.to_string(),
            "authority":         info.authority.to_string(),
            "asset_a_mint":      info.asset_a_mint.to_string(),
            "asset_b_mint":      info.asset_b_mint.to_string(),
            "reserve_a":         info.reserve_a.to_string(),
            "reserve_b":         info.reserve_b.to_string(),
            "reserve_a_balance": info.reserve_a_balance,
            "reserve_b_balance": info.reserve_b_balance,
        }));
    } else {
        println!("─── Pool Info ────────────────────────────────────────────────────");
        println!("  Pool             {}", info.pool);
        println!("  Authority        {}", info.authority);
        println!("  Asset A mint     {}", info.asset_a_mint);
        println!("  Asset B mint     {}", info.asset_b_mint);
        println!("  Reserve A        {}  ({})", info.reserve_a, info.reserve_a_balance);
        println!("  Reserve B        {}  ({})", info.reserve_b, info.reserve_b_balance);
    }
    Ok(())
}
