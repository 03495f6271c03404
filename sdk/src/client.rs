//! [`ParSwapClient`] — the main entry point for off-chain integrations.

use std::str::FromStr;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

use crate::{
    error::{Error, Result},
    instructions::{
        derive_ata, derive_pool, derive_pool_authority, derive_reserve_a, derive_reserve_b,
        initialize_ix, swap_a_to_b_ix, swap_b_to_a_ix,
    },
    quote::preview_swap,
    state::{parse_pool, parse_token_amount, PoolState},
    types::{
        InitializePoolParams, InitializePoolResult, PoolInfo, SwapDirection, SwapParams,
        SwapPreview, SwapResult,
    },
};

// ─── Constants ────────────────────────────────────────────────────────────────

const DEFAULT_PROGRAM_ID: &str = "Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS";
const DEVNET_RPC:  &str = "https://api.devnet.solana.com";
const MAINNET_RPC: &str = "https://api.mainnet-beta.solana.com";

// ─── Client ───────────────────────────────────────────────────────────────────

/// Async ParSwap client for Solana.
///
/// ```rust,no_run
/// # use par_swap_sdk::{ParSwapClient, SwapDirection, SwapParams};
/// # use solana_sdk::signature::Keypair;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ParSwapClient::devnet();
/// let user = Keypair::new(); // use your funded keypair
/// let result = client.swap(&user, SwapParams {
///     direction: SwapDirection::AToB,
///     amount:    100_000_000,
/// }).await?;
/// println!("Swapped at 1:1, received {}  tx: {}", result.amount_out, result.signature);
/// # Ok(())
/// # }
/// ```
pub struct ParSwapClient {
    rpc_url:    String,
    program_id: Pubkey,
}

impl ParSwapClient {
    /// Create a client pointing at any RPC endpoint.
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url:    rpc_url.into(),
            program_id: Pubkey::from_str(DEFAULT_PROGRAM_ID).unwrap(),
        }
    }

    /// Pre-configured client for Solana devnet.
    pub fn devnet() -> Self {
        Self::new(DEVNET_RPC)
    }

    /// Pre-configured client for Solana mainnet-beta.
    pub fn mainnet() -> Self {
        Self::new(MAINNET_RPC)
    }

    /// Override the program ID (useful for locally deployed programs in tests).
    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    // ── Write operations ──────────────────────────────────────────────────────

    /// Create the singleton pool for a mint pair.
    ///
    /// Every pool account is a PDA, so the only signer is `admin`. Reserves
    /// start empty — fund them with ordinary SPL transfers afterwards.
    pub async fn initialize_pool(
        &self,
        admin:  &Keypair,
        params: InitializePoolParams,
    ) -> Result<InitializePoolResult> {
        let rpc = self.rpc();

        let (pool, _)           = derive_pool(&self.program_id);
        let (pool_authority, _) = derive_pool_authority(&self.program_id);
        let (reserve_a, _)      = derive_reserve_a(&params.asset_a_mint, &self.program_id);
        let (reserve_b, _)      = derive_reserve_b(&params.asset_b_mint, &self.program_id);

        let ix = initialize_ix(
            &self.program_id,
            &admin.pubkey(),
            &params.asset_a_mint,
            &params.asset_b_mint,
        );
        let sig = self.sign_and_send(&rpc, &[ix], admin).await?;

        Ok(InitializePoolResult {
            signature:      sig.to_string(),
            pool,
            pool_authority,
            reserve_a,
            reserve_b,
            asset_a_mint:   params.asset_a_mint,
            asset_b_mint:   params.asset_b_mint,
        })
    }

    /// Swap one asset for the other at the fixed 1:1 rate.
    ///
    /// Runs the same checks the program applies (zero amount, user balance,
    /// reserve liquidity) against live balances before submitting, so a
    /// doomed transaction is rejected locally with the precise reason.
    pub async fn swap(&self, user: &Keypair, params: SwapParams) -> Result<SwapResult> {
        let rpc = self.rpc();
        let (pool_addr, pool) = self.fetch_pool(&rpc).await?;

        let reserve_a = parse_token_amount(&rpc.get_account_data(&pool.reserve_a).await?)?;
        let reserve_b = parse_token_amount(&rpc.get_account_data(&pool.reserve_b).await?)?;

        let (source_mint, reserve_in, reserve_out) = match params.direction {
            SwapDirection::AToB => (pool.asset_a_mint, reserve_a, reserve_b),
            SwapDirection::BToA => (pool.asset_b_mint, reserve_b, reserve_a),
        };

        let user_source = derive_ata(&user.pubkey(), &source_mint);
        let source_balance = parse_token_amount(&rpc.get_account_data(&user_source).await?)?;

        let preview = preview_swap(
            params.direction,
            params.amount,
            Some(source_balance),
            reserve_in,
            reserve_out,
        )?;

        let user_asset_a = derive_ata(&user.pubkey(), &pool.asset_a_mint);
        let user_asset_b = derive_ata(&user.pubkey(), &pool.asset_b_mint);

        let ix = match params.direction {
            SwapDirection::AToB => swap_a_to_b_ix(
                &self.program_id,
                &user.pubkey(),
                &pool.asset_a_mint,
                &pool.asset_b_mint,
                &user_asset_a,
                &user_asset_b,
                params.amount,
            ),
            SwapDirection::BToA => swap_b_to_a_ix(
                &self.program_id,
                &user.pubkey(),
                &pool.asset_a_mint,
                &pool.asset_b_mint,
                &user_asset_a,
                &user_asset_b,
                params.amount,
            ),
        };
        let sig = self.sign_and_send(&rpc, &[ix], user).await?;

        Ok(SwapResult {
            signature:  sig.to_string(),
            pool:       pool_addr,
            direction:  params.direction,
            amount_in:  preview.amount_in,
            amount_out: preview.amount_out,
        })
    }

    // ── Read operations ───────────────────────────────────────────────────────

    /// Preview a swap without submitting a transaction.
    ///
    /// Only the reserve-liquidity side is checked here; the user balance is
    /// not fetched (pass the request through [`ParSwapClient::swap`] for the
    /// full precondition set).
    pub async fn preview(&self, params: SwapParams) -> Result<SwapPreview> {
        let rpc = self.rpc();
        let (_, pool) = self.fetch_pool(&rpc).await?;

        let reserve_a = parse_token_amount(&rpc.get_account_data(&pool.reserve_a).await?)?;
        let reserve_b = parse_token_amount(&rpc.get_account_data(&pool.reserve_b).await?)?;
        let (reserve_in, reserve_out) = match params.direction {
            SwapDirection::AToB => (reserve_a, reserve_b),
            SwapDirection::BToA => (reserve_b, reserve_a),
        };

        preview_swap(params.direction, params.amount, None, reserve_in, reserve_out)
    }

    /// Fetch pool state plus current reserve balances.
    pub async fn pool_info(&self) -> Result<PoolInfo> {
        let rpc = self.rpc();
        let (pool_addr, pool) = self.fetch_pool(&rpc).await?;

        let reserve_a_balance = parse_token_amount(&rpc.get_account_data(&pool.reserve_a).await?)?;
        let reserve_b_balance = parse_token_amount(&rpc.get_account_data(&pool.reserve_b).await?)?;

        Ok(PoolInfo {
            pool:         pool_addr,
            authority:    pool.authority,
            asset_a_mint: pool.asset_a_mint,
            asset_b_mint: pool.asset_b_mint,
            reserve_a:    pool.reserve_a,
            reserve_b:    pool.reserve_b,
            reserve_a_balance,
            reserve_b_balance,
        })
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    fn rpc(&self) -> RpcClient {
        RpcClient::new_with_commitment(self.rpc_url.clone(), CommitmentConfig::confirmed())
    }

    async fn sign_and_send(
        &self,
        rpc:          &RpcClient,
        instructions: &[Instruction],
        payer:        &Keypair,
    ) -> Result<Signature> {
        let blockhash = rpc.get_latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            &[payer],
            blockhash,
        );
        Ok(rpc.send_and_confirm_transaction(&tx).await?)
    }

    /// Fetch and parse the singleton pool; `PoolNotFound` when the account is
    /// missing or `initialize` never completed.
    async fn fetch_pool(&self, rpc: &RpcClient) -> Result<(Pubkey, PoolState)> {
        let (pool_addr, _) = derive_pool(&self.program_id);
        let data = rpc
            .get_account_data(&pool_addr)
            .await
            .map_err(|_| Error::PoolNotFound)?;
        let pool = parse_pool(&data)?;
        if !pool.is_initialized() {
            return Err(Error::PoolNotFound);
        }
        Ok((pool_addr, pool))
    }
}
