use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::{constants::*, error::ParSwapError, state::Pool};

/// Create the singleton fixed-rate pool.
/// The PDA authority owns both reserves — no human key controls the funds.
/// Reserves start empty; liquidity arrives through ordinary SPL transfers
/// after initialization.
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    require!(
        !ctx.accounts.pool.is_initialized(),
        ParSwapError::AlreadyInitialized
    );

    // The supplied authority must equal the recomputed derivation; it is
    // never a caller-choosable value.
    let (derived_authority, authority_bump) =
        Pubkey::try_find_program_address(&[POOL_AUTHORITY_SEED], ctx.program_id)
            .ok_or(ParSwapError::AuthorityDerivationFailed)?;
    require_keys_eq!(
        ctx.accounts.pool_authority.key(),
        derived_authority,
        ParSwapError::AuthorityMismatch
    );

    let pool = &mut ctx.accounts.pool;
    pool.authority = derived_authority;
    pool.authority_bump = authority_bump;
    pool.asset_a_mint = ctx.accounts.asset_a_mint.key();
    pool.asset_b_mint = ctx.accounts.asset_b_mint.key();
    pool.reserve_a = ctx.accounts.reserve_a.key();
    pool.reserve_b = ctx.accounts.reserve_b.key();
    pool.bump = ctx.bumps.pool;

    msg!(
        "Pool initialized: {}/{}",
        pool.asset_a_mint,
        pool.asset_b_mint
    );
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    pub asset_a_mint: Account<'info, Mint>,
    pub asset_b_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = admin,
        space = Pool::LEN,
        seeds = [POOL_SEED],
        bump,
    )]
    pub pool: Account<'info, Pool>,

    /// CHECK: validated in the handler against the recomputed derivation
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [RESERVE_A_SEED, asset_a_mint.key().as_ref()],
        bump,
        token::mint = asset_a_mint,
        token::authority = pool_authority,
        constraint = reserve_a.mint == asset_a_mint.key() @ ParSwapError::AssetMismatch,
    )]
    pub reserve_a: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [RESERVE_B_SEED, asset_b_mint.key().as_ref()],
        bump,
        token::mint = asset_b_mint,
        token::authority = pool_authority,
        constraint = reserve_b.mint == asset_b_mint.key() @ ParSwapError::AssetMismatch,
    )]
    pub reserve_b: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
