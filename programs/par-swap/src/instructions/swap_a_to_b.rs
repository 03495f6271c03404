use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::{constants::*, error::ParSwapError, state::Pool};
use super::swap_plan::plan_swap;

/// Swap `amount` of asset A for the same `amount` of asset B.
///
/// Two transfers, one transaction:
///   1. user_asset_a → reserve_a   : amount tokens (user-signed)
///   2. reserve_b → user_asset_b   : amount tokens (PDA-signed)
/// A failure in either leg aborts the whole instruction.
pub fn handler(ctx: Context<SwapAToB>, amount: u64) -> Result<()> {
    let legs = plan_swap(
        amount,
        ctx.accounts.user_asset_a.amount,
        ctx.accounts.reserve_b.amount,
    )?;

    // Leg 1: user pays asset A into the pool.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user_asset_a.to_account_info(),
                to: ctx.accounts.reserve_a.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        legs.amount_in,
    )?;

    // Leg 2: pool pays asset B out, signed by the derived authority.
    let authority_bump = ctx.accounts.pool.authority_bump;
    let seeds: &[&[u8]] = &[POOL_AUTHORITY_SEED, &[authority_bump]];
    let signer = &[seeds];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.reserve_b.to_account_info(),
                to: ctx.accounts.user_asset_b.to_account_info(),
                authority: ctx.accounts.pool_authority.to_account_info(),
            },
            signer,
        ),
        legs.amount_out,
    )?;

    msg!("Swapped {} of asset A for {} of asset B", legs.amount_in, legs.amount_out);
    Ok(())
}

#[derive(Accounts)]
pub struct SwapAToB<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(seeds = [POOL_SEED], bump = pool.bump)]
    pub pool: Account<'info, Pool>,

    /// CHECK: must be the derived authority recorded at initialization
    #[account(
        constraint = pool_authority.key() == pool.authority @ ParSwapError::AuthorityMismatch,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = reserve_a.key() == pool.reserve_a @ ParSwapError::AccountMismatch,
    )]
    pub reserve_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = reserve_b.key() == pool.reserve_b @ ParSwapError::AccountMismatch,
    )]
    pub reserve_b: Box<Account<'info, TokenAccount>>,

    /// Token account the user is selling asset A from
    #[account(
        mut,
        constraint = user_asset_a.mint == pool.asset_a_mint @ ParSwapError::AccountMismatch,
        constraint = user_asset_a.owner == user.key() @ ParSwapError::AccountMismatch,
    )]
    pub user_asset_a: Box<Account<'info, TokenAccount>>,

    /// Token account the user is receiving asset B into
    #[account(
        mut,
        constraint = user_asset_b.mint == pool.asset_b_mint @ ParSwapError::AccountMismatch,
        constraint = user_asset_b.owner == user.key() @ ParSwapError::AccountMismatch,
    )]
    pub user_asset_b: Box<Account<'info, TokenAccount>>,

    // Mints are accepted for validation only; pool state is authoritative.
    #[account(
        constraint = asset_a_mint.key() == pool.asset_a_mint @ ParSwapError::AccountMismatch,
    )]
    pub asset_a_mint: Account<'info, Mint>,

    #[account(
        constraint = asset_b_mint.key() == pool.asset_b_mint @ ParSwapError::AccountMismatch,
    )]
    pub asset_b_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}
