//! ParSwap — fixed-rate two-asset exchange pool.
//!
//! 3 instructions:
//!   initialize   — create the singleton pool with PDA authority
//!   swap_a_to_b  — exchange asset A for asset B at exactly 1:1
//!   swap_b_to_a  — exchange asset B for asset A at exactly 1:1
//!
//! There is no fee and no price curve: every accepted swap moves the
//! identical amount on both legs. Reserves are funded by ordinary SPL
//! transfers after initialization.

// ─── Security contact ─────────────────────────────────────────────────────────

use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name:             "ParSwap",
    project_url:      "https://github.com/par-swap/par-swap",
    contacts:         "email:security@par-swap.dev",
    policy:           "Please report security vulnerabilities by emailing security@par-swap.dev. \
                       We aim to respond within 48 hours.",
    source_code:      "https://github.com/par-swap/par-swap",
    preferred_languages: "en"
}

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;
pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod par_swap {
    use super::*;

    /// Create the pool. PDA controls both reserves — no human key.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize::handler(ctx)
    }

    /// Exchange `amount` of asset A for `amount` of asset B.
    pub fn swap_a_to_b(ctx: Context<SwapAToB>, amount: u64) -> Result<()> {
        swap_a_to_b::handler(ctx, amount)
    }

    /// Exchange `amount` of asset B for `amount` of asset A.
    pub fn swap_b_to_a(ctx: Context<SwapBToA>, amount: u64) -> Result<()> {
        swap_b_to_a::handler(ctx, amount)
    }
}
