use anchor_lang::prelude::*;

// ─── Pool ──────────────────────────────────────────────────────────────────
// Fixed-rate pool: every swap moves the same amount on both legs (1:1).
// Authority is a PDA that owns both reserve accounts — no human key required.
// Singleton: one pool per program deployment, addressed by the fixed
// `pool` seed so clients can locate it without a registry.
#[account]
pub struct Pool {
    /// PDA that owns reserve_a and reserve_b
    pub authority: Pubkey,      // 32
    pub authority_bump: u8,     // 1
    pub asset_a_mint: Pubkey,   // 32
    pub asset_b_mint: Pubkey,   // 32
    /// Token account holding the pool's asset-A reserve
    pub reserve_a: Pubkey,      // 32
    /// Token account holding the pool's asset-B reserve
    pub reserve_b: Pubkey,      // 32
    pub bump: u8,               // 1
}

impl Pool {
    // 8 discriminator + 32+1+32+32+32+32+1 = 170
    pub const LEN: usize = 170;

    /// An all-zero authority means `initialize` has not run yet.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }
}
