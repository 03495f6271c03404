//! Public parameter and result types.

use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

// ─── Swap direction ───────────────────────────────────────────────────────────

/// Which asset the user is selling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapDirection {
    /// Sell asset A, receive asset B.
    AToB,
    /// Sell asset B, receive asset A.
    BToA,
}

impl SwapDirection {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            SwapDirection::AToB => SwapDirection::BToA,
            SwapDirection::BToA => SwapDirection::AToB,
        }
    }
}

impl std::fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapDirection::AToB => write!(f, "a-to-b"),
            SwapDirection::BToA => write!(f, "b-to-a"),
        }
    }
}

// ─── initialize ───────────────────────────────────────────────────────────────

/// Parameters for [`crate::ParSwapClient::initialize_pool`].
#[derive(Debug, Clone, Copy)]
pub struct InitializePoolParams {
    pub asset_a_mint: Pubkey,
    pub asset_b_mint: Pubkey,
}

/// Result of a successful pool initialization.
#[derive(Debug, Clone, Serialize)]
pub struct InitializePoolResult {
    pub signature:      String,
    pub pool:           Pubkey,
    pub pool_authority: Pubkey,
    pub reserve_a:      Pubkey,
    pub reserve_b:      Pubkey,
    pub asset_a_mint:   Pubkey,
    pub asset_b_mint:   Pubkey,
}

// ─── swap ─────────────────────────────────────────────────────────────────────

/// Parameters for [`crate::ParSwapClient::swap`].
#[derive(Debug, Clone, Copy)]
pub struct SwapParams {
    pub direction: SwapDirection,
    /// Quantity of the source asset to sell (atomic units).
    pub amount: u64,
}

/// Result of a submitted swap.
#[derive(Debug, Clone, Serialize)]
pub struct SwapResult {
    pub signature:  String,
    pub pool:       Pubkey,
    pub direction:  SwapDirection,
    pub amount_in:  u64,
    /// Always equal to `amount_in` — the rate is fixed at 1:1.
    pub amount_out: u64,
}

// ─── preview ──────────────────────────────────────────────────────────────────

/// Outcome of a hypothetical swap, computed from pre-fetched balances.
///
/// Mirrors the on-chain checks exactly: a preview that returns `Ok` would be
/// accepted by the program against the same balances.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SwapPreview {
    pub direction:  SwapDirection,
    pub amount_in:  u64,
    /// Always equal to `amount_in` — the rate is fixed at 1:1.
    pub amount_out: u64,
    /// Source-side reserve balance after the swap commits.
    pub reserve_in_after:  u64,
    /// Payout-side reserve balance after the swap commits.
    pub reserve_out_after: u64,
}

// ─── pool info ────────────────────────────────────────────────────────────────

/// Pool state plus live reserve balances.
#[derive(Debug, Clone, Serialize)]
pub struct PoolInfo {
    pub pool:              Pubkey,
    pub authority:         Pubkey,
    pub asset_a_mint:      Pubkey,
    pub asset_b_mint:      Pubkey,
    pub reserve_a:         Pubkey,
    pub reserve_b:         Pubkey,
    pub reserve_a_balance: u64,
    pub reserve_b_balance: u64,
}
