use anchor_lang::prelude::*;

#[error_code]
pub enum ParSwapError {
    #[msg("Pool is already initialized")]
    AlreadyInitialized,
    #[msg("Supplied authority does not match the derived pool authority")]
    AuthorityMismatch,
    #[msg("Reserve account is tagged with the wrong asset mint")]
    AssetMismatch,
    #[msg("Supplied account does not match the one recorded in pool state")]
    AccountMismatch,
    #[msg("User balance is below the requested swap amount")]
    InsufficientUserBalance,
    #[msg("Reserve holds less than the requested payout")]
    InsufficientReserveLiquidity,
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("No valid bump seed exists for the pool authority")]
    AuthorityDerivationFailed,
}
