//! SDK error type.

/// All errors returned by the ParSwap SDK.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // ── RPC / network ────────────────────────────────────────────────────────
    /// A Solana JSON-RPC call failed.
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    // ── Pool discovery ───────────────────────────────────────────────────────
    /// The pool account does not exist or has never been initialized.
    #[error("Pool not found — run initialize first")]
    PoolNotFound,

    // ── Swap preconditions (mirror the on-chain checks) ──────────────────────
    /// The requested swap amount is zero.
    #[error("Amount must be greater than zero")]
    ZeroAmount,

    /// The user's source account holds less than the requested amount.
    #[error("Source balance {available} is below the swap amount {requested}")]
    InsufficientUserBalance { requested: u64, available: u64 },

    /// The payout-side reserve holds less than the requested amount.
    #[error("Reserve holds {available} but the swap requests {requested}")]
    InsufficientReserveLiquidity { requested: u64, available: u64 },

    // ── Arithmetic ───────────────────────────────────────────────────────────
    #[error("Integer overflow in balance math")]
    MathOverflow,

    // ── Account parsing ──────────────────────────────────────────────────────
    /// Raw account bytes could not be deserialized.
    #[error("Account parse error at offset {offset}: {reason}")]
    ParseError { offset: usize, reason: String },

    // ── Validation ───────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias so every module can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;
