use anchor_lang::prelude::*;
use crate::error::ParSwapError;

/// Transfer legs of one swap, shared by `swap_a_to_b` and `swap_b_to_a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapLegs {
    /// Tokens the user sends into the source-side reserve.
    pub amount_in: u64,
    /// Tokens the payout-side reserve sends to the user.
    pub amount_out: u64,
}

/// Validate a swap request and produce its two transfer legs.
///
/// * `amount`                 – requested quantity of the source asset
/// * `user_source_balance`    – balance of the user's source token account
/// * `payout_reserve_balance` – balance of the reserve that will pay out
///
/// The exchange rate is exactly 1:1 with no fee, so both legs carry the
/// identical `amount`. All checks run before either transfer is issued;
/// a rejection leaves every balance untouched.
pub fn plan_swap(
    amount: u64,
    user_source_balance: u64,
    payout_reserve_balance: u64,
) -> Result<SwapLegs> {
    require!(amount > 0, ParSwapError::ZeroAmount);
    require!(
        user_source_balance >= amount,
        ParSwapError::InsufficientUserBalance
    );
    require!(
        payout_reserve_balance >= amount,
        ParSwapError::InsufficientReserveLiquidity
    );

    Ok(SwapLegs {
        amount_in: amount,
        amount_out: amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::{Error, ERROR_CODE_OFFSET};

    /// Anchor error code carried by a rejected plan.
    fn rejection_code(result: Result<SwapLegs>) -> u32 {
        match result.unwrap_err() {
            Error::AnchorError(e) => e.error_code_number,
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    fn code(err: ParSwapError) -> u32 {
        err as u32 + ERROR_CODE_OFFSET
    }

    #[test]
    fn legs_always_carry_the_same_amount() {
        for amount in [1u64, 500, 100_000_000, u64::MAX] {
            let legs = plan_swap(amount, u64::MAX, u64::MAX).unwrap();
            assert_eq!(legs.amount_in, amount);
            assert_eq!(legs.amount_out, amount);
        }
    }

    #[test]
    fn zero_amount_is_rejected() {
        assert_eq!(
            rejection_code(plan_swap(0, 1_000, 1_000)),
            code(ParSwapError::ZeroAmount)
        );
    }

    #[test]
    fn user_balance_below_amount_is_rejected() {
        assert_eq!(
            rejection_code(plan_swap(1_001, 1_000, 10_000)),
            code(ParSwapError::InsufficientUserBalance)
        );
    }

    #[test]
    fn payout_reserve_below_amount_is_rejected() {
        assert_eq!(
            rejection_code(plan_swap(1_001, 10_000, 1_000)),
            code(ParSwapError::InsufficientReserveLiquidity)
        );
    }

    #[test]
    fn user_balance_is_checked_before_reserve_liquidity() {
        // Both preconditions fail; the user-balance error wins.
        assert_eq!(
            rejection_code(plan_swap(50, 10, 10)),
            code(ParSwapError::InsufficientUserBalance)
        );
    }

    #[test]
    fn exact_balances_are_accepted() {
        let legs = plan_swap(1_000, 1_000, 1_000).unwrap();
        assert_eq!(legs.amount_in, 1_000);
        assert_eq!(legs.amount_out, 1_000);
    }
}
