//! Off-chain swap preview.
//!
//! Mirrors the on-chain checks exactly so off-chain previews match on-chain
//! results: a preview that returns `Ok` would be accepted by the program
//! against the same balances, and a rejection carries the same reason the
//! program would report.

use crate::error::{Error, Result};
use crate::types::{SwapDirection, SwapPreview};

/// Preview a fixed-rate swap against pre-fetched balances.
///
/// * `direction`           – which asset the user is selling
/// * `amount_in`           – raw amount of the source asset
/// * `user_source_balance` – the user's source account balance, if known;
///                           `None` skips the user-balance check (the
///                           program still enforces it)
/// * `reserve_in`          – balance of the reserve receiving the input
/// * `reserve_out`         – balance of the reserve paying out
///
/// The rate is fixed at 1:1 with no fee, so `amount_out == amount_in` for
/// every accepted preview.
pub fn preview_swap(
    direction: SwapDirection,
    amount_in: u64,
    user_source_balance: Option<u64>,
    reserve_in: u64,
    reserve_out: u64,
) -> Result<SwapPreview> {
    if amount_in == 0 {
        return Err(Error::ZeroAmount);
    }
    if let Some(balance) = user_source_balance {
        if balance < amount_in {
            return Err(Error::InsufficientUserBalance {
                requested: amount_in,
                available: balance,
            });
        }
    }
    if reserve_out < amount_in {
        return Err(Error::InsufficientReserveLiquidity {
            requested: amount_in,
            available: reserve_out,
        });
    }

    let reserve_in_after = reserve_in
        .checked_add(amount_in)
        .ok_or(Error::MathOverflow)?;

    Ok(SwapPreview {
        direction,
        amount_in,
        amount_out: amount_in,
        reserve_in_after,
        reserve_out_after: reserve_out - amount_in,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The four balances a swap touches, with the same apply rule the
    /// program's two transfers produce.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Ledger {
        user_a:    u64,
        user_b:    u64,
        reserve_a: u64,
        reserve_b: u64,
    }

    impl Ledger {
        fn swap(&self, direction: SwapDirection, amount: u64) -> Result<Ledger> {
            let (source_balance, reserve_in, reserve_out) = match direction {
                SwapDirection::AToB => (self.user_a, self.reserve_a, self.reserve_b),
                SwapDirection::BToA => (self.user_b, self.reserve_b, self.reserve_a),
            };
            let preview =
                preview_swap(direction, amount, Some(source_balance), reserve_in, reserve_out)?;

            Ok(match direction {
                SwapDirection::AToB => Ledger {
                    user_a:    self.user_a - preview.amount_in,
                    user_b:    self.user_b + preview.amount_out,
                    reserve_a: preview.reserve_in_after,
                    reserve_b: preview.reserve_out_after,
                },
                SwapDirection::BToA => Ledger {
                    user_a:    self.user_a + preview.amount_out,
                    user_b:    self.user_b - preview.amount_in,
                    reserve_a: preview.reserve_out_after,
                    reserve_b: preview.reserve_in_after,
                },
            })
        }
    }

    fn funded() -> Ledger {
        Ledger {
            user_a:    1_000_000_000,
            user_b:    1_000_000_000,
            reserve_a: 1_000_000_000,
            reserve_b: 1_000_000_000,
        }
    }

    #[test]
    fn swap_a_to_b_moves_the_exact_amount_on_all_four_balances() {
        let after = funded().swap(SwapDirection::AToB, 100_000_000).unwrap();
        assert_eq!(after.user_a, 900_000_000);
        assert_eq!(after.user_b, 1_100_000_000);
        assert_eq!(after.reserve_a, 1_100_000_000);
        assert_eq!(after.reserve_b, 900_000_000);
    }

    #[test]
    fn reverse_swap_restores_all_four_balances() {
        let start = funded();
        let mid = start.swap(SwapDirection::AToB, 100_000_000).unwrap();
        let end = mid.swap(SwapDirection::BToA, 100_000_000).unwrap();
        assert_eq!(end, start);
    }

    #[test]
    fn value_is_conserved_per_asset() {
        let start = funded();
        let after = start.swap(SwapDirection::AToB, 123_456_789).unwrap();
        assert_eq!(start.user_a + start.reserve_a, after.user_a + after.reserve_a);
        assert_eq!(start.user_b + start.reserve_b, after.user_b + after.reserve_b);
    }

    #[test]
    fn rate_is_one_to_one_regardless_of_reserve_ratio() {
        // A heavily imbalanced pool still quotes exactly amount-for-amount.
        let preview = preview_swap(SwapDirection::AToB, 5_000, None, 1, 1_000_000_000).unwrap();
        assert_eq!(preview.amount_out, 5_000);
    }

    #[test]
    fn zero_amount_is_rejected_and_nothing_moves() {
        let start = funded();
        assert!(matches!(
            start.swap(SwapDirection::AToB, 0).unwrap_err(),
            Error::ZeroAmount
        ));
        // The rejected request produced no new ledger; `start` is untouched.
        assert_eq!(start, funded());
    }

    #[test]
    fn amount_above_payout_reserve_is_rejected() {
        let start = funded();
        let err = start.swap(SwapDirection::AToB, 1_000_000_001).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientUserBalance { .. }
        ));

        // With user funds available, the reserve check is the binding one.
        let whale = Ledger { user_a: 2_000_000_000, ..funded() };
        let err = whale.swap(SwapDirection::AToB, 1_000_000_001).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientReserveLiquidity {
                requested: 1_000_000_001,
                available: 1_000_000_000,
            }
        ));
    }

    #[test]
    fn draining_the_payout_reserve_exactly_is_allowed() {
        let after = funded().swap(SwapDirection::BToA, 1_000_000_000).unwrap();
        assert_eq!(after.reserve_a, 0);
        assert_eq!(after.user_a, 2_000_000_000);
    }

    #[test]
    fn unknown_user_balance_defers_that_check_to_the_program() {
        let preview = preview_swap(SwapDirection::BToA, 500, None, 1_000, 1_000).unwrap();
        assert_eq!(preview.amount_out, 500);
    }

    #[test]
    fn receiving_reserve_overflow_is_reported() {
        assert!(matches!(
            preview_swap(SwapDirection::AToB, 2, None, u64::MAX - 1, 10).unwrap_err(),
            Error::MathOverflow
        ));
    }
}
