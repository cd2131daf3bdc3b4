//! Small decimal helpers shared by the calculators and their callers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to whole cents, with exact half-cents rounded away from zero.
///
/// Calculations run unrounded; this is for presenting currency amounts.
///
/// ```
/// use rust_decimal_macros::dec;
/// use childcare_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(59471.594)), dec!(59471.59));
/// assert_eq!(round_half_up(dec!(0.125)), dec!(0.13));
/// assert_eq!(round_half_up(dec!(-0.125)), dec!(-0.13));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a value at zero.
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_keeps_two_places() {
        assert_eq!(round_half_up(dec!(20528.406)), dec!(20528.41));
    }

    #[test]
    fn round_half_up_rounds_midpoint_away_from_zero() {
        assert_eq!(round_half_up(dec!(10485.105)), dec!(10485.11));
        assert_eq!(round_half_up(dec!(-10485.105)), dec!(-10485.11));
    }

    #[test]
    fn round_half_up_collapses_long_bisection_fractions() {
        assert_eq!(round_half_up(dec!(47399.139404296875)), dec!(47399.14));
    }

    #[test]
    fn non_negative_clamps_negative_to_zero() {
        assert_eq!(non_negative(dec!(-250.50)), Decimal::ZERO);
    }

    #[test]
    fn non_negative_passes_positive_through() {
        assert_eq!(non_negative(dec!(250.50)), dec!(250.50));
    }
}
