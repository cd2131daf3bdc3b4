//! Bounded bisection for the income at which a monotone net figure crosses zero.
//!
//! The search always terminates after a fixed number of halvings, exiting early
//! once the function value is within the tolerance of zero. The returned
//! midpoint is checked once more so callers can tell a root from a bracket
//! pinned against the floor or ceiling.

use rust_decimal::Decimal;
use tracing::trace;

/// Outcome of a [`bisect`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BisectionResult {
    /// Midpoint of the final search bracket.
    pub value: Decimal,

    /// Number of function evaluations performed.
    pub iterations: u32,

    /// True when `f(value)` is within tolerance of zero.
    pub converged: bool,
}

/// Bisects `[floor, ceiling]` for the root of a non-decreasing `f`.
///
/// Each step evaluates `f` at the bracket midpoint. A value within `tolerance`
/// of zero ends the search immediately. Otherwise a negative value moves the
/// floor up to the midpoint and a non-negative one moves the ceiling down.
/// After `iterations` steps the midpoint of the remaining bracket is returned,
/// marked converged only if it too is within tolerance.
///
/// ```
/// use rust_decimal_macros::dec;
/// use childcare_core::calculations::break_even::bisect;
///
/// let result = bisect(dec!(0), dec!(100), 20, dec!(0.01), |x| x - dec!(37.5));
///
/// assert!(result.converged);
/// assert!((result.value - dec!(37.5)).abs() < dec!(0.01));
/// ```
pub fn bisect<F>(
    floor: Decimal,
    ceiling: Decimal,
    iterations: u32,
    tolerance: Decimal,
    f: F,
) -> BisectionResult
where
    F: Fn(Decimal) -> Decimal,
{
    let mut low = floor;
    let mut high = ceiling;

    for iteration in 1..=iterations {
        let mid = (low + high) / Decimal::TWO;
        let net = f(mid);
        trace!(iteration, %mid, %net, "bisection step");

        if net.abs() < tolerance {
            return BisectionResult {
                value: mid,
                iterations: iteration,
                converged: true,
            };
        }

        if net < Decimal::ZERO {
            low = mid;
        } else {
            high = mid;
        }
    }

    let value = (low + high) / Decimal::TWO;
    BisectionResult {
        value,
        iterations,
        converged: f(value).abs() < tolerance,
    }
}
