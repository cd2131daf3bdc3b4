use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single marginal bracket. `upper_bound` of `None` marks the open-ended
/// top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn capped(
        upper_bound: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    pub fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }
}

/// Errors raised when a bracket schedule does not partition `[0, ∞)`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("bracket schedule has no brackets")]
    Empty,

    #[error("marginal rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    #[error("bracket {index} upper bound {bound} does not exceed the previous bound")]
    NonIncreasingBound { index: usize, bound: Decimal },

    #[error("last bracket must be unbounded")]
    MissingUnboundedBracket,

    #[error("unbounded bracket at position {0} is not the last bracket")]
    UnboundedBracketNotLast(usize),
}

/// An ordered progressive rate table applied marginally.
///
/// Construction validates that caps are strictly increasing and that only the
/// final bracket is unbounded, so the brackets partition `[0, ∞)` without gaps
/// or overlaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketSchedule {
    brackets: Vec<TaxBracket>,
}

impl BracketSchedule {
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, ScheduleError> {
        if brackets.is_empty() {
            return Err(ScheduleError::Empty);
        }

        let last = brackets.len() - 1;
        let mut previous = Decimal::ZERO;

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(ScheduleError::InvalidRate(bracket.rate));
            }

            match bracket.upper_bound {
                Some(bound) if bound <= previous => {
                    return Err(ScheduleError::NonIncreasingBound { index, bound });
                }
                Some(_) if index == last => return Err(ScheduleError::MissingUnboundedBracket),
                Some(bound) => previous = bound,
                None if index != last => return Err(ScheduleError::UnboundedBracketNotLast(index)),
                None => {}
            }
        }

        Ok(Self { brackets })
    }

    /// Builds a schedule from brackets already known to satisfy the
    /// partition invariant, such as the built-in tables.
    pub(crate) fn from_trusted(brackets: Vec<TaxBracket>) -> Self {
        debug_assert!(Self::new(brackets.clone()).is_ok());
        Self { brackets }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Tax owed on `income` under this schedule.
    ///
    /// Each bracket whose cap lies strictly below `income` contributes its full
    /// width at its rate. The first bracket whose cap is at or above `income`
    /// contributes the remaining slice and ends the walk, so income exactly on
    /// a cap is taxed entirely at the lower bracket's rate.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use childcare_core::{BracketSchedule, TaxBracket};
    ///
    /// let schedule = BracketSchedule::new(vec![
    ///     TaxBracket::capped(dec!(10000), dec!(0.10)),
    ///     TaxBracket::unbounded(dec!(0.20)),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(schedule.tax_on(dec!(10000)), dec!(1000));
    /// assert_eq!(schedule.tax_on(dec!(15000)), dec!(2000));
    /// ```
    pub fn tax_on(
        &self,
        income: Decimal,
    ) -> Decimal {
        let mut tax = Decimal::ZERO;
        let mut previous_cap = Decimal::ZERO;

        for bracket in &self.brackets {
            match bracket.upper_bound {
                Some(cap) if income > cap => {
                    tax += (cap - previous_cap) * bracket.rate;
                    previous_cap = cap;
                }
                _ => {
                    tax += (income - previous_cap) * bracket.rate;
                    break;
                }
            }
        }

        tax
    }
}
