//! Combined federal, state, local and payroll tax on wage income.
//!
//! # Computation
//!
//! | Component | Amount |
//! |-----------|--------|
//! | Federal   | Federal bracket tax minus credit (may go below zero) |
//! | State     | State bracket tax |
//! | Local     | Local bracket tax |
//! | Payroll   | Payroll rate × min(income, wage cap) |
//! | Total     | Sum of the four, minimum 0 |
//!
//! The credit only offsets the federal component, but any excess credit still
//! reduces the combined total before the zero floor is applied.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use childcare_core::TaxTables;
//! use childcare_core::calculations::TaxEngine;
//!
//! let tables = TaxTables::nyc_2024();
//! let engine = TaxEngine::new(&tables);
//!
//! assert_eq!(engine.compute_tax(dec!(80000), dec!(0)), dec!(22528.406));
//! assert_eq!(engine.compute_tax(dec!(80000), dec!(2000)), dec!(20528.406));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TaxTables;
use crate::calculations::common::non_negative;

/// Per-component view of a tax computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Federal bracket tax after the credit has been subtracted.
    pub federal: Decimal,
    pub state: Decimal,
    pub local: Decimal,
    pub payroll: Decimal,
    /// Sum of the components, floored at zero.
    pub total: Decimal,
}

/// Applies a set of [`TaxTables`] to an annual income.
#[derive(Debug, Clone, Copy)]
pub struct TaxEngine<'a> {
    tables: &'a TaxTables,
}

impl<'a> TaxEngine<'a> {
    pub fn new(tables: &'a TaxTables) -> Self {
        Self { tables }
    }

    /// Total tax owed on `income` after `credit`, never below zero.
    pub fn compute_tax(
        &self,
        income: Decimal,
        credit: Decimal,
    ) -> Decimal {
        self.breakdown(income, credit).total
    }

    /// Computes every tax component for `income`.
    pub fn breakdown(
        &self,
        income: Decimal,
        credit: Decimal,
    ) -> TaxBreakdown {
        let federal = self.tables.federal.tax_on(income) - credit;
        let state = self.tables.state.tax_on(income);
        let local = self.tables.local.tax_on(income);
        let payroll = self.tables.payroll.levy_on(income);

        TaxBreakdown {
            federal,
            state,
            local,
            payroll,
            total: non_negative(federal + state + local + payroll),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{BracketSchedule, PayrollLevy, TaxBracket};

    fn flat_tables() -> TaxTables {
        let flat = |rate| BracketSchedule::new(vec![TaxBracket::unbounded(rate)]).unwrap();

        TaxTables {
            federal: flat(dec!(0.10)),
            state: flat(dec!(0.05)),
            local: flat(dec!(0.01)),
            payroll: PayrollLevy {
                rate: dec!(0.0765),
                wage_cap: dec!(50000),
            },
        }
    }

    #[test]
    fn zero_income_owes_nothing() {
        let tables = TaxTables::nyc_2024();
        let engine = TaxEngine::new(&tables);

        assert_eq!(engine.compute_tax(dec!(0), dec!(0)), dec!(0));
    }

    #[test]
    fn breakdown_of_80000_matches_component_schedules() {
        let tables = TaxTables::nyc_2024();
        let engine = TaxEngine::new(&tables);

        let breakdown = engine.breakdown(dec!(80000), dec!(0));

        assert_eq!(breakdown.federal, dec!(9136));
        assert_eq!(breakdown.state, dec!(4390.6));
        assert_eq!(breakdown.local, dec!(2881.806));
        assert_eq!(breakdown.payroll, dec!(6120));
        assert_eq!(breakdown.total, dec!(22528.406));
    }

    #[test]
    fn federal_boundary_is_taxed_at_lower_rate() {
        let tables = TaxTables::nyc_2024();
        let engine = TaxEngine::new(&tables);

        let breakdown = engine.breakdown(dec!(23200), dec!(0));

        assert_eq!(breakdown.federal, dec!(23200) * dec!(0.10));
        assert_eq!(breakdown.total, dec!(5778.09));
    }

    #[test]
    fn payroll_component_is_capped_for_high_income() {
        let tables = TaxTables::nyc_2024();
        let engine = TaxEngine::new(&tables);

        let breakdown = engine.breakdown(dec!(500000), dec!(0));

        assert_eq!(breakdown.payroll, dec!(0.0765) * dec!(168600));
        assert_eq!(breakdown.total, dec!(179859.446));
    }

    #[test]
    fn credit_reduces_federal_component_only() {
        let tables = flat_tables();
        let engine = TaxEngine::new(&tables);

        let breakdown = engine.breakdown(dec!(10000), dec!(400));

        assert_eq!(breakdown.federal, dec!(600));
        assert_eq!(breakdown.state, dec!(500));
        assert_eq!(breakdown.local, dec!(100));
        assert_eq!(breakdown.payroll, dec!(765));
        assert_eq!(breakdown.total, dec!(1965));
    }

    #[test]
    fn excess_credit_offsets_other_components_before_floor() {
        let tables = flat_tables();
        let engine = TaxEngine::new(&tables);

        // federal 1000 - 1500 = -500, leaving 1365 - 500
        let breakdown = engine.breakdown(dec!(10000), dec!(1500));

        assert_eq!(breakdown.federal, dec!(-500));
        assert_eq!(breakdown.total, dec!(865));
    }

    #[test]
    fn total_is_floored_at_zero() {
        let tables = TaxTables::nyc_2024();
        let engine = TaxEngine::new(&tables);

        assert_eq!(engine.compute_tax(dec!(10000), dec!(4000)), dec!(0));
    }

    #[test]
    fn compute_tax_matches_breakdown_total() {
        let tables = TaxTables::nyc_2024();
        let engine = TaxEngine::new(&tables);

        for income in [dec!(0), dec!(17150), dec!(94300), dec!(250000), dec!(3000000)] {
            assert_eq!(
                engine.compute_tax(income, dec!(2000)),
                engine.breakdown(income, dec!(2000)).total
            );
        }
    }
}
