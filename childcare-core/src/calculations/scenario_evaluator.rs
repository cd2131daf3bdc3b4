//! Compares household take-home pay with and without the stay-at-home parent's
//! wages.
//!
//! # Steps
//!
//! 1. Child tax credit: `min(dependents × credit_per_dependent, credit_cap)`,
//!    where each childcare cost counts as one dependent.
//! 2. With an FSA election, the FSA pool is drawn down across childcare costs in
//!    entry order until exhausted.
//! 3. Current take-home: working income minus tax on it.
//! 4. New take-home: combined income minus tax on it.
//! 5. Childcare cost: sum of the (FSA-adjusted) costs.
//! 6. Delta: new take-home minus (current take-home + childcare cost).
//! 7. A negative delta triggers a bisection for the break-even second income,
//!    holding working income and childcare cost fixed.
//!
//! The FSA only lowers the childcare figure. It is not deducted from taxable
//! income, so the tax side of a real dependent-care FSA is not modelled.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::break_even::{BisectionResult, bisect};
use crate::calculations::tax_engine::TaxEngine;
use crate::{CalculatorConfig, ScenarioInput, ScenarioOutput, TaxTables};

/// Childcare costs after the FSA pool has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsaAllocation {
    pub adjusted_costs: Vec<Decimal>,
    pub used: Decimal,
}

/// Draws `pool` down across `costs` greedily, in order.
///
/// ```
/// use rust_decimal_macros::dec;
/// use childcare_core::calculations::apply_fsa;
///
/// let allocation = apply_fsa(&[dec!(3000), dec!(4000)], dec!(5000));
///
/// assert_eq!(allocation.adjusted_costs, vec![dec!(0), dec!(2000)]);
/// assert_eq!(allocation.used, dec!(5000));
/// ```
pub fn apply_fsa(
    costs: &[Decimal],
    pool: Decimal,
) -> FsaAllocation {
    let mut remaining = pool;
    let mut used = Decimal::ZERO;

    let adjusted_costs = costs
        .iter()
        .map(|&cost| {
            let covered = cost.min(remaining);
            remaining -= covered;
            used += covered;
            cost - covered
        })
        .collect();

    FsaAllocation {
        adjusted_costs,
        used,
    }
}

/// Evaluates [`ScenarioInput`]s against fixed tables and configuration.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioEvaluator<'a> {
    engine: TaxEngine<'a>,
    config: &'a CalculatorConfig,
}

impl<'a> ScenarioEvaluator<'a> {
    pub fn new(
        tables: &'a TaxTables,
        config: &'a CalculatorConfig,
    ) -> Self {
        Self {
            engine: TaxEngine::new(tables),
            config,
        }
    }

    /// Child tax credit for the given number of dependents.
    pub fn child_tax_credit(
        &self,
        dependents: usize,
    ) -> Decimal {
        (Decimal::from(dependents) * self.config.credit_per_dependent).min(self.config.credit_cap)
    }

    /// Runs the full comparison for one household.
    pub fn evaluate(
        &self,
        input: &ScenarioInput,
    ) -> ScenarioOutput {
        let child_tax_credit = self.child_tax_credit(input.childcare_costs.len());

        let (adjusted_costs, fsa_used) = if input.use_fsa {
            let allocation = apply_fsa(&input.childcare_costs, self.config.fsa_pool);
            (allocation.adjusted_costs, allocation.used)
        } else {
            (input.childcare_costs.clone(), Decimal::ZERO)
        };

        let current_take_home = self.take_home(input.working_income, child_tax_credit);
        let new_take_home =
            self.take_home(input.working_income + input.sahp_income, child_tax_credit);
        let childcare_cost: Decimal = adjusted_costs.iter().sum();
        let delta = new_take_home - (current_take_home + childcare_cost);

        let break_even = (delta < Decimal::ZERO).then(|| {
            self.break_even_income(
                input.working_income,
                current_take_home + childcare_cost,
                child_tax_credit,
            )
        });
        let break_even_income = break_even.map(|result| result.value);
        let break_even_reached = break_even.is_some_and(|result| result.converged);

        debug!(
            %current_take_home,
            %new_take_home,
            %childcare_cost,
            %delta,
            ?break_even_income,
            break_even_reached,
            "evaluated scenario"
        );

        ScenarioOutput {
            current_take_home,
            new_take_home,
            childcare_cost,
            delta,
            break_even_income,
            break_even_reached,
            child_tax_credit,
            fsa_used,
        }
    }

    fn take_home(
        &self,
        income: Decimal,
        credit: Decimal,
    ) -> Decimal {
        income - self.engine.compute_tax(income, credit)
    }

    /// Second income at which the two-income take-home covers `target`.
    fn break_even_income(
        &self,
        working_income: Decimal,
        target: Decimal,
        credit: Decimal,
    ) -> BisectionResult {
        let result = bisect(
            self.config.search_floor,
            self.config.search_ceiling,
            self.config.search_iterations,
            self.config.search_tolerance,
            |candidate| self.take_home(working_income + candidate, credit) - target,
        );

        debug!(
            value = %result.value,
            iterations = result.iterations,
            converged = result.converged,
            "break-even search finished"
        );

        result
    }
}

/// Evaluates `input` with the built-in NYC 2024 tables and default settings.
///
/// ```
/// use rust_decimal_macros::dec;
/// use childcare_core::{ScenarioInput, evaluate};
///
/// let output = evaluate(&ScenarioInput {
///     working_income: dec!(80000),
///     sahp_income: dec!(40000),
///     childcare_costs: vec![dec!(20000)],
///     use_fsa: false,
/// });
///
/// assert_eq!(output.childcare_cost, dec!(20000));
/// assert_eq!(output.delta, dec!(5541.30));
/// assert_eq!(output.break_even_income, None);
/// ```
pub fn evaluate(input: &ScenarioInput) -> ScenarioOutput {
    let tables = TaxTables::default();
    let config = CalculatorConfig::default();
    ScenarioEvaluator::new(&tables, &config).evaluate(input)
}
