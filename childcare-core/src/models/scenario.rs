use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Household figures for one "should the stay-at-home parent go back to work"
/// comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Annual wages of the parent already working.
    pub working_income: Decimal,

    /// Prospective annual wages of the stay-at-home parent.
    pub sahp_income: Decimal,

    /// Annual childcare cost, one entry per dependent, in entry order.
    pub childcare_costs: Vec<Decimal>,

    /// Whether a dependent-care FSA election offsets childcare costs.
    pub use_fsa: bool,
}

/// Result of comparing the one-income and two-income households.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOutput {
    /// Take-home pay with only the working parent employed.
    pub current_take_home: Decimal,

    /// Take-home pay with both parents employed.
    pub new_take_home: Decimal,

    /// Childcare paid out of take-home pay, after any FSA offset.
    pub childcare_cost: Decimal,

    /// `new_take_home - (current_take_home + childcare_cost)`.
    pub delta: Decimal,

    /// Second income at which `delta` reaches zero. Only searched for when
    /// `delta` is negative.
    pub break_even_income: Option<Decimal>,

    /// False when the search range ran out before `delta` reached zero, in
    /// which case `break_even_income` is only the closest candidate tried.
    pub break_even_reached: bool,

    pub child_tax_credit: Decimal,

    pub fsa_used: Decimal,
}

impl ScenarioOutput {
    pub fn outcome(&self) -> Outcome {
        if self.delta >= Decimal::ZERO {
            Outcome::Surplus
        } else {
            Outcome::Deficit
        }
    }
}

/// Whether the second income leaves the household ahead or behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Surplus,
    Deficit,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Surplus => "Surplus",
            Self::Deficit => "Deficit",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
