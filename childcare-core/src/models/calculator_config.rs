use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by [`CalculatorConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: Decimal },

    #[error("search ceiling {ceiling} must be greater than search floor {floor}")]
    EmptySearchRange { floor: Decimal, ceiling: Decimal },

    #[error("search iterations must be at least 1")]
    NoSearchIterations,
}

/// Tunable constants for the scenario comparison.
///
/// Every field falls back to its default when missing from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Child tax credit granted per dependent.
    pub credit_per_dependent: Decimal,

    /// Ceiling on the total child tax credit, regardless of dependents.
    pub credit_cap: Decimal,

    /// Dependent-care FSA allowance shared across all childcare costs.
    pub fsa_pool: Decimal,

    /// Lowest second income considered by the break-even search.
    pub search_floor: Decimal,

    /// Highest second income considered by the break-even search.
    pub search_ceiling: Decimal,

    /// Fixed number of bisection steps.
    pub search_iterations: u32,

    /// The search stops early once the net delta is within this amount of zero.
    pub search_tolerance: Decimal,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            credit_per_dependent: dec!(2000),
            credit_cap: dec!(4000),
            fsa_pool: dec!(5000),
            search_floor: dec!(0),
            search_ceiling: dec!(300000),
            search_iterations: 20,
            search_tolerance: dec!(1),
        }
    }
}

impl CalculatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let amounts = [
            ("credit_per_dependent", self.credit_per_dependent),
            ("credit_cap", self.credit_cap),
            ("fsa_pool", self.fsa_pool),
            ("search_floor", self.search_floor),
            ("search_tolerance", self.search_tolerance),
        ];

        if let Some((field, value)) = amounts.into_iter().find(|(_, v)| *v < Decimal::ZERO) {
            return Err(ConfigError::Negative { field, value });
        }

        if self.search_ceiling <= self.search_floor {
            return Err(ConfigError::EmptySearchRange {
                floor: self.search_floor,
                ceiling: self.search_ceiling,
            });
        }

        if self.search_iterations == 0 {
            return Err(ConfigError::NoSearchIterations);
        }

        Ok(())
    }
}
