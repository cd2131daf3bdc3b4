//! Tax and household-comparison calculations.
//!
//! [`TaxEngine`] prices a single income; [`ScenarioEvaluator`] compares the
//! one-income and two-income households and, when working costs more than it
//! earns, bisects for the break-even second income.

pub mod break_even;
pub mod common;
pub mod scenario_evaluator;
pub mod tax_engine;

pub use break_even::{BisectionResult, bisect};
pub use scenario_evaluator::{FsaAllocation, ScenarioEvaluator, apply_fsa, evaluate};
pub use tax_engine::{TaxBreakdown, TaxEngine};
