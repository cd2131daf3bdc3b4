mod calculator_config;
mod scenario;
mod tax_bracket;
mod tax_tables;

pub use calculator_config::{CalculatorConfig, ConfigError};
pub use scenario::{Outcome, ScenarioInput, ScenarioOutput};
pub use tax_bracket::{BracketSchedule, ScheduleError, TaxBracket};
pub use tax_tables::{PayrollLevy, TaxTables};
