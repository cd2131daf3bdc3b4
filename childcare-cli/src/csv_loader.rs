//! CSV loader for batches of household scenarios.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column | Required | Type | Notes |
//! |-------------------|----------|---------|------------------------------------------------|
//! | `working_income`  | yes | decimal | e.g. `80000` or `"80,000"` |
//! | `sahp_income`     | yes | decimal | |
//! | `childcare_costs` | no  | list    | `;`-separated, one per dependent; empty = none |
//! | `use_fsa`         | no  | bool    | `true`/`false`, defaults to `false` |
//!
//! Childcare entries that cannot be read count as 0, matching the
//! interactive form. Unreadable or out-of-range incomes reject the row.
//!
//! ### Example
//!
//! ```csv
//! working_income,sahp_income,childcare_costs,use_fsa
//! 80000,40000,20000,false
//! 80000,30000,20000;15000,true
//! ```

use std::path::Path;

use childcare_core::ScenarioInput;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::utils::{ParseDecimalError, parse_childcare_entry, parse_decimal};

#[derive(Debug, Deserialize)]
struct CsvRow {
    working_income: String,
    sahp_income: String,
    #[serde(default)]
    childcare_costs: Option<String>,
    #[serde(default)]
    use_fsa: Option<bool>,
}

/// Errors that can occur while loading a scenario batch.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Bad structure, missing required column or unreadable boolean.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// An income cell could not be read. `row` is 1-based (header excluded).
    #[error("row {row}: {column}: {source}")]
    InvalidIncome {
        row: usize,
        column: &'static str,
        #[source]
        source: ParseDecimalError,
    },
}

fn parse_costs(cell: Option<&str>) -> Vec<Decimal> {
    cell.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.split(';').map(parse_childcare_entry).collect())
        .unwrap_or_default()
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<ScenarioInput, CsvLoadError> {
    let income = |column: &'static str, value: &str| {
        parse_decimal(value).map_err(|source| CsvLoadError::InvalidIncome {
            row: row_number,
            column,
            source,
        })
    };

    Ok(ScenarioInput {
        working_income: income("working_income", &row.working_income)?,
        sahp_income: income("sahp_income", &row.sahp_income)?,
        childcare_costs: parse_costs(row.childcare_costs.as_deref()),
        use_fsa: row.use_fsa.unwrap_or(false),
    })
}

/// Parses CSV text into scenario inputs, in file order.
pub fn load_from_str(input: &str) -> Result<Vec<ScenarioInput>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect()
}

/// Reads `path` from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<ScenarioInput>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}
