use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

/// Largest magnitude accepted for any amount (1e15 dollars). Tax arithmetic on
/// anything bigger can overflow `Decimal`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Error returned when text cannot be read as a currency amount.
#[derive(Debug, Error)]
pub enum ParseDecimalError {
    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount '{input}' exceeds the supported limit of {}", MAX_AMOUNT)]
    OutOfRange { input: String },
}

/// Trims whitespace and drops a leading `$` and any `,` thousands separators.
fn normalize_amount(s: &str) -> String {
    let trimmed = s.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    unsigned.replace(',', "")
}

/// Parses a currency amount such as `"80,000"` or `"$1,234.56"`.
///
/// Empty or whitespace-only input is treated as 0. Amounts larger in
/// magnitude than [`MAX_AMOUNT`] are rejected.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_amount(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let amount: Decimal = normalized
        .parse()
        .map_err(|source| ParseDecimalError::Invalid {
            input: s.to_string(),
            source,
        })?;
    if amount.abs() > MAX_AMOUNT {
        return Err(ParseDecimalError::OutOfRange {
            input: s.to_string(),
        });
    }
    Ok(amount)
}

/// Parses one childcare cost entry. Anything unreadable counts as 0 so a
/// stray entry never blocks the calculation.
pub fn parse_childcare_entry(s: &str) -> Decimal {
    parse_decimal(s).unwrap_or_else(|e| {
        warn!(input = %s, "treating childcare entry as 0: {}", e);
        Decimal::ZERO
    })
}

/// `clap` value parser for income arguments.
pub fn parse_income_arg(s: &str) -> Result<Decimal, String> {
    parse_decimal(s).map_err(|e| e.to_string())
}
