//! Plain-text reports for scenario results.

use childcare_core::ScenarioOutput;
use childcare_core::calculations::TaxBreakdown;
use childcare_core::calculations::common::round_half_up;
use rust_decimal::Decimal;

/// Formats an amount as dollars with thousands separators and two decimals.
///
/// ```
/// use rust_decimal_macros::dec;
/// use childcare_cli::render::format_currency;
///
/// assert_eq!(format_currency(dec!(59471.594)), "$59,471.59");
/// assert_eq!(format_currency(dec!(-10485.105)), "-$10,485.11");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((&text, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{cents}")
}

const BREAK_EVEN_NOT_FOUND: &str = "Break-Even SAHP Income: not found within search range";

/// Renders the comparison for one household.
///
/// When the break-even search ran out of range the income line says so
/// instead of printing the last candidate tried.
pub fn render_report(output: &ScenarioOutput) -> String {
    let mut lines = vec![
        format!("Current Take-Home: {}", format_currency(output.current_take_home)),
        format!(
            "New Take-Home (with both incomes): {}",
            format_currency(output.new_take_home)
        ),
        format!("Childcare Cost: {}", format_currency(output.childcare_cost)),
        format!("Child Tax Credit: {}", format_currency(output.child_tax_credit)),
    ];
    if !output.fsa_used.is_zero() {
        lines.push(format!("FSA Used: {}", format_currency(output.fsa_used)));
    }
    lines.push(format!(
        "{} from SAHP Working: {}",
        output.outcome(),
        format_currency(output.delta)
    ));
    match output.break_even_income {
        Some(income) if output.break_even_reached => {
            lines.push(format!("Break-Even SAHP Income: {}", format_currency(income)));
        }
        Some(_) => lines.push(BREAK_EVEN_NOT_FOUND.to_string()),
        None => {}
    }

    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Itemizes a tax computation, labelled with the income it was run on.
pub fn render_breakdown(
    label: &str,
    breakdown: &TaxBreakdown,
) -> String {
    let rows = [
        ("Federal (after credit)", breakdown.federal),
        ("State", breakdown.state),
        ("Local", breakdown.local),
        ("Payroll", breakdown.payroll),
        ("Total", breakdown.total),
    ];

    let mut out = format!("{label}\n");
    for (name, amount) in rows {
        out.push_str(&format!("  {name:<24}{:>16}\n", format_currency(amount)));
    }
    out
}
