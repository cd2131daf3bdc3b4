//! Command-line surface of `childcare-calc` and the text each command prints.

use std::path::PathBuf;

use childcare_core::ScenarioInput;
use childcare_core::calculations::{ScenarioEvaluator, TaxEngine};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::render::{format_currency, render_breakdown, render_report};
use crate::utils::{parse_childcare_entry, parse_income_arg};

/// Estimates whether a stay-at-home parent returning to work leaves the
/// household ahead once taxes and childcare are paid.
#[derive(Debug, Parser)]
#[command(name = "childcare-calc", version, long_about = None)]
pub struct Cli {
    /// TOML file overriding credit, FSA and break-even search settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. `debug`); overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a single household.
    Evaluate {
        /// Annual wages of the parent already working.
        #[arg(long, value_parser = parse_income_arg)]
        working_income: Decimal,

        /// Prospective annual wages of the stay-at-home parent.
        #[arg(long, value_parser = parse_income_arg)]
        sahp_income: Decimal,

        /// Annual childcare cost for one dependent; repeat per dependent.
        #[arg(long = "childcare")]
        childcare: Vec<String>,

        /// Apply the dependent-care FSA allowance to childcare costs.
        #[arg(long)]
        fsa: bool,

        /// Itemize the taxes behind both take-home figures.
        #[arg(long)]
        breakdown: bool,
    },

    /// Evaluate every household in a CSV file.
    Batch {
        /// CSV with working_income, sahp_income, childcare_costs, use_fsa columns.
        #[arg(short, long)]
        file: PathBuf,
    },
}

/// Builds the household for `evaluate`. Unreadable childcare entries count as 0.
pub fn scenario_input(
    working_income: Decimal,
    sahp_income: Decimal,
    childcare: &[String],
    fsa: bool,
) -> ScenarioInput {
    ScenarioInput {
        working_income,
        sahp_income,
        childcare_costs: childcare.iter().map(|s| parse_childcare_entry(s)).collect(),
        use_fsa: fsa,
    }
}

/// Report for one household, optionally followed by the tax behind each
/// take-home figure.
pub fn evaluation_report(
    evaluator: &ScenarioEvaluator<'_>,
    engine: &TaxEngine<'_>,
    input: &ScenarioInput,
    breakdown: bool,
) -> String {
    let output = evaluator.evaluate(input);
    let mut report = render_report(&output);

    if breakdown {
        let credit = output.child_tax_credit;
        let combined = input.working_income + input.sahp_income;

        report.push('\n');
        for income in [input.working_income, combined] {
            report.push_str(&render_breakdown(
                &format!("Tax on {}", format_currency(income)),
                &engine.breakdown(income, credit),
            ));
        }
    }

    report
}

/// Reports for a batch, each headed by a one-line summary of its inputs.
pub fn batch_report(
    evaluator: &ScenarioEvaluator<'_>,
    inputs: &[ScenarioInput],
) -> String {
    inputs
        .iter()
        .enumerate()
        .map(|(idx, input)| {
            format!(
                "Scenario {}: working {}, SAHP {}, {} dependent(s){}\n{}",
                idx + 1,
                format_currency(input.working_income),
                format_currency(input.sahp_income),
                input.childcare_costs.len(),
                if input.use_fsa { ", FSA" } else { "" },
                render_report(&evaluator.evaluate(input)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use childcare_core::{CalculatorConfig, TaxTables};
    use clap::CommandFactory;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn evaluate_collects_repeated_childcare_and_fsa() {
        let cli = Cli::try_parse_from([
            "childcare-calc",
            "--log-level",
            "debug",
            "evaluate",
            "--working-income",
            "80,000",
            "--sahp-income",
            "$30,000",
            "--childcare",
            "20000",
            "--childcare",
            "n/a",
            "--childcare",
            "$15,000",
            "--fsa",
        ])
        .unwrap();

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        let Command::Evaluate {
            working_income,
            sahp_income,
            childcare,
            fsa,
            breakdown,
        } = cli.command
        else {
            panic!("expected the evaluate subcommand");
        };
        assert!(!breakdown);

        assert_eq!(
            scenario_input(working_income, sahp_income, &childcare, fsa),
            ScenarioInput {
                working_income: dec!(80000),
                sahp_income: dec!(30000),
                childcare_costs: vec![dec!(20000), dec!(0), dec!(15000)],
                use_fsa: true,
            }
        );
    }

    #[test]
    fn global_options_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "childcare-calc",
            "batch",
            "-f",
            "households.csv",
            "--config",
            "calc.toml",
            "--log-file",
            "calc.log",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("calc.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("calc.log")));
        assert!(matches!(
            cli.command,
            Command::Batch { file } if file == PathBuf::from("households.csv")
        ));
    }

    #[test]
    fn unreadable_income_is_rejected() {
        let err = Cli::try_parse_from([
            "childcare-calc",
            "evaluate",
            "--working-income",
            "plenty",
            "--sahp-income",
            "40000",
        ])
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("invalid amount 'plenty'"));
    }

    #[test]
    fn out_of_range_income_is_rejected() {
        let err = Cli::try_parse_from([
            "childcare-calc",
            "evaluate",
            "--working-income",
            "80000",
            "--sahp-income",
            "79228162514264337593543950335",
        ])
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("exceeds the supported limit"));
    }

    #[test]
    fn missing_income_is_rejected() {
        let err =
            Cli::try_parse_from(["childcare-calc", "evaluate", "--working-income", "80000"])
                .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn evaluation_report_without_breakdown_is_the_plain_report() {
        let tables = TaxTables::nyc_2024();
        let config = CalculatorConfig::default();
        let evaluator = ScenarioEvaluator::new(&tables, &config);
        let input = scenario_input(dec!(80000), dec!(40000), &["20000".to_string()], false);

        assert_eq!(
            evaluation_report(&evaluator, &TaxEngine::new(&tables), &input, false),
            render_report(&evaluator.evaluate(&input))
        );
    }

    #[test]
    fn evaluation_report_breaks_down_both_incomes() {
        let tables = TaxTables::nyc_2024();
        let config = CalculatorConfig::default();
        let evaluator = ScenarioEvaluator::new(&tables, &config);
        let input = scenario_input(dec!(80000), dec!(40000), &["20000".to_string()], false);

        let report = evaluation_report(&evaluator, &TaxEngine::new(&tables), &input, true);

        assert!(report.contains("Surplus from SAHP Working: $5,541.30\n\nTax on $80,000.00\n"));
        assert!(report.contains("Tax on $120,000.00\n"));
        // 22,528.406 before the 2,000 credit
        assert!(report.contains("$20,528.41\n"));
        assert_eq!(report.lines().filter(|l| l.starts_with("Tax on")).count(), 2);
    }

    #[test]
    fn batch_report_heads_each_scenario() {
        let tables = TaxTables::nyc_2024();
        let config = CalculatorConfig::default();
        let evaluator = ScenarioEvaluator::new(&tables, &config);
        let inputs = [
            scenario_input(dec!(80000), dec!(40000), &["20000".to_string()], false),
            scenario_input(dec!(80000), dec!(30000), &["20000".to_string()], true),
        ];

        let report = batch_report(&evaluator, &inputs);

        assert!(report.starts_with(
            "Scenario 1: working $80,000.00, SAHP $40,000.00, 1 dependent(s)\n\
             Current Take-Home: $59,471.59\n"
        ));
        assert!(report.contains("\n\nScenario 2: working $80,000.00, SAHP $30,000.00, 1 dependent(s), FSA\n"));
    }

    #[test]
    fn batch_report_of_nothing_is_empty() {
        let tables = TaxTables::nyc_2024();
        let config = CalculatorConfig::default();
        let evaluator = ScenarioEvaluator::new(&tables, &config);

        assert_eq!(batch_report(&evaluator, &[]), "");
    }
}
