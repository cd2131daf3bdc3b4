use std::path::Path;

use anyhow::{Context, Result};
use childcare_core::calculations::{ScenarioEvaluator, TaxEngine};
use childcare_core::{CalculatorConfig, TaxTables};
use clap::Parser;
use tracing::{debug, info};

use childcare_cli::cli::{Cli, Command, batch_report, evaluation_report, scenario_input};
use childcare_cli::{config, csv_loader, logging};

fn run_batch(
    evaluator: &ScenarioEvaluator<'_>,
    file: &Path,
) -> Result<()> {
    let inputs = csv_loader::load_from_file(file)
        .with_context(|| format!("Failed to load scenarios from: {}", file.display()))?;
    info!(count = inputs.len(), "loaded scenarios");

    print!("{}", batch_report(evaluator, &inputs));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let config: CalculatorConfig =
        config::load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    debug!(?config, "using calculator config");

    let tables = TaxTables::default();
    let evaluator = ScenarioEvaluator::new(&tables, &config);

    match cli.command {
        Command::Evaluate {
            working_income,
            sahp_income,
            childcare,
            fsa,
            breakdown,
        } => {
            let input = scenario_input(working_income, sahp_income, &childcare, fsa);
            let engine = TaxEngine::new(&tables);
            print!("{}", evaluation_report(&evaluator, &engine, &input, breakdown));
        }
        Command::Batch { file } => run_batch(&evaluator, &file)?,
    }

    Ok(())
}
