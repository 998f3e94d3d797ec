//! `rpt calc` command - single component prediction

use std::fs;
use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Deserialize;
use tabled::{builder::Builder, settings::Style};

use crate::cli::output::{factor, print_json, rate, yes_no};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::EngineConfig;
use crate::entities::family::ComponentFamily;
use crate::entities::profile::{PredictionMethod, StressProfile};
use crate::prediction;

#[derive(clap::Args, Debug)]
pub struct CalcArgs {
    /// YAML file describing the component, its stress profile, and the
    /// prediction method
    pub file: PathBuf,
}

/// The YAML document `rpt calc` consumes
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CalcInput {
    component: ComponentFamily,
    #[serde(default)]
    profile: StressProfile,
    #[serde(default)]
    method: PredictionMethod,
    #[serde(default)]
    config: EngineConfig,
}

pub fn run(args: CalcArgs, global: &GlobalOpts) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading {}", args.file.display()))?;
    let input: CalcInput = serde_yml::from_str(&text)
        .into_diagnostic()
        .wrap_err_with(|| format!("parsing {}", args.file.display()))?;

    let result = prediction::calculate(
        &input.component,
        &input.profile,
        input.method,
        &input.config,
    )?;

    match global.format.resolved() {
        OutputFormat::Json => print_json(&result)?,
        _ => {
            if !global.quiet {
                println!(
                    "{} ({})",
                    style(input.component.name()).bold(),
                    input.method
                );
                println!();
            }

            let mut factors = Builder::default();
            factors.push_record(["Factor", "Value"]);
            for (name, value) in result.model.factors() {
                factors.push_record([name, &factor(value)]);
            }
            factors.push_record(["model result", &factor(result.model.model_result)]);
            println!("{}", factors.build().with(Style::markdown()));
            println!();

            let mut summary = Builder::default();
            summary.push_record(["Hazard rate (active)", &rate(result.hazard_rate_active)]);
            summary.push_record(["Hazard rate (dormant)", &rate(result.hazard_rate_dormant)]);
            summary.push_record(["Voltage ratio", &factor(result.voltage_ratio)]);
            summary.push_record(["Current ratio", &factor(result.current_ratio)]);
            summary.push_record(["Power ratio", &factor(result.power_ratio)]);
            summary.push_record(["Overstressed", yes_no(result.overstressed)]);
            println!("{}", summary.build().with(Style::markdown()));

            if !result.reasons.is_empty() {
                println!();
                println!("{}", style("Derating violations").red().bold());
                for reason in &result.reasons {
                    println!("  {reason}");
                }
            }
        }
    }
    Ok(())
}
