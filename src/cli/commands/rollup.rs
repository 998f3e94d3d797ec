//! `rpt rollup` command - hardware tree aggregation

use std::fs;
use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Deserialize;
use tabled::{builder::Builder, settings::Style};

use crate::cli::output::{print_json, rate, yes_no};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::EngineConfig;
use crate::entities::node::HardwareNode;
use crate::prediction::rollup::{self, AggregateStatus};

#[derive(clap::Args, Debug)]
pub struct RollupArgs {
    /// YAML file describing the hardware tree
    pub file: PathBuf,
}

/// The YAML document `rpt rollup` consumes
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RollupInput {
    tree: HardwareNode,
    #[serde(default)]
    config: EngineConfig,
}

pub fn run(args: RollupArgs, global: &GlobalOpts) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading {}", args.file.display()))?;
    let input: RollupInput = serde_yml::from_str(&text)
        .into_diagnostic()
        .wrap_err_with(|| format!("parsing {}", args.file.display()))?;

    let report = rollup::rollup(&input.tree, &input.config);

    match global.format.resolved() {
        OutputFormat::Json => print_json(&report)?,
        _ => {
            let mut builder = Builder::default();
            builder.push_record([
                "Node",
                "Parts",
                "Active",
                "Dormant",
                "MTBF (h)",
                "R(t)",
                "Cost",
                "Overstress",
                "Status",
            ]);
            for summary in &report.summaries {
                let status = match summary.status {
                    AggregateStatus::Complete => "complete".to_string(),
                    AggregateStatus::Partial { children_failed } => {
                        format!("partial ({children_failed} failed)")
                    }
                };
                builder.push_record([
                    summary.id.clone(),
                    summary.part_count.to_string(),
                    rate(summary.hazard_rate_active),
                    rate(summary.hazard_rate_dormant),
                    summary
                        .mtbf
                        .map_or_else(|| "-".to_string(), |m| format!("{m:.0}")),
                    format!("{:.6}", summary.reliability),
                    format!("{:.2}", summary.cost),
                    yes_no(summary.overstressed).to_string(),
                    status,
                ]);
            }
            println!("{}", builder.build().with(Style::markdown()));

            if !report.failures.is_empty() && !global.quiet {
                println!();
                println!("{}", style("Failed nodes").red().bold());
                for failure in &report.failures {
                    println!("  {}: {}", failure.node_id, failure.error);
                }
            }
        }
    }
    Ok(())
}
