//! `rpt rpn` command - FMEA risk priority number

use miette::Result;
use tabled::{builder::Builder, settings::Style};

use crate::cli::output::print_json;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::entities::criticality::CriticalityInputs;

#[derive(clap::Args, Debug)]
pub struct RpnArgs {
    /// Severity of the failure effect, 1..=10
    #[arg(long, short = 's')]
    pub severity: u32,

    /// Likelihood of occurrence, 1..=10
    #[arg(long, short = 'o')]
    pub occurrence: u32,

    /// Chance the failure escapes detection, 1..=10
    #[arg(long, short = 'd')]
    pub detection: u32,

    /// Severity after mitigation (defaults to the current rating)
    #[arg(long)]
    pub new_severity: Option<u32>,

    /// Occurrence after mitigation (defaults to the current rating)
    #[arg(long)]
    pub new_occurrence: Option<u32>,

    /// Detection after mitigation (defaults to the current rating)
    #[arg(long)]
    pub new_detection: Option<u32>,
}

pub fn run(args: RpnArgs, global: &GlobalOpts) -> Result<()> {
    let inputs = CriticalityInputs {
        severity: args.severity,
        occurrence: args.occurrence,
        detection: args.detection,
        new_severity: args.new_severity.unwrap_or(args.severity),
        new_occurrence: args.new_occurrence.unwrap_or(args.occurrence),
        new_detection: args.new_detection.unwrap_or(args.detection),
    };
    let result = inputs.calculate()?;

    match global.format.resolved() {
        OutputFormat::Json => print_json(&result)?,
        _ => {
            let mut builder = Builder::default();
            builder.push_record(["", "RPN", "Risk level"]);
            builder.push_record([
                "Current".to_string(),
                result.rpn.to_string(),
                result.risk_level.to_string(),
            ]);
            builder.push_record([
                "Post-mitigation".to_string(),
                result.new_rpn.to_string(),
                result.new_risk_level.to_string(),
            ]);
            println!("{}", builder.build().with(Style::markdown()));
        }
    }
    Ok(())
}
