//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{calc::CalcArgs, rollup::RollupArgs, rpn::RpnArgs};

#[derive(Parser)]
#[command(name = "rpt")]
#[command(author, version, about = "Reliability Prediction Toolkit")]
#[command(
    long_about = "MIL-HDBK-217F hazard rate and derating predictions for electronic hardware, \
                  computed from plain YAML component and hardware-tree descriptions."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute hazard rates and the overstress verdict for one component
    Calc(CalcArgs),

    /// Roll a hardware tree up into per-node aggregates
    Rollup(RollupArgs),

    /// Compute an FMEA risk priority number
    Rpn(RpnArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table on stdout
    #[default]
    Auto,
    /// Markdown-style table
    Table,
    /// JSON (for programming)
    Json,
}

impl OutputFormat {
    /// Resolve `auto` to the concrete format.
    pub fn resolved(self) -> OutputFormat {
        match self {
            OutputFormat::Auto => OutputFormat::Table,
            other => other,
        }
    }
}
