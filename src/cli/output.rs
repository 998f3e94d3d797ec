//! Output formatting shared by the commands
//!
//! Tables are rendered with `tabled` in markdown style; JSON goes
//! through `serde_json` pretty printing. Hazard rates are printed in
//! scientific notation since they live many decades below 1.

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

/// Pretty-print a serializable value as JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).into_diagnostic()?
    );
    Ok(())
}

/// Format a hazard rate or other small positive quantity.
pub fn rate(value: f64) -> String {
    format!("{value:.4e}")
}

/// Format a dimensionless factor with enough digits to audit against
/// the published tables.
pub fn factor(value: f64) -> String {
    format!("{value:.6}")
}

/// Yes/no cell for boolean columns.
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
