//! Calculation error taxonomy
//!
//! Every failure mode of the prediction engine is a typed, recoverable
//! error. Table lookups validate their index before use; ratios refuse
//! zero divisors; a family without an implementation for the requested
//! method says so. Nothing is silently defaulted to zero.

use miette::Diagnostic;
use thiserror::Error;

/// Errors returned by hazard rate, derating, and criticality calculations
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum CalcError {
    /// A 1-based table index fell outside the declared table range
    #[error("index {index} is out of range for {family} table '{table}'")]
    #[diagnostic(
        code(rpt::calc::invalid_index),
        help("indices are 1-based; check the component's ordinal codes against the published table")
    )]
    InvalidIndex {
        family: &'static str,
        table: &'static str,
        index: usize,
    },

    /// A ratio was requested against a zero or negative rated value
    #[error("degenerate input: {field} is {value} but is used as a divisor")]
    #[diagnostic(
        code(rpt::calc::degenerate_input),
        help("rated values must be positive when the corresponding operating value is non-zero")
    )]
    DegenerateInput { field: &'static str, value: f64 },

    /// A bounded quantity fell outside its declared range
    #[error("{field} value {value} is outside the allowed range [{min}, {max}]")]
    #[diagnostic(code(rpt::calc::out_of_range))]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The family has no implementation for the requested prediction method
    #[error("{family} has no implementation for the {method} method")]
    #[diagnostic(code(rpt::calc::unsupported_method))]
    UnsupportedMethod {
        family: &'static str,
        method: &'static str,
    },
}

/// Validated 1-based lookup into a published coefficient table.
pub(crate) fn lookup(
    family: &'static str,
    table: &'static str,
    values: &[f64],
    index: usize,
) -> Result<f64, CalcError> {
    if index == 0 || index > values.len() {
        return Err(CalcError::InvalidIndex {
            family,
            table,
            index,
        });
    }
    Ok(values[index - 1])
}

/// Validated 1-based row selection from a two-dimensional table.
pub(crate) fn lookup_row<'a>(
    family: &'static str,
    table: &'static str,
    rows: &'a [&'a [f64]],
    index: usize,
) -> Result<&'a [f64], CalcError> {
    if index == 0 || index > rows.len() {
        return Err(CalcError::InvalidIndex {
            family,
            table,
            index,
        });
    }
    Ok(rows[index - 1])
}
