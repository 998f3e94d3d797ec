//! CLI command implementations

pub mod calc;
pub mod rollup;
pub mod rpn;
