//! RPT: Reliability Prediction Toolkit
//!
//! A MIL-HDBK-217F hazard-rate and derating prediction engine for
//! electronic hardware, with a hardware-tree rollup and FMEA RPN
//! calculations.

pub mod cli;
pub mod core;
pub mod entities;
pub mod prediction;
