//! MIL-HDBK-217F prediction engine
//!
//! One module per component family holds that family's published
//! coefficient tables and its parts-count and part-stress equations.
//! [`calculate`] is the single entry point: it forms the stress ratios,
//! dispatches to the family equation, derives the dormant rate, runs the
//! derating check, and applies the adjustment/duty/quantity/display
//! scaling that is common to every family.

pub mod capacitor;
pub mod connection;
pub mod crystal;
pub mod derating;
pub mod dormant;
pub mod filter;
pub mod inductor;
pub mod integrated_circuit;
pub mod meter;
pub mod relay;
pub mod resistor;
pub mod rollup;
pub mod semiconductor;
pub mod switch;

use crate::core::config::EngineConfig;
use crate::core::error::CalcError;
use crate::entities::family::ComponentFamily;
use crate::entities::profile::{PredictionMethod, StressProfile};
use crate::entities::result::HazardRateResult;

/// Operating-over-rated stress ratios shared by the family equations
/// and the derating evaluator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StressRatios {
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
}

/// Compute the hazard rates, stress ratios, and derating verdict for one
/// component.
pub fn calculate(
    family: &ComponentFamily,
    profile: &StressProfile,
    method: PredictionMethod,
    config: &EngineConfig,
) -> Result<HazardRateResult, CalcError> {
    let ratios = stress_ratios(profile)?;

    let model = match family {
        ComponentFamily::Resistor(params) => match method {
            PredictionMethod::PartsCount => resistor::parts_count(params, profile)?,
            PredictionMethod::PartStress => resistor::part_stress(params, profile, &ratios)?,
        },
        ComponentFamily::Capacitor(params) => match method {
            PredictionMethod::PartsCount => capacitor::parts_count(params, profile)?,
            PredictionMethod::PartStress => capacitor::part_stress(params, profile)?,
        },
        ComponentFamily::Inductor(params) => match method {
            PredictionMethod::PartsCount => inductor::parts_count(params, profile)?,
            PredictionMethod::PartStress => inductor::part_stress(params, profile)?,
        },
        ComponentFamily::Relay(params) => match method {
            PredictionMethod::PartsCount => relay::parts_count(params, profile)?,
            PredictionMethod::PartStress => relay::part_stress(params, profile, &ratios)?,
        },
        ComponentFamily::Switch(params) => match method {
            PredictionMethod::PartsCount => switch::parts_count(params, profile)?,
            PredictionMethod::PartStress => switch::part_stress(params, profile, &ratios)?,
        },
        ComponentFamily::Connector(params) => match method {
            PredictionMethod::PartsCount => connection::parts_count(params, profile)?,
            PredictionMethod::PartStress => connection::part_stress(params, profile)?,
        },
        ComponentFamily::Crystal(params) => match method {
            PredictionMethod::PartsCount => crystal::parts_count(params, profile)?,
            PredictionMethod::PartStress => crystal::part_stress(params, profile)?,
        },
        ComponentFamily::Filter(params) => match method {
            PredictionMethod::PartsCount => filter::parts_count(params, profile)?,
            PredictionMethod::PartStress => filter::part_stress(params, profile)?,
        },
        ComponentFamily::Meter(params) => match method {
            PredictionMethod::PartsCount => meter::parts_count(params, profile)?,
            PredictionMethod::PartStress => meter::part_stress(params, profile)?,
        },
        ComponentFamily::Semiconductor(params) => match method {
            PredictionMethod::PartsCount => semiconductor::parts_count(params, profile)?,
            PredictionMethod::PartStress => semiconductor::part_stress(params, profile, &ratios)?,
        },
        ComponentFamily::IntegratedCircuit(params) => match method {
            PredictionMethod::PartsCount => integrated_circuit::parts_count(params, profile)?,
            PredictionMethod::PartStress => integrated_circuit::part_stress(params, profile)?,
        },
    };

    let hazard_rate_active = scale_hazard_rate(model.model_result, profile, config);
    let hazard_rate_dormant =
        dormant::conversion_factor(family, profile)? * hazard_rate_active;

    let verdict = derating::evaluate(family, profile, &ratios);

    Ok(HazardRateResult {
        hazard_rate_active,
        hazard_rate_dormant,
        voltage_ratio: ratios.voltage,
        current_ratio: ratios.current,
        power_ratio: ratios.power,
        overstressed: verdict.overstressed,
        reasons: verdict.reasons,
        model,
    })
}

/// Adjustment, duty cycle, quantity, and display scaling common to every
/// family and both methods.
fn scale_hazard_rate(model_result: f64, profile: &StressProfile, config: &EngineConfig) -> f64 {
    (model_result + profile.add_adj_factor)
        * (profile.duty_cycle / 100.0)
        * profile.mult_adj_factor
        * profile.quantity as f64
        / config.fr_multiplier
}

/// Form the three operating-over-rated ratios.
///
/// A rated value of zero is tolerated only while the corresponding
/// operating value is also zero (the field is unused); otherwise it is a
/// degenerate divisor.
pub fn stress_ratios(profile: &StressProfile) -> Result<StressRatios, CalcError> {
    Ok(StressRatios {
        voltage: ratio(
            "rated_voltage",
            profile.voltage_ac + profile.voltage_dc,
            profile.rated_voltage,
        )?,
        current: ratio(
            "rated_current",
            profile.operating_current,
            profile.rated_current,
        )?,
        power: ratio("rated_power", profile.operating_power, profile.rated_power)?,
    })
}

/// Index of the band containing `value` among inclusive upper
/// breakpoints. A value exactly on a breakpoint belongs to the band the
/// breakpoint closes; a value beyond the last breakpoint yields
/// `breakpoints.len()`, which callers reject against their band table.
pub(crate) fn band_index(breakpoints: &[f64], value: f64) -> usize {
    breakpoints
        .iter()
        .position(|&upper| value <= upper)
        .unwrap_or(breakpoints.len())
}

fn ratio(field: &'static str, operating: f64, rated: f64) -> Result<f64, CalcError> {
    if rated > 0.0 {
        Ok(operating / rated)
    } else if operating == 0.0 {
        Ok(0.0)
    } else {
        Err(CalcError::DegenerateInput {
            field,
            value: rated,
        })
    }
}
