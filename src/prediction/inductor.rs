//! Inductive devices - transformers and coils (MIL-HDBK-217F section 11)
//!
//! The part stress model is driven entirely by the hot spot temperature:
//! a winding temperature rise estimated from power loss and the device's
//! radiating area or weight, added to ambient, then pushed through the
//! insulation class base hazard rate curve.

use crate::core::error::{lookup, lookup_row, CalcError};
use crate::entities::family::{InductorKind, InductorParams, InsulationClass};
use crate::entities::model::HazardRateModel;
use crate::entities::profile::StressProfile;

const FAMILY: &str = "inductor";

/// Parts count base hazard rates by environment, transformers by style
/// (low power pulse, audio, power, RF).
const COUNT_TRANSFORMER: [&[f64]; 4] = [
    &[
        0.0035, 0.023, 0.049, 0.019, 0.065, 0.027, 0.037, 0.041, 0.052, 0.11, 0.0018, 0.053, 0.16,
        2.3,
    ],
    &[
        0.0071, 0.046, 0.097, 0.038, 0.13, 0.055, 0.073, 0.081, 0.10, 0.22, 0.035, 0.11, 0.31, 4.7,
    ],
    &[
        0.023, 0.16, 0.35, 0.13, 0.45, 0.21, 0.27, 0.35, 0.45, 0.82, 0.011, 0.37, 1.2, 16.0,
    ],
    &[
        0.028, 0.18, 0.39, 0.15, 0.52, 0.22, 0.29, 0.33, 0.42, 0.88, 0.015, 0.42, 1.2, 19.0,
    ],
];

/// Coils by style (fixed, variable).
const COUNT_COIL: [&[f64]; 2] = [
    &[
        0.0017, 0.0073, 0.023, 0.0091, 0.031, 0.011, 0.015, 0.016, 0.022, 0.052, 0.00083, 0.25,
        0.073, 1.1,
    ],
    &[
        0.0033, 0.015, 0.046, 0.018, 0.061, 0.022, 0.03, 0.033, 0.044, 0.10, 0.0017, 0.05, 0.15,
        2.2,
    ],
];

const COUNT_PI_Q: [f64; 3] = [0.25, 1.0, 10.0];

const PI_E: [f64; 14] = [
    1.0, 6.0, 12.0, 5.0, 16.0, 6.0, 8.0, 7.0, 9.0, 24.0, 0.5, 13.0, 34.0, 610.0,
];

const STRESS_PI_Q_TRANSFORMER: [f64; 2] = [3.0, 7.5];
const STRESS_PI_Q_COIL: [f64; 6] = [0.03, 0.1, 0.3, 1.0, 4.0, 20.0];

/// Insulation class base hazard rate constants (Tref, K1, K2).
fn insulation_constants(insulation: InsulationClass) -> (f64, f64, f64) {
    match insulation {
        InsulationClass::Class85 => (329.0, 0.0018, 15.6),
        InsulationClass::Class105 => (352.0, 0.002, 14.0),
        InsulationClass::Class130 => (364.0, 0.0018, 8.7),
        InsulationClass::Class155 => (400.0, 0.002, 10.0),
        InsulationClass::Class170 => (398.0, 0.00125, 3.8),
        InsulationClass::Above170 => (477.0, 0.00159, 8.4),
    }
}

/// Winding hot spot temperature.
///
/// The temperature rise comes from power loss over radiating area when
/// both are known, from power loss and weight otherwise, and falls back
/// to the handbook's 35 C default estimate.
pub fn hot_spot_temperature(params: &InductorParams, profile: &StressProfile) -> f64 {
    let rise = if params.power_loss > 0.0 && params.radiating_area > 0.0 {
        125.0 * params.power_loss / params.radiating_area
    } else if params.power_loss > 0.0 && params.weight > 0.0 {
        11.5 * params.power_loss / params.weight.powf(0.6766)
    } else {
        35.0
    };
    profile.ambient_temperature + 1.1 * rise
}

pub fn parts_count(
    params: &InductorParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    let table: &[&[f64]] = match params.kind {
        InductorKind::Transformer => &COUNT_TRANSFORMER,
        InductorKind::Coil => &COUNT_COIL,
    };
    let row = lookup_row(FAMILY, "lambda_b_count", table, params.style)?;
    let lambda_b = lookup(FAMILY, "lambda_b_count", row, profile.environment_active)?;
    let pi_q = lookup(FAMILY, "piQ_count", &COUNT_PI_Q, params.quality)?;

    let mut model = HazardRateModel::new();
    model.record("lambda_b", lambda_b);
    model.record("piQ", pi_q);
    model.model_result = lambda_b * pi_q;
    Ok(model)
}

pub fn part_stress(
    params: &InductorParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    let hot_spot = hot_spot_temperature(params, profile);
    let (t_ref, k1, k2) = insulation_constants(params.insulation);
    let lambda_b = k1 * (((hot_spot + 273.0) / t_ref).powf(k2)).exp();

    let (pi_q, pi_c) = match params.kind {
        InductorKind::Transformer => (
            lookup(FAMILY, "piQ", &STRESS_PI_Q_TRANSFORMER, params.quality)?,
            1.0,
        ),
        InductorKind::Coil => (
            lookup(FAMILY, "piQ", &STRESS_PI_Q_COIL, params.quality)?,
            // Variable coils carry a construction factor of 2.
            if params.style == 2 { 2.0 } else { 1.0 },
        ),
    };
    let pi_e = lookup(FAMILY, "piE", &PI_E, profile.environment_active)?;

    let mut model = HazardRateModel::new();
    model.record("hot_spot_temperature", hot_spot);
    model.record("lambda_b", lambda_b);
    model.record("piC", pi_c);
    model.record("piQ", pi_q);
    model.record("piE", pi_e);
    model.model_result = lambda_b * pi_c * pi_q * pi_e;
    Ok(model)
}
