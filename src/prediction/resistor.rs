//! Fixed carbon composition resistors (MIL-HDBK-217F section 9.1)

use crate::core::error::{lookup, CalcError};
use crate::entities::family::ResistorParams;
use crate::entities::model::HazardRateModel;
use crate::entities::profile::StressProfile;
use crate::prediction::{band_index, StressRatios};

const FAMILY: &str = "resistor";

const COUNT_LAMBDA_B: [f64; 14] = [
    0.0005, 0.0022, 0.0071, 0.0037, 0.012, 0.0052, 0.0065, 0.016, 0.025, 0.025, 0.00025, 0.0098,
    0.035, 0.36,
];

const COUNT_PI_Q: [f64; 6] = [0.030, 0.10, 0.30, 1.0, 3.0, 10.0];
const STRESS_PI_Q: [f64; 6] = [0.03, 0.1, 0.3, 1.0, 5.0, 15.0];

const PI_E: [f64; 14] = [
    1.0, 3.0, 8.0, 5.0, 13.0, 4.0, 5.0, 7.0, 11.0, 19.0, 0.5, 11.0, 27.0, 490.0,
];

/// Resistance range factor, bands closing at 0.1M, 1M, and 10M ohms.
const PI_R: [f64; 4] = [1.0, 1.1, 1.6, 2.5];
const PI_R_BREAKPOINTS: [f64; 3] = [1.0e5, 1.0e6, 1.0e7];

pub fn parts_count(
    params: &ResistorParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    let lambda_b = lookup(
        FAMILY,
        "lambda_b_count",
        &COUNT_LAMBDA_B,
        profile.environment_active,
    )?;
    let pi_q = lookup(FAMILY, "piQ_count", &COUNT_PI_Q, params.quality)?;

    let mut model = HazardRateModel::new();
    model.record("lambda_b", lambda_b);
    model.record("piQ", pi_q);
    model.model_result = lambda_b * pi_q;
    Ok(model)
}

pub fn part_stress(
    params: &ResistorParams,
    profile: &StressProfile,
    ratios: &StressRatios,
) -> Result<HazardRateModel, CalcError> {
    let t = profile.ambient_temperature;
    let lambda_b = 4.5e-9
        * (12.0 * (t + 273.0) / 343.0).exp()
        * ((ratios.power / 0.6) * ((t + 273.0) / 273.0)).exp();

    let pi_r = PI_R[band_index(&PI_R_BREAKPOINTS, params.resistance)];
    let pi_q = lookup(FAMILY, "piQ", &STRESS_PI_Q, params.quality)?;
    let pi_e = lookup(FAMILY, "piE", &PI_E, profile.environment_active)?;

    let mut model = HazardRateModel::new();
    model.record("lambda_b", lambda_b);
    model.record("piR", pi_r);
    model.record("piQ", pi_q);
    model.record("piE", pi_e);
    model.model_result = lambda_b * pi_r * pi_q * pi_e;
    Ok(model)
}
