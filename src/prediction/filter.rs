//! Electrical filters (MIL-HDBK-217F section 21.1)
//!
//! The filter base rate has no stress dependence; the parts count
//! method is the same base rate at the environment's generic factor.

use crate::core::error::{lookup, CalcError};
use crate::entities::family::FilterParams;
use crate::entities::model::HazardRateModel;
use crate::entities::profile::StressProfile;

const FAMILY: &str = "filter";

/// Base rates by style (ceramic-ferrite, discrete LC, discrete LC with
/// crystal).
const LAMBDA_B: [f64; 3] = [0.022, 0.12, 0.27];

const PI_Q: [f64; 2] = [1.0, 2.9];

const PI_E: [f64; 14] = [
    1.0, 2.0, 6.0, 4.0, 9.0, 7.0, 9.0, 11.0, 13.0, 11.0, 0.8, 7.0, 15.0, 120.0,
];

pub fn parts_count(
    params: &FilterParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    // Stress-independent model, so the generic rate is the stress
    // composition itself.
    part_stress(params, profile)
}

pub fn part_stress(
    params: &FilterParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    let lambda_b = lookup(FAMILY, "lambda_b", &LAMBDA_B, params.style)?;
    let pi_q = lookup(FAMILY, "piQ", &PI_Q, params.quality)?;
    let pi_e = lookup(FAMILY, "piE", &PI_E, profile.environment_active)?;

    let mut model = HazardRateModel::new();
    model.record("lambda_b", lambda_b);
    model.record("piQ", pi_q);
    model.record("piE", pi_e);
    model.model_result = lambda_b * pi_q * pi_e;
    Ok(model)
}
