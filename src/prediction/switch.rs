//! Toggle and pushbutton switches (MIL-HDBK-217F section 14.1)

use crate::core::error::{lookup, CalcError};
use crate::entities::family::{SwitchConstruction, SwitchParams};
use crate::entities::model::HazardRateModel;
use crate::entities::profile::StressProfile;
use crate::prediction::relay::load_stress_factor;
use crate::prediction::StressRatios;

const FAMILY: &str = "switch";

const COUNT_LAMBDA_B: [f64; 14] = [
    0.0010, 0.0030, 0.018, 0.0080, 0.029, 0.010, 0.018, 0.013, 0.022, 0.046, 0.0005, 0.025, 0.067,
    1.2,
];

const PI_Q: [f64; 2] = [1.0, 20.0];

const PI_E: [f64; 14] = [
    1.0, 3.0, 18.0, 8.0, 29.0, 10.0, 18.0, 13.0, 22.0, 46.0, 0.5, 25.0, 67.0, 1200.0,
];

pub fn parts_count(
    params: &SwitchParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    let lambda_b = lookup(
        FAMILY,
        "lambda_b_count",
        &COUNT_LAMBDA_B,
        profile.environment_active,
    )?;
    let pi_q = lookup(FAMILY, "piQ", &PI_Q, params.quality)?;

    let mut model = HazardRateModel::new();
    model.record("lambda_b", lambda_b);
    model.record("piQ", pi_q);
    model.model_result = lambda_b * pi_q;
    Ok(model)
}

pub fn part_stress(
    params: &SwitchParams,
    profile: &StressProfile,
    ratios: &StressRatios,
) -> Result<HazardRateModel, CalcError> {
    let lambda_b = match params.construction {
        SwitchConstruction::SnapAction => 0.00045,
        SwitchConstruction::NonSnapAction => 0.034,
    };

    // Actuation rate factor: unity up to one cycle per hour.
    let pi_cyc = if params.cycles_per_hour > 1.0 {
        params.cycles_per_hour
    } else {
        1.0
    };
    let pi_l = load_stress_factor(params.load, ratios.current);
    let pi_q = lookup(FAMILY, "piQ", &PI_Q, params.quality)?;
    let pi_e = lookup(FAMILY, "piE", &PI_E, profile.environment_active)?;

    let mut model = HazardRateModel::new();
    model.record("lambda_b", lambda_b);
    model.record("piCYC", pi_cyc);
    model.record("piL", pi_l);
    model.record("piQ", pi_q);
    model.record("piE", pi_e);
    model.model_result = lambda_b * pi_cyc * pi_l * pi_q * pi_e;
    Ok(model)
}
