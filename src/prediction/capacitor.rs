//! Fixed paper bypass capacitors (MIL-HDBK-217F section 10.1)
//!
//! The voltage stress ratio for capacitors weighs the AC component by
//! sqrt(2) (peak, not rms) before comparing against the rated voltage.

use crate::core::error::{lookup, lookup_row, CalcError};
use crate::entities::family::{CapacitorParams, TemperatureRating};
use crate::entities::model::HazardRateModel;
use crate::entities::profile::StressProfile;

const FAMILY: &str = "capacitor";

/// Count rows by temperature rating (85 C, 125 C).
const COUNT_LAMBDA_B: [&[f64]; 2] = [
    &[
        0.0036, 0.0072, 0.330, 0.016, 0.055, 0.023, 0.030, 0.07, 0.13, 0.083, 0.0018, 0.044, 0.12,
        2.1,
    ],
    &[
        0.0039, 0.0087, 0.042, 0.022, 0.070, 0.035, 0.047, 0.19, 0.35, 0.130, 0.0020, 0.056, 0.19,
        2.5,
    ],
];

const PI_Q: [f64; 2] = [3.0, 7.0];

const PI_E: [f64; 14] = [
    1.0, 2.0, 9.0, 5.0, 15.0, 6.0, 8.0, 17.0, 32.0, 22.0, 0.5, 12.0, 32.0, 670.0,
];

pub fn parts_count(
    params: &CapacitorParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    let row_index = match params.temperature_rating {
        TemperatureRating::C85 => 1,
        TemperatureRating::C125 => 2,
    };
    let row = lookup_row(FAMILY, "lambda_b_count", &COUNT_LAMBDA_B, row_index)?;
    let lambda_b = lookup(FAMILY, "lambda_b_count", row, profile.environment_active)?;
    let pi_q = lookup(FAMILY, "piQ", &PI_Q, params.quality)?;

    let mut model = HazardRateModel::new();
    model.record("lambda_b", lambda_b);
    model.record("piQ", pi_q);
    model.model_result = lambda_b * pi_q;
    Ok(model)
}

pub fn part_stress(
    params: &CapacitorParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    let stress = voltage_stress(profile)?;

    let t_ref = match params.temperature_rating {
        TemperatureRating::C85 => 358.0,
        TemperatureRating::C125 => 398.0,
    };
    let t = profile.ambient_temperature;
    let lambda_b = 0.00086
        * ((stress / 0.4).powi(5) + 1.0)
        * (2.5 * ((t + 273.0) / t_ref).powf(18.0)).exp();

    let pi_cv = 1.2 * params.capacitance.powf(0.095);
    let pi_q = lookup(FAMILY, "piQ", &PI_Q, params.quality)?;
    let pi_e = lookup(FAMILY, "piE", &PI_E, profile.environment_active)?;

    let mut model = HazardRateModel::new();
    model.record("voltage_stress", stress);
    model.record("lambda_b", lambda_b);
    model.record("piCV", pi_cv);
    model.record("piQ", pi_q);
    model.record("piE", pi_e);
    model.model_result = lambda_b * pi_cv * pi_q * pi_e;
    Ok(model)
}

/// (Vdc + sqrt(2) * Vac) over rated voltage.
fn voltage_stress(profile: &StressProfile) -> Result<f64, CalcError> {
    let applied = profile.voltage_dc + std::f64::consts::SQRT_2 * profile.voltage_ac;
    if profile.rated_voltage > 0.0 {
        Ok(applied / profile.rated_voltage)
    } else if applied == 0.0 {
        Ok(0.0)
    } else {
        Err(CalcError::DegenerateInput {
            field: "rated_voltage",
            value: profile.rated_voltage,
        })
    }
}
