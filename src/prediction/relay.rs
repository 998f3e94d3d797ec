//! Mechanical relays (MIL-HDBK-217F section 13.1)
//!
//! Non-established-reliability parts (quality 8) use the harsher
//! cycling curve, the non-MIL application factors, and the second
//! environment row.

use crate::core::error::{lookup, lookup_row, CalcError};
use crate::entities::family::{ContactLoad, RelayParams};
use crate::entities::model::HazardRateModel;
use crate::entities::profile::StressProfile;
use crate::prediction::StressRatios;

const FAMILY: &str = "relay";

/// Count rows by style (general purpose, contactor, latching, reed,
/// thermal/bimetal, meter movement).
const COUNT_LAMBDA_B: [&[f64]; 6] = [
    &[
        0.13, 0.28, 2.1, 1.1, 3.8, 1.1, 1.4, 1.9, 2.0, 7.0, 0.66, 3.5, 10.0, 0.0,
    ],
    &[
        0.43, 0.89, 6.9, 3.6, 12.0, 3.4, 4.4, 6.2, 6.7, 22.0, 0.21, 11.0, 32.0, 0.0,
    ],
    &[
        0.13, 0.26, 2.1, 1.1, 3.8, 1.1, 1.4, 1.9, 2.0, 7.0, 0.66, 3.5, 10.0, 0.0,
    ],
    &[
        0.11, 0.23, 1.8, 0.92, 3.3, 0.96, 1.2, 2.1, 2.3, 6.5, 0.54, 3.0, 9.0, 0.0,
    ],
    &[
        0.29, 0.60, 4.8, 2.4, 8.2, 2.3, 2.9, 4.1, 4.5, 15.0, 0.14, 7.6, 22.0, 0.0,
    ],
    &[
        0.88, 1.8, 14.0, 7.4, 26.0, 7.1, 9.1, 13.0, 14.0, 46.0, 0.44, 24.0, 67.0, 0.0,
    ],
];

const COUNT_PI_Q: [f64; 2] = [0.6, 3.0];

const PI_C: [f64; 9] = [1.0, 1.5, 1.75, 2.0, 2.5, 3.0, 4.25, 5.5, 8.0];

const PI_Q: [f64; 8] = [0.10, 0.30, 0.45, 0.60, 1.0, 1.5, 3.0, 3.0];

/// Rows: MIL-SPEC qualities, non-established-reliability.
const PI_E: [[f64; 14]; 2] = [
    [
        1.0, 2.0, 15.0, 8.0, 27.0, 7.0, 9.0, 11.0, 12.0, 46.0, 0.50, 25.0, 66.0, 0.0,
    ],
    [
        2.0, 5.0, 44.0, 24.0, 78.0, 15.0, 20.0, 28.0, 38.0, 140.0, 1.0, 72.0, 200.0, 0.0,
    ],
];

/// Application/construction factor columns (MIL-SPEC, lower quality)
/// by application row (dry circuit signal, general purpose, high
/// current power).
const PI_F: [[f64; 2]; 3] = [[4.0, 8.0], [3.0, 6.0], [6.0, 12.0]];

const NON_MIL_QUALITY: usize = 8;

pub fn parts_count(
    params: &RelayParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    let row = lookup_row(FAMILY, "lambda_b_count", &COUNT_LAMBDA_B, params.style)?;
    let lambda_b = lookup(FAMILY, "lambda_b_count", row, profile.environment_active)?;
    let quality = if params.quality == NON_MIL_QUALITY { 2 } else { 1 };
    let pi_q = lookup(FAMILY, "piQ_count", &COUNT_PI_Q, quality)?;

    let mut model = HazardRateModel::new();
    model.record("lambda_b", lambda_b);
    model.record("piQ", pi_q);
    model.model_result = lambda_b * pi_q;
    Ok(model)
}

pub fn part_stress(
    params: &RelayParams,
    profile: &StressProfile,
    ratios: &StressRatios,
) -> Result<HazardRateModel, CalcError> {
    use crate::entities::family::TemperatureRating;

    let (t_ref, k1, k2) = match params.rated_temperature {
        TemperatureRating::C85 => (352.0, 0.00555, 15.7),
        TemperatureRating::C125 => (377.0, 0.0054, 10.4),
    };
    let t = profile.ambient_temperature;
    let lambda_b = k1 * (((t + 273.0) / t_ref).powf(k2)).exp();

    let pi_l = load_stress_factor(params.load, ratios.current);
    let pi_c = lookup(FAMILY, "piC", &PI_C, params.contact_form)?;
    let pi_cyc = cycling_factor(params.cycles_per_hour, params.quality);
    let pi_f = application_factor(params)?;
    let pi_q = lookup(FAMILY, "piQ", &PI_Q, params.quality)?;
    let pi_e = environment_factor(params.quality, profile.environment_active)?;

    let mut model = HazardRateModel::new();
    model.record("lambda_b", lambda_b);
    model.record("piL", pi_l);
    model.record("piC", pi_c);
    model.record("piCYC", pi_cyc);
    model.record("piF", pi_f);
    model.record("piQ", pi_q);
    model.record("piE", pi_e);
    model.model_result = lambda_b * pi_l * pi_c * pi_cyc * pi_f * pi_q * pi_e;
    Ok(model)
}

/// Load stress factor: exp(S/K) squared, K by load character.
pub(crate) fn load_stress_factor(load: ContactLoad, current_ratio: f64) -> f64 {
    let k = match load {
        ContactLoad::Resistive => 0.8,
        ContactLoad::Inductive => 0.4,
        ContactLoad::Lamp => 0.2,
    };
    ((current_ratio / k).exp()).powi(2)
}

fn cycling_factor(cycles_per_hour: f64, quality: usize) -> f64 {
    if quality == NON_MIL_QUALITY {
        if cycles_per_hour >= 1000.0 {
            (cycles_per_hour / 100.0).powi(2)
        } else if cycles_per_hour >= 10.0 {
            cycles_per_hour / 10.0
        } else {
            1.0
        }
    } else if cycles_per_hour >= 1.0 {
        cycles_per_hour / 10.0
    } else {
        1.0
    }
}

fn application_factor(params: &RelayParams) -> Result<f64, CalcError> {
    if params.application == 0 || params.application > PI_F.len() {
        return Err(CalcError::InvalidIndex {
            family: FAMILY,
            table: "piF",
            index: params.application,
        });
    }
    let column = usize::from(params.quality == NON_MIL_QUALITY);
    Ok(PI_F[params.application - 1][column])
}

fn environment_factor(quality: usize, environment: usize) -> Result<f64, CalcError> {
    let row = usize::from(quality == NON_MIL_QUALITY);
    lookup(FAMILY, "piE", &PI_E[row], environment)
}
