//! Discrete semiconductors (MIL-HDBK-217F sections 6.1 - 6.3)
//!
//! Low frequency diodes, high frequency (microwave) diodes, and low
//! frequency bipolar transistors. All three share the Arrhenius
//! junction temperature factor; the factor composition differs per
//! sub-family.

use crate::core::error::{lookup, lookup_row, CalcError};
use crate::entities::family::SemiconductorParams;
use crate::entities::model::HazardRateModel;
use crate::entities::profile::StressProfile;
use crate::prediction::StressRatios;

const FAMILY: &str = "semiconductor";

/// Low frequency diode count rows by application.
const COUNT_DIODE_LF: [&[f64]; 7] = [
    &[
        0.00360, 0.0280, 0.049, 0.043, 0.100, 0.092, 0.210, 0.200, 0.44, 0.170, 0.00180, 0.076,
        0.23, 1.50,
    ],
    &[
        0.00094, 0.0075, 0.013, 0.011, 0.027, 0.024, 0.054, 0.054, 0.12, 0.045, 0.00047, 0.020,
        0.06, 0.40,
    ],
    &[
        0.06500, 0.5200, 0.890, 0.780, 1.900, 1.700, 3.700, 3.700, 8.00, 3.100, 0.03200, 1.400,
        4.10, 28.0,
    ],
    &[
        0.00280, 0.0220, 0.039, 0.034, 0.062, 0.073, 0.160, 0.160, 0.35, 0.130, 0.00140, 0.060,
        0.18, 1.20,
    ],
    &[
        0.00290, 0.0230, 0.040, 0.035, 0.084, 0.075, 0.170, 0.170, 0.36, 0.140, 0.00150, 0.062,
        0.18, 1.20,
    ],
    &[
        0.00330, 0.0240, 0.039, 0.035, 0.082, 0.066, 0.150, 0.130, 0.27, 0.120, 0.00160, 0.060,
        0.16, 1.30,
    ],
    &[
        0.00580, 0.0400, 0.066, 0.060, 0.140, 0.110, 0.250, 0.220, 0.460, 0.21, 0.00280, 0.100,
        0.28, 2.10,
    ],
];

/// High frequency diode count rows by diode type.
const COUNT_DIODE_HF: [&[f64]; 6] = [
    &[
        0.86, 2.80, 8.9, 5.6, 20.0, 11.0, 14.0, 36.0, 62.0, 44.0, 0.43, 16.0, 67.0, 350.0,
    ],
    &[
        0.31, 0.76, 2.1, 1.5, 4.60, 2.00, 2.50, 4.50, 7.60, 7.90, 0.16, 3.70, 12.0, 94.00,
    ],
    &[
        0.004, 0.0096, 0.0026, 0.0019, 0.058, 0.025, 0.032, 0.057, 0.097, 0.10, 0.002, 0.048,
        0.15, 1.2,
    ],
    &[
        0.028, 0.068, 0.19, 0.14, 0.41, 0.18, 0.22, 0.40, 0.69, 0.71, 0.014, 0.34, 1.1, 8.5,
    ],
    &[
        0.047, 0.11, 0.31, 0.23, 0.68, 0.3, 0.37, 0.67, 1.1, 1.2, 0.023, 0.56, 1.8, 14.0,
    ],
    &[
        0.0043, 0.010, 0.029, 0.021, 0.063, 0.028, 0.034, 0.062, 0.11, 0.11, 0.0022, 0.052, 0.17,
        1.3,
    ],
];

/// Transistor count rows: small signal, power.
const COUNT_TRANSISTOR: [&[f64]; 2] = [
    &[
        0.00015, 0.0011, 0.0017, 0.0017, 0.0037, 0.0030, 0.0067, 0.0060, 0.013, 0.0056, 0.000073,
        0.0027, 0.0074, 0.056,
    ],
    &[
        0.0057, 0.042, 0.069, 0.063, 0.15, 0.12, 0.26, 0.23, 0.50, 0.22, 0.0029, 0.11, 0.29, 1.1,
    ],
];

const PI_Q: [f64; 5] = [0.7, 1.0, 2.4, 5.5, 8.0];
const PI_Q_HF: [f64; 5] = [0.5, 1.0, 5.0, 25.0, 50.0];
const PI_Q_HF_SCHOTTKY: [f64; 4] = [0.5, 1.0, 1.8, 2.5];

const PI_E_LF: [f64; 14] = [
    1.0, 6.0, 9.0, 9.0, 19.0, 13.0, 29.0, 20.0, 43.0, 24.0, 0.5, 14.0, 32.0, 320.0,
];
const PI_E_HF: [f64; 14] = [
    1.0, 2.0, 5.0, 4.0, 11.0, 4.0, 5.0, 7.0, 12.0, 16.0, 0.5, 9.0, 24.0, 250.0,
];

const LAMBDA_B_DIODE_LF: [f64; 8] = [0.0038, 0.0010, 0.069, 0.003, 0.005, 0.0013, 0.0034, 0.002];
const LAMBDA_B_DIODE_HF: [f64; 6] = [0.22, 0.18, 0.0023, 0.0081, 0.027, 0.0025];
const LAMBDA_B_TRANSISTOR: f64 = 0.00074;

/// Arrhenius temperature coefficients; low frequency diode types 7 and
/// 8 run cooler curves, as does everything but the IMPATT among the
/// high frequency types.
const PI_T_FACTOR_DIODE_LF: [f64; 8] = [
    3091.0, 3091.0, 3091.0, 3091.0, 3091.0, 3091.0, 1925.0, 1925.0,
];
const PI_T_FACTOR_DIODE_HF: [f64; 6] = [5260.0, 2100.0, 2100.0, 2100.0, 2100.0, 2100.0];
const PI_T_FACTOR_TRANSISTOR: f64 = 2114.0;

const PI_A_DIODE_HF: [f64; 3] = [0.5, 2.5, 1.0];
const PI_A_TRANSISTOR: [f64; 2] = [1.5, 0.7];

const PI_C: [f64; 2] = [1.0, 2.0];

const SCHOTTKY_TYPE: usize = 5;
const PIN_TYPE: usize = 4;

pub fn parts_count(
    params: &SemiconductorParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    let (lambda_b, pi_q) = match params {
        SemiconductorParams::DiodeLf {
            application,
            quality,
            ..
        } => {
            let row = lookup_row(FAMILY, "lambda_b_count", &COUNT_DIODE_LF, *application)?;
            (
                lookup(FAMILY, "lambda_b_count", row, profile.environment_active)?,
                lookup(FAMILY, "piQ_count", &PI_Q, *quality)?,
            )
        }
        SemiconductorParams::DiodeHf {
            diode_type,
            quality,
            ..
        } => {
            let row = lookup_row(FAMILY, "lambda_b_count", &COUNT_DIODE_HF, *diode_type)?;
            (
                lookup(FAMILY, "lambda_b_count", row, profile.environment_active)?,
                hf_quality_factor(*diode_type, *quality)?,
            )
        }
        SemiconductorParams::Transistor { quality, .. } => {
            let row = lookup_row(
                FAMILY,
                "lambda_b_count",
                &COUNT_TRANSISTOR,
                transistor_count_row(profile),
            )?;
            (
                lookup(FAMILY, "lambda_b_count", row, profile.environment_active)?,
                lookup(FAMILY, "piQ_count", &PI_Q, *quality)?,
            )
        }
    };

    let mut model = HazardRateModel::new();
    model.record("lambda_b", lambda_b);
    model.record("piQ", pi_q);
    model.model_result = lambda_b * pi_q;
    Ok(model)
}

pub fn part_stress(
    params: &SemiconductorParams,
    profile: &StressProfile,
    ratios: &StressRatios,
) -> Result<HazardRateModel, CalcError> {
    let junction = profile.junction_temperature();
    let mut model = HazardRateModel::new();
    model.record("junction_temperature", junction);

    match params {
        SemiconductorParams::DiodeLf {
            application,
            construction,
            quality,
        } => {
            let lambda_b = lookup(FAMILY, "lambda_b", &LAMBDA_B_DIODE_LF, *application)?;
            let factor = lookup(FAMILY, "piT", &PI_T_FACTOR_DIODE_LF, *application)?;
            let pi_t = arrhenius(factor, junction);
            let pi_s = if *application > 5 {
                1.0
            } else if ratios.voltage <= 0.3 {
                0.054
            } else {
                ratios.voltage.powf(2.43)
            };
            let pi_c = lookup(FAMILY, "piC", &PI_C, *construction)?;
            let pi_q = lookup(FAMILY, "piQ", &PI_Q, *quality)?;
            let pi_e = lookup(FAMILY, "piE", &PI_E_LF, profile.environment_active)?;

            model.record("lambda_b", lambda_b);
            model.record("piT", pi_t);
            model.record("piS", pi_s);
            model.record("piC", pi_c);
            model.record("piQ", pi_q);
            model.record("piE", pi_e);
            model.model_result = lambda_b * pi_t * pi_s * pi_c * pi_q * pi_e;
        }
        SemiconductorParams::DiodeHf {
            diode_type,
            application,
            quality,
        } => {
            let lambda_b = lookup(FAMILY, "lambda_b", &LAMBDA_B_DIODE_HF, *diode_type)?;
            let factor = lookup(FAMILY, "piT", &PI_T_FACTOR_DIODE_HF, *diode_type)?;
            let pi_t = arrhenius(factor, junction);
            let pi_a = lookup(FAMILY, "piA", &PI_A_DIODE_HF, *application)?;
            let pi_r = if *diode_type == PIN_TYPE {
                if profile.rated_power <= 0.0 {
                    return Err(CalcError::DegenerateInput {
                        field: "rated_power",
                        value: profile.rated_power,
                    });
                }
                0.326 * profile.rated_power.ln() - 0.25
            } else {
                1.0
            };
            let pi_q = hf_quality_factor(*diode_type, *quality)?;
            let pi_e = lookup(FAMILY, "piE", &PI_E_HF, profile.environment_active)?;

            model.record("lambda_b", lambda_b);
            model.record("piT", pi_t);
            model.record("piA", pi_a);
            model.record("piR", pi_r);
            model.record("piQ", pi_q);
            model.record("piE", pi_e);
            model.model_result = lambda_b * pi_t * pi_a * pi_r * pi_q * pi_e;
        }
        SemiconductorParams::Transistor {
            application,
            quality,
        } => {
            let pi_t = arrhenius(PI_T_FACTOR_TRANSISTOR, junction);
            let pi_a = lookup(FAMILY, "piA", &PI_A_TRANSISTOR, *application)?;
            let pi_r = if profile.rated_power < 0.1 {
                0.43
            } else {
                profile.rated_power.powf(0.37)
            };
            let pi_s = 0.045 * (3.1 * ratios.voltage).exp();
            let pi_q = lookup(FAMILY, "piQ", &PI_Q, *quality)?;
            let pi_e = lookup(FAMILY, "piE", &PI_E_LF, profile.environment_active)?;

            model.record("lambda_b", LAMBDA_B_TRANSISTOR);
            model.record("piT", pi_t);
            model.record("piA", pi_a);
            model.record("piR", pi_r);
            model.record("piS", pi_s);
            model.record("piQ", pi_q);
            model.record("piE", pi_e);
            model.model_result =
                LAMBDA_B_TRANSISTOR * pi_t * pi_a * pi_r * pi_s * pi_q * pi_e;
        }
    }
    Ok(model)
}

/// exp(-factor * (1/Tj - 1/298)), temperatures in K.
fn arrhenius(factor: f64, junction_temperature: f64) -> f64 {
    (-factor * (1.0 / (junction_temperature + 273.0) - 1.0 / 298.0)).exp()
}

/// Schottky diodes use the shorter quality ladder.
fn hf_quality_factor(diode_type: usize, quality: usize) -> Result<f64, CalcError> {
    if diode_type == SCHOTTKY_TYPE {
        lookup(FAMILY, "piQ", &PI_Q_HF_SCHOTTKY, quality)
    } else {
        lookup(FAMILY, "piQ", &PI_Q_HF, quality)
    }
}

/// Power transistors above one watt rated use the power count row.
fn transistor_count_row(profile: &StressProfile) -> usize {
    if profile.rated_power > 1.0 {
        2
    } else {
        1
    }
}
