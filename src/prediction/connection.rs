//! Multipin connectors (MIL-HDBK-217F section 15.1)
//!
//! The insert temperature is the ambient plus a contact temperature
//! rise driven by the per-contact current and the contact gauge.

use crate::core::error::{lookup, lookup_row, CalcError};
use crate::entities::family::ConnectorParams;
use crate::entities::model::HazardRateModel;
use crate::entities::profile::StressProfile;

const FAMILY: &str = "connector";

/// Contact gauge constants for 22, 20, 16, and 12 AWG.
const GAUGE_K: [f64; 4] = [0.989, 0.640, 0.274, 0.100];

/// Count rows by configuration (rack and panel, circular, power,
/// coaxial, triaxial). The first three configurations share a row, as
/// do the last two.
const COUNT_LAMBDA_B: [&[f64]; 5] = [
    &[
        0.011, 0.14, 0.11, 0.069, 0.20, 0.058, 0.098, 0.23, 0.34, 0.37, 0.0054, 0.16, 0.42, 6.8,
    ],
    &[
        0.011, 0.14, 0.11, 0.069, 0.20, 0.058, 0.098, 0.23, 0.34, 0.37, 0.0054, 0.16, 0.42, 6.8,
    ],
    &[
        0.011, 0.14, 0.11, 0.069, 0.20, 0.058, 0.098, 0.23, 0.34, 0.37, 0.0054, 0.16, 0.42, 6.8,
    ],
    &[
        0.012, 0.015, 0.13, 0.075, 0.21, 0.050, 0.10, 0.22, 0.32, 0.38, 0.0061, 0.16, 0.54, 7.3,
    ],
    &[
        0.012, 0.015, 0.13, 0.075, 0.21, 0.050, 0.10, 0.22, 0.32, 0.38, 0.0061, 0.16, 0.54, 7.3,
    ],
];

/// Rows: MIL-SPEC, lower quality.
const PI_E: [[f64; 14]; 2] = [
    [
        1.0, 1.0, 8.0, 5.0, 13.0, 3.0, 5.0, 8.0, 12.0, 19.0, 0.5, 10.0, 27.0, 490.0,
    ],
    [
        2.0, 5.0, 21.0, 10.0, 27.0, 12.0, 18.0, 17.0, 25.0, 37.0, 0.8, 20.0, 54.0, 970.0,
    ],
];

pub fn parts_count(
    params: &ConnectorParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    let row = lookup_row(
        FAMILY,
        "lambda_b_count",
        &COUNT_LAMBDA_B,
        params.configuration,
    )?;
    let lambda_b = lookup(FAMILY, "lambda_b_count", row, profile.environment_active)?;
    let pi_q = match params.quality {
        1 => 1.0,
        2 => 2.0,
        other => {
            return Err(CalcError::InvalidIndex {
                family: FAMILY,
                table: "piQ_count",
                index: other,
            })
        }
    };

    let mut model = HazardRateModel::new();
    model.record("lambda_b", lambda_b);
    model.record("piQ", pi_q);
    model.model_result = lambda_b * pi_q;
    Ok(model)
}

pub fn part_stress(
    params: &ConnectorParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    let gauge_k = lookup(FAMILY, "gauge", &GAUGE_K, params.contact_gauge)?;
    let rise = gauge_k * params.amps_per_contact.powf(1.85);
    let contact_temperature = profile.ambient_temperature + rise;

    let lambda_b = insert_base_rate(params.insert_material, contact_temperature)?;
    let pi_k = mating_factor(params.mate_cycles);
    let pi_p = active_pins_factor(params.active_pins);
    let pi_e = environment_factor(params.quality, profile.environment_active)?;

    let mut model = HazardRateModel::new();
    model.record("contact_temperature", contact_temperature);
    model.record("lambda_b", lambda_b);
    model.record("piK", pi_k);
    model.record("piP", pi_p);
    model.record("piE", pi_e);
    model.model_result = lambda_b * pi_k * pi_p * pi_e;
    Ok(model)
}

/// Insert material base hazard rate curves, materials grouped into the
/// four handbook insert classes.
fn insert_base_rate(insert_material: usize, temperature: f64) -> Result<f64, CalcError> {
    let t = temperature + 273.0;
    let (k, activation, t_ref, exponent) = match insert_material {
        1..=3 => (0.020, 1592.0, 473.0, 5.36),
        4..=9 => (0.431, 2073.6, 423.0, 4.66),
        10..=12 => (0.190, 1298.0, 373.0, 4.25),
        13..=15 => (0.770, 1528.8, 358.0, 4.72),
        other => {
            return Err(CalcError::InvalidIndex {
                family: FAMILY,
                table: "insert_material",
                index: other,
            })
        }
    };
    Ok(k * (-activation / t + (t / t_ref).powf(exponent)).exp())
}

/// Mate/unmate cycling factor, cycles per 1000 hours.
fn mating_factor(cycles: f64) -> f64 {
    if cycles <= 0.05 {
        1.0
    } else if cycles <= 0.5 {
        1.5
    } else if cycles <= 5.0 {
        2.0
    } else if cycles <= 50.0 {
        3.0
    } else {
        4.0
    }
}

/// Active contacts factor; a single contact contributes no multiplier.
fn active_pins_factor(active_pins: usize) -> f64 {
    if active_pins >= 2 {
        (((active_pins as f64 - 1.0) / 10.0).powf(0.51064)).exp()
    } else {
        1.0
    }
}

fn environment_factor(quality: usize, environment: usize) -> Result<f64, CalcError> {
    let row = match quality {
        1 => 0,
        2 => 1,
        other => {
            return Err(CalcError::InvalidIndex {
                family: FAMILY,
                table: "piE",
                index: other,
            })
        }
    };
    lookup(FAMILY, "piE", &PI_E[row], environment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ConnectorParams {
        ConnectorParams {
            configuration: 2,
            insert_material: 5,
            contact_gauge: 2,
            amps_per_contact: 2.0,
            active_pins: 20,
            mate_cycles: 1.0,
            quality: 1,
        }
    }

    #[test]
    fn test_parts_count_configuration_rows() {
        let profile = StressProfile {
            environment_active: 5,
            ..Default::default()
        };
        let circular = parts_count(&params(), &profile).unwrap();
        assert_eq!(circular.factor("lambda_b"), Some(0.20));

        let mut coaxial = params();
        coaxial.configuration = 4;
        let model = parts_count(&coaxial, &profile).unwrap();
        assert_eq!(model.factor("lambda_b"), Some(0.21));
    }

    #[test]
    fn test_part_stress_composition() {
        let profile = StressProfile {
            ambient_temperature: 40.0,
            environment_active: 3,
            ..Default::default()
        };
        let model = part_stress(&params(), &profile).unwrap();

        let rise = 0.640 * 2.0_f64.powf(1.85);
        let t = 40.0 + rise + 273.0;
        let lambda_b = 0.431 * (-2073.6 / t + (t / 423.0_f64).powf(4.66)).exp();
        let pi_p = ((19.0_f64 / 10.0).powf(0.51064)).exp();
        assert!((model.factor("lambda_b").unwrap() - lambda_b).abs() < 1e-12);
        assert_eq!(model.factor("piK"), Some(2.0));
        assert!((model.factor("piP").unwrap() - pi_p).abs() < 1e-12);
        assert_eq!(model.factor("piE"), Some(8.0));
        assert!((model.model_result - lambda_b * 2.0 * pi_p * 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_mating_factor_steps() {
        assert_eq!(mating_factor(0.05), 1.0);
        assert_eq!(mating_factor(0.3), 1.5);
        assert_eq!(mating_factor(5.0), 2.0);
        assert_eq!(mating_factor(30.0), 3.0);
        assert_eq!(mating_factor(100.0), 4.0);
    }

    #[test]
    fn test_single_pin_has_unity_pin_factor() {
        assert_eq!(active_pins_factor(1), 1.0);
        assert!(active_pins_factor(2) > 1.0);
    }

    #[test]
    fn test_insert_material_out_of_range() {
        let mut p = params();
        p.insert_material = 16;
        let err = part_stress(&p, &StressProfile::default()).unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidIndex {
                table: "insert_material",
                index: 16,
                ..
            }
        ));
    }

    #[test]
    fn test_higher_contact_current_raises_base_rate() {
        let profile = StressProfile::default();
        let cool = part_stress(&params(), &profile).unwrap();
        let mut hot = params();
        hot.amps_per_contact = 5.0;
        let hot = part_stress(&hot, &profile).unwrap();
        assert!(hot.factor("lambda_b").unwrap() > cool.factor("lambda_b").unwrap());
    }
}
