//! Elapsed time and panel meters (MIL-HDBK-217F sections 12.3, 18.1)

use crate::core::error::{lookup, lookup_row, CalcError};
use crate::entities::family::MeterParams;
use crate::entities::model::HazardRateModel;
use crate::entities::profile::StressProfile;

const FAMILY: &str = "meter";

/// Elapsed time base rates by type (AC, inverter driven, commutator DC).
const ELAPSED_LAMBDA_B: [f64; 3] = [20.0, 30.0, 80.0];

const ELAPSED_PI_E: [f64; 14] = [
    1.0, 2.0, 12.0, 7.0, 18.0, 5.0, 8.0, 16.0, 25.0, 26.0, 0.5, 14.0, 38.0, 0.0,
];

const ELAPSED_COUNT_LAMBDA_B: [&[f64]; 3] = [
    &[
        10.0, 20.0, 120.0, 70.0, 180.0, 50.0, 80.0, 160.0, 250.0, 260.0, 5.0, 140.0, 380.0, 0.0,
    ],
    &[
        15.0, 30.0, 180.0, 105.0, 270.0, 75.0, 120.0, 240.0, 375.0, 390.0, 7.5, 210.0, 570.0, 0.0,
    ],
    &[
        40.0, 80.0, 480.0, 280.0, 720.0, 200.0, 320.0, 640.0, 1000.0, 1040.0, 20.0, 560.0, 1520.0,
        0.0,
    ],
];

const PANEL_LAMBDA_B: f64 = 0.090;
const PANEL_PI_A: [f64; 2] = [1.0, 1.7];
const PANEL_PI_F: [f64; 3] = [1.0, 1.0, 2.8];
const PANEL_PI_Q: [f64; 2] = [1.0, 3.4];

const PANEL_PI_E: [f64; 14] = [
    1.0, 4.0, 25.0, 12.0, 35.0, 28.0, 42.0, 58.0, 73.0, 60.0, 1.1, 60.0, 0.0, 0.0,
];

const PANEL_COUNT_LAMBDA_B: [&[f64]; 2] = [
    &[
        0.09, 0.36, 2.3, 1.1, 3.2, 2.5, 3.8, 5.2, 6.6, 5.4, 0.099, 5.4, 0.0, 0.0,
    ],
    &[
        0.15, 0.81, 2.8, 1.8, 5.4, 4.3, 6.4, 8.9, 11.0, 9.2, 0.17, 9.2, 0.0, 0.0,
    ],
];

pub fn parts_count(
    params: &MeterParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    let mut model = HazardRateModel::new();
    match params {
        MeterParams::ElapsedTime { meter_type } => {
            let row = lookup_row(FAMILY, "lambda_b_count", &ELAPSED_COUNT_LAMBDA_B, *meter_type)?;
            let lambda_b = lookup(FAMILY, "lambda_b_count", row, profile.environment_active)?;
            model.record("lambda_b", lambda_b);
            model.model_result = lambda_b;
        }
        MeterParams::Panel {
            application,
            quality,
            ..
        } => {
            let row = lookup_row(FAMILY, "lambda_b_count", &PANEL_COUNT_LAMBDA_B, *application)?;
            let lambda_b = lookup(FAMILY, "lambda_b_count", row, profile.environment_active)?;
            let pi_q = lookup(FAMILY, "piQ", &PANEL_PI_Q, *quality)?;
            model.record("lambda_b", lambda_b);
            model.record("piQ", pi_q);
            model.model_result = lambda_b * pi_q;
        }
    }
    Ok(model)
}

pub fn part_stress(
    params: &MeterParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    let mut model = HazardRateModel::new();
    match params {
        MeterParams::ElapsedTime { meter_type } => {
            let lambda_b = lookup(FAMILY, "lambda_b", &ELAPSED_LAMBDA_B, *meter_type)?;
            let pi_t = temperature_stress_factor(profile)?;
            let pi_e = lookup(FAMILY, "piE", &ELAPSED_PI_E, profile.environment_active)?;
            model.record("lambda_b", lambda_b);
            model.record("piT", pi_t);
            model.record("piE", pi_e);
            model.model_result = lambda_b * pi_t * pi_e;
        }
        MeterParams::Panel {
            application,
            function,
            quality,
        } => {
            let pi_a = lookup(FAMILY, "piA", &PANEL_PI_A, *application)?;
            let pi_f = lookup(FAMILY, "piF", &PANEL_PI_F, *function)?;
            let pi_q = lookup(FAMILY, "piQ", &PANEL_PI_Q, *quality)?;
            let pi_e = lookup(FAMILY, "piE", &PANEL_PI_E, profile.environment_active)?;
            model.record("lambda_b", PANEL_LAMBDA_B);
            model.record("piA", pi_a);
            model.record("piF", pi_f);
            model.record("piQ", pi_q);
            model.record("piE", pi_e);
            model.model_result = PANEL_LAMBDA_B * pi_a * pi_f * pi_q * pi_e;
        }
    }
    Ok(model)
}

/// Stepped temperature stress factor from the ratio of operating to
/// maximum rated temperature.
fn temperature_stress_factor(profile: &StressProfile) -> Result<f64, CalcError> {
    if profile.rated_max_temperature <= 0.0 {
        return Err(CalcError::DegenerateInput {
            field: "rated_max_temperature",
            value: profile.rated_max_temperature,
        });
    }
    let stress = profile.effective_case_temperature() / profile.rated_max_temperature;
    Ok(if stress <= 0.5 {
        0.5
    } else if stress <= 0.6 {
        0.6
    } else if stress <= 0.8 {
        0.8
    } else {
        1.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_time_parts_count() {
        let profile = StressProfile {
            environment_active: 5,
            ..Default::default()
        };
        let params = MeterParams::ElapsedTime { meter_type: 2 };
        let model = parts_count(&params, &profile).unwrap();
        assert_eq!(model.factor("lambda_b"), Some(270.0));
        assert_eq!(model.model_result, 270.0);
    }

    #[test]
    fn test_elapsed_time_part_stress() {
        // 25 C over 125 C rated is a 0.2 stress, bottom step.
        let profile = StressProfile {
            environment_active: 2,
            ..Default::default()
        };
        let params = MeterParams::ElapsedTime { meter_type: 1 };
        let model = part_stress(&params, &profile).unwrap();
        assert_eq!(model.factor("lambda_b"), Some(20.0));
        assert_eq!(model.factor("piT"), Some(0.5));
        assert_eq!(model.factor("piE"), Some(2.0));
        assert!((model.model_result - 20.0 * 0.5 * 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_temperature_stress_steps() {
        let mut profile = StressProfile {
            rated_max_temperature: 100.0,
            ..Default::default()
        };
        for (temperature, expected) in [(50.0, 0.5), (55.0, 0.6), (75.0, 0.8), (90.0, 1.0)] {
            profile.ambient_temperature = temperature;
            assert_eq!(
                temperature_stress_factor(&profile).unwrap(),
                expected,
                "T = {temperature}"
            );
        }
    }

    #[test]
    fn test_panel_part_stress() {
        let profile = StressProfile {
            environment_active: 4,
            ..Default::default()
        };
        let params = MeterParams::Panel {
            application: 2,
            function: 3,
            quality: 1,
        };
        let model = part_stress(&params, &profile).unwrap();
        assert!((model.model_result - 0.090 * 1.7 * 2.8 * 1.0 * 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_panel_parts_count() {
        let params = MeterParams::Panel {
            application: 1,
            function: 1,
            quality: 2,
        };
        let model = parts_count(&params, &StressProfile::default()).unwrap();
        assert_eq!(model.factor("lambda_b"), Some(0.09));
        assert!((model.model_result - 0.09 * 3.4).abs() < 1e-12);
    }

    #[test]
    fn test_meter_type_out_of_range() {
        let params = MeterParams::ElapsedTime { meter_type: 4 };
        let err = part_stress(&params, &StressProfile::default()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidIndex { index: 4, .. }));
    }
}
