//! Quartz crystals (MIL-HDBK-217F section 19.1)

use crate::core::error::{lookup, CalcError};
use crate::entities::family::CrystalParams;
use crate::entities::model::HazardRateModel;
use crate::entities::profile::StressProfile;

const FAMILY: &str = "crystal";

const COUNT_LAMBDA_B: [f64; 14] = [
    0.032, 0.096, 0.32, 0.19, 0.51, 0.38, 0.54, 0.70, 0.90, 0.74, 0.016, 0.42, 1.0, 16.0,
];

const PI_Q: [f64; 2] = [1.0, 2.1];

const PI_E: [f64; 14] = [
    1.0, 3.0, 10.0, 6.0, 16.0, 12.0, 17.0, 22.0, 28.0, 23.0, 0.5, 13.0, 32.0, 500.0,
];

pub fn parts_count(
    params: &CrystalParams,
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
    params: &CrystalParams,
    profile: &StressProfile,
) -> Result<HazardRateModel, CalcError> {
    if params.frequency <= 0.0 {
        return Err(CalcError::DegenerateInput {
            field: "frequency",
            value: params.frequency,
        });
    }
    let lambda_b = 0.013 * params.frequency.powf(0.23);
    let pi_q = lookup(FAMILY, "piQ", &PI_Q, params.quality)?;
    let pi_e = lookup(FAMILY, "piE", &PI_E, profile.environment_active)?;

    let mut model = HazardRateModel::new();
    model.record("lambda_b", lambda_b);
    model.record("piQ", pi_q);
    model.record("piE", pi_e);
    model.model_result = lambda_b * pi_q * pi_e;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_count() {
        let params = CrystalParams {
            frequency: 10.0,
            quality: 1,
        };
        let profile = StressProfile {
            environment_active: 7,
            ..Default::default()
        };
        let model = parts_count(&params, &profile).unwrap();
        assert_eq!(model.factor("lambda_b"), Some(0.54));
        assert_eq!(model.model_result, 0.54);
    }

    #[test]
    fn test_part_stress_frequency_law() {
        let params = CrystalParams {
            frequency: 32.0,
            quality: 2,
        };
        let profile = StressProfile {
            environment_active: 2,
            ..Default::default()
        };
        let model = part_stress(&params, &profile).unwrap();
        let lambda_b = 0.013 * 32.0_f64.powf(0.23);
        assert!((model.factor("lambda_b").unwrap() - lambda_b).abs() < 1e-12);
        assert!((model.model_result - lambda_b * 2.1 * 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_frequency_is_degenerate() {
        let params = CrystalParams {
            frequency: 0.0,
            quality: 1,
        };
        let err = part_stress(&params, &StressProfile::default()).unwrap_err();
        assert!(matches!(
            err,
            CalcError::DegenerateInput {
                field: "frequency",
                ..
            }
        ));
    }
}
