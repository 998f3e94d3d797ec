//! Stress profile - the electrical and thermal operating point of a part

use serde::{Deserialize, Serialize};

/// Which MIL-HDBK-217F prediction method to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionMethod {
    /// Coarse table lookup by environment and quality
    PartsCount,
    /// Detailed method composing stress-dependent correction factors
    PartStress,
}

impl Default for PredictionMethod {
    fn default() -> Self {
        PredictionMethod::PartsCount
    }
}

impl std::fmt::Display for PredictionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictionMethod::PartsCount => write!(f, "parts count"),
            PredictionMethod::PartStress => write!(f, "part stress"),
        }
    }
}

impl PredictionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionMethod::PartsCount => "parts count",
            PredictionMethod::PartStress => "part stress",
        }
    }
}

/// Operating and rated stresses for one component.
///
/// All temperatures are in degrees C, powers in W, voltages in V and
/// currents in A. Environment codes are the 1-based MIL-HDBK-217F
/// environment ordinals (1 = ground benign .. 14 = cannon launch);
/// dormant environment codes run 1..=4 (ground, naval, airborne,
/// space).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressProfile {
    /// Operating AC (rms) voltage
    pub voltage_ac: f64,
    /// Operating DC voltage
    pub voltage_dc: f64,
    /// Rated voltage
    pub rated_voltage: f64,

    /// Operating current
    pub operating_current: f64,
    /// Rated current
    pub rated_current: f64,

    /// Operating power dissipation
    pub operating_power: f64,
    /// Rated power
    pub rated_power: f64,

    /// Ambient temperature
    pub ambient_temperature: f64,
    /// Case temperature; falls back to ambient when not supplied
    pub case_temperature: f64,
    /// Junction-case thermal resistance in C/W
    pub theta_jc: f64,
    /// Maximum rated (knee) temperature
    pub rated_max_temperature: f64,

    /// Duty cycle in percent, 0..=100
    pub duty_cycle: f64,

    /// Active environment code, 1..=14
    pub environment_active: usize,
    /// Dormant (storage) environment code, 1..=4
    pub environment_dormant: usize,

    /// Number of identical parts this profile represents
    pub quantity: u32,
    /// Additive hazard rate adjustment, applied before scaling
    pub add_adj_factor: f64,
    /// Multiplicative hazard rate adjustment
    pub mult_adj_factor: f64,
}

impl Default for StressProfile {
    fn default() -> Self {
        StressProfile {
            voltage_ac: 0.0,
            voltage_dc: 0.0,
            rated_voltage: 0.0,
            operating_current: 0.0,
            rated_current: 0.0,
            operating_power: 0.0,
            rated_power: 0.0,
            ambient_temperature: 25.0,
            case_temperature: 0.0,
            theta_jc: 0.0,
            rated_max_temperature: 125.0,
            duty_cycle: 100.0,
            environment_active: 1,
            environment_dormant: 1,
            quantity: 1,
            add_adj_factor: 0.0,
            mult_adj_factor: 1.0,
        }
    }
}

impl StressProfile {
    /// Case temperature with the ambient fallback applied.
    pub fn effective_case_temperature(&self) -> f64 {
        if self.case_temperature > 0.0 {
            self.case_temperature
        } else {
            self.ambient_temperature
        }
    }

    /// Junction temperature for semiconductor and IC families:
    /// case temperature plus the operating power dropped across the
    /// junction-case thermal resistance.
    pub fn junction_temperature(&self) -> f64 {
        self.effective_case_temperature() + self.operating_power * self.theta_jc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_junction_temperature() {
        let profile = StressProfile {
            case_temperature: 40.0,
            operating_power: 0.5,
            theta_jc: 30.0,
            ..Default::default()
        };
        assert!((profile.junction_temperature() - 55.0).abs() < 1e-12);
    }

    #[test]
    fn test_case_temperature_falls_back_to_ambient() {
        let profile = StressProfile {
            ambient_temperature: 30.0,
            case_temperature: 0.0,
            ..Default::default()
        };
        assert_eq!(profile.effective_case_temperature(), 30.0);
        assert_eq!(profile.junction_temperature(), 30.0);
    }

    #[test]
    fn test_default_profile_is_ground_benign_full_duty() {
        let profile = StressProfile::default();
        assert_eq!(profile.environment_active, 1);
        assert_eq!(profile.duty_cycle, 100.0);
        assert_eq!(profile.quantity, 1);
        assert_eq!(profile.mult_adj_factor, 1.0);
    }

    #[test]
    fn test_yaml_round_trip_with_partial_fields() {
        let yaml = "rated_voltage: 200.0\nvoltage_dc: 10.0\nenvironment_active: 5";
        let profile: StressProfile = serde_yml::from_str(yaml).unwrap();
        assert_eq!(profile.rated_voltage, 200.0);
        assert_eq!(profile.environment_active, 5);
        assert_eq!(profile.duty_cycle, 100.0);
    }
}
