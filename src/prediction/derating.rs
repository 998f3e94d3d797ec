//! Derating (overstress) evaluation
//!
//! Each family group carries a pair of limit vectors, one for harsh and
//! one for benign environments. A stress ratio above its limit, or a
//! thermal margin below its limit, appends a numbered reason and marks
//! the part overstressed. Checks run in a fixed order: current, power,
//! voltage, thermal margin, maximum temperature.

use crate::entities::family::ComponentFamily;
use crate::entities::profile::StressProfile;
use crate::prediction::inductor;
use crate::prediction::StressRatios;

/// Ground benign, ground fixed, naval sheltered, and space flight count
/// as benign; every other active environment is harsh.
const BENIGN_ENVIRONMENTS: [usize; 4] = [1, 2, 4, 11];

/// Outcome of the derating check for one component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeratingVerdict {
    pub overstressed: bool,
    pub reasons: Vec<String>,
}

/// Ratio limits (exceed to violate) and thermal limits (margin below to
/// violate) for one family group in one environment class.
#[derive(Debug, Clone, Copy, Default)]
struct Limits {
    current: Option<f64>,
    power: Option<f64>,
    voltage: Option<f64>,
    /// Minimum margin in C between the thermal reference and the rated
    /// maximum temperature
    delta_t: Option<f64>,
    /// Maximum allowed reference temperature in C
    max_temp: Option<f64>,
}

/// The temperature compared against the delta-t and max-temp limits.
enum ThermalReference {
    Junction,
    HotSpot,
    Case,
}

/// Evaluate every applicable derating limit for the component.
pub fn evaluate(
    family: &ComponentFamily,
    profile: &StressProfile,
    ratios: &StressRatios,
) -> DeratingVerdict {
    let harsh = !BENIGN_ENVIRONMENTS.contains(&profile.environment_active);
    let limits = limits_for(family, harsh);
    let env_name = if harsh { "harsh" } else { "benign" };

    let (reference, reference_name) = match thermal_reference(family) {
        ThermalReference::Junction => (profile.junction_temperature(), "Junction"),
        ThermalReference::HotSpot => match family {
            ComponentFamily::Inductor(params) => {
                (inductor::hot_spot_temperature(params, profile), "Hot spot")
            }
            _ => (profile.effective_case_temperature(), "Operating"),
        },
        ThermalReference::Case => (profile.effective_case_temperature(), "Operating"),
    };

    let mut verdict = DeratingVerdict::default();

    if let Some(limit) = limits.current {
        if ratios.current > limit {
            push(
                &mut verdict,
                format!(
                    "Operating current > {:.1}% rated current in {} environment.",
                    limit * 100.0,
                    env_name
                ),
            );
        }
    }

    if let Some(limit) = limits.power {
        if ratios.power > limit {
            push(
                &mut verdict,
                format!(
                    "Operating power > {:.1}% rated power in {} environment.",
                    limit * 100.0,
                    env_name
                ),
            );
        }
    }

    if matches!(family, ComponentFamily::IntegratedCircuit(_)) {
        // Supply rails derate in both directions, in every environment.
        if profile.rated_voltage > 0.0 {
            if ratios.voltage > 1.05 {
                push(
                    &mut verdict,
                    "Operating voltage > 105.0% rated voltage.".to_string(),
                );
            } else if ratios.voltage < 0.95 {
                push(
                    &mut verdict,
                    "Operating voltage < 95.0% rated voltage.".to_string(),
                );
            }
        }
    } else if let Some(limit) = limits.voltage {
        if ratios.voltage > limit {
            push(
                &mut verdict,
                format!(
                    "Operating voltage > {:.1}% rated voltage in {} environment.",
                    limit * 100.0,
                    env_name
                ),
            );
        }
    }

    if let Some(limit) = limits.delta_t {
        if profile.rated_max_temperature - reference < limit {
            push(
                &mut verdict,
                format!(
                    "{} temperature within {:.1}C of maximum rated temperature in {} environment.",
                    reference_name, limit, env_name
                ),
            );
        }
    }

    if let Some(limit) = limits.max_temp {
        if reference > limit {
            push(
                &mut verdict,
                format!(
                    "{} temperature > {:.1}C limit in {} environment.",
                    reference_name, limit, env_name
                ),
            );
        }
    }

    verdict
}

fn push(verdict: &mut DeratingVerdict, text: String) {
    verdict.overstressed = true;
    let index = verdict.reasons.len() + 1;
    verdict.reasons.push(format!("{index}. {text}"));
}

fn thermal_reference(family: &ComponentFamily) -> ThermalReference {
    match family {
        ComponentFamily::IntegratedCircuit(_) | ComponentFamily::Semiconductor(_) => {
            ThermalReference::Junction
        }
        ComponentFamily::Inductor(_) => ThermalReference::HotSpot,
        _ => ThermalReference::Case,
    }
}

fn limits_for(family: &ComponentFamily, harsh: bool) -> Limits {
    match family {
        ComponentFamily::IntegratedCircuit(_) => Limits {
            current: Some(if harsh { 0.8 } else { 0.9 }),
            power: Some(1.0),
            // Voltage handled by the two-sided supply rail check.
            voltage: None,
            delta_t: None,
            max_temp: Some(125.0),
        },
        ComponentFamily::Semiconductor(_) => Limits {
            current: Some(1.0),
            power: Some(if harsh { 0.7 } else { 0.9 }),
            voltage: Some(1.0),
            delta_t: None,
            max_temp: Some(125.0),
        },
        ComponentFamily::Resistor(_) => Limits {
            current: Some(1.0),
            power: Some(if harsh { 0.5 } else { 0.9 }),
            voltage: Some(1.0),
            delta_t: None,
            max_temp: Some(125.0),
        },
        ComponentFamily::Capacitor(_) => Limits {
            current: Some(1.0),
            power: Some(1.0),
            voltage: Some(if harsh { 0.6 } else { 0.9 }),
            delta_t: if harsh { Some(10.0) } else { Some(0.0) },
            max_temp: Some(125.0),
        },
        ComponentFamily::Inductor(_) => Limits {
            current: Some(if harsh { 0.6 } else { 0.9 }),
            power: Some(1.0),
            voltage: Some(if harsh { 0.5 } else { 0.9 }),
            delta_t: if harsh { Some(15.0) } else { Some(0.0) },
            max_temp: Some(125.0),
        },
        ComponentFamily::Relay(_) | ComponentFamily::Switch(_) => Limits {
            current: Some(if harsh { 0.75 } else { 0.9 }),
            power: Some(1.0),
            voltage: Some(1.0),
            delta_t: None,
            max_temp: Some(125.0),
        },
        ComponentFamily::Connector(_) => Limits {
            current: Some(if harsh { 0.7 } else { 0.9 }),
            power: Some(1.0),
            voltage: Some(if harsh { 0.7 } else { 0.9 }),
            delta_t: if harsh { Some(25.0) } else { Some(0.0) },
            max_temp: Some(125.0),
        },
        ComponentFamily::Crystal(_) | ComponentFamily::Filter(_) | ComponentFamily::Meter(_) => {
            Limits {
                current: Some(1.0),
                power: Some(1.0),
                voltage: Some(1.0),
                delta_t: None,
                max_temp: Some(125.0),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::family::{InductorKind, InductorParams, InsulationClass};

    fn coil() -> ComponentFamily {
        ComponentFamily::Inductor(InductorParams {
            kind: InductorKind::Coil,
            style: 1,
            quality: 1,
            insulation: InsulationClass::Class130,
            power_loss: 0.0,
            radiating_area: 0.0,
            weight: 0.0,
        })
    }

    fn harsh_profile() -> StressProfile {
        StressProfile {
            environment_active: 3,
            rated_voltage: 100.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_voltage_just_below_harsh_limit_passes() {
        let ratios = StressRatios {
            voltage: 0.50,
            ..Default::default()
        };
        let verdict = evaluate(&coil(), &harsh_profile(), &ratios);
        assert!(!verdict.overstressed);
        assert!(verdict.reasons.is_empty());
    }

    #[test]
    fn test_voltage_above_harsh_limit_adds_one_reason() {
        let ratios = StressRatios {
            voltage: 0.51,
            ..Default::default()
        };
        let verdict = evaluate(&coil(), &harsh_profile(), &ratios);
        assert!(verdict.overstressed);
        assert_eq!(
            verdict.reasons,
            vec!["1. Operating voltage > 50.0% rated voltage in harsh environment.".to_string()]
        );
    }

    #[test]
    fn test_benign_environment_relaxes_the_limit() {
        let mut profile = harsh_profile();
        profile.environment_active = 2;
        let ratios = StressRatios {
            voltage: 0.51,
            ..Default::default()
        };
        let verdict = evaluate(&coil(), &profile, &ratios);
        assert!(!verdict.overstressed);
    }

    #[test]
    fn test_reasons_are_numbered_in_check_order() {
        let ratios = StressRatios {
            voltage: 0.95,
            current: 0.95,
            power: 0.0,
        };
        let verdict = evaluate(&coil(), &harsh_profile(), &ratios);
        assert_eq!(verdict.reasons.len(), 2);
        assert!(verdict.reasons[0].starts_with("1. Operating current"));
        assert!(verdict.reasons[1].starts_with("2. Operating voltage"));
    }

    #[test]
    fn test_ic_supply_rail_check_is_two_sided() {
        use crate::entities::family::{IcKind, IcParams, IcTechnology};
        let family = ComponentFamily::IntegratedCircuit(IcParams {
            kind: IcKind::Logic {
                n_gates: 100,
                technology: IcTechnology::Mos,
            },
            quality: 2,
            n_active_pins: 14,
            package: 1,
            years_in_production: 5.0,
        });
        let profile = harsh_profile();

        let low = StressRatios {
            voltage: 0.90,
            ..Default::default()
        };
        let verdict = evaluate(&family, &profile, &low);
        assert_eq!(
            verdict.reasons,
            vec!["1. Operating voltage < 95.0% rated voltage.".to_string()]
        );

        let nominal = StressRatios {
            voltage: 1.0,
            ..Default::default()
        };
        assert!(!evaluate(&family, &profile, &nominal).overstressed);
    }

    #[test]
    fn test_inductor_thermal_margin_uses_hot_spot() {
        let family = ComponentFamily::Inductor(InductorParams {
            kind: InductorKind::Transformer,
            style: 3,
            quality: 1,
            insulation: InsulationClass::Class130,
            power_loss: 10.0,
            radiating_area: 4.0,
            weight: 0.0,
        });
        // Hot spot = 25 + 1.1 * (125 * 10 / 4) well above any margin.
        let profile = StressProfile {
            environment_active: 3,
            rated_max_temperature: 130.0,
            ..Default::default()
        };
        let verdict = evaluate(&family, &profile, &StressRatios::default());
        assert!(verdict.overstressed);
        assert!(verdict
            .reasons
            .iter()
            .any(|r| r.contains("Hot spot temperature")));
    }

    #[test]
    fn test_junction_over_max_temp() {
        use crate::entities::family::SemiconductorParams;
        let family = ComponentFamily::Semiconductor(SemiconductorParams::Transistor {
            application: 1,
            quality: 3,
        });
        let profile = StressProfile {
            environment_active: 3,
            case_temperature: 100.0,
            theta_jc: 70.0,
            operating_power: 0.5,
            rated_power: 1.0,
            ..Default::default()
        };
        // Tj = 100 + 0.5 * 70 = 135.
        let ratios = StressRatios {
            power: 0.5,
            ..Default::default()
        };
        let verdict = evaluate(&family, &profile, &ratios);
        assert!(verdict.overstressed);
        assert!(verdict.reasons[0].contains("Junction temperature > 125.0C"));
    }
}
