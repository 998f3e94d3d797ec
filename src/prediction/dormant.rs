//! Dormant (non-operating) hazard rate conversion
//!
//! MIL-HDBK-217F Appendix A gives active-to-passive conversion factors
//! by component class and by the pairing of the active environment with
//! the dormant (storage) environment. The dormant rate is the active
//! rate times the factor; unmapped pairings and unlisted families
//! convert to zero.

use crate::core::error::CalcError;
use crate::entities::family::{ComponentFamily, SemiconductorParams};
use crate::entities::profile::StressProfile;

/// Conversion factor rows by component class. Columns are the
/// active-to-dormant environment pairings: ground/ground,
/// airborne/airborne, airborne/ground, naval/naval, naval/ground,
/// space/space, space/ground, unmapped.
const CONVERSION: [[f64; 8]; 10] = [
    // integrated circuit
    [0.08, 0.06, 0.04, 0.06, 0.05, 0.10, 0.30, 0.0],
    // diode
    [0.04, 0.05, 0.01, 0.04, 0.03, 0.20, 0.80, 0.0],
    // transistor
    [0.05, 0.06, 0.02, 0.05, 0.03, 0.20, 1.00, 0.0],
    // capacitor
    [0.10, 0.10, 0.03, 0.10, 0.04, 0.20, 0.40, 0.0],
    // resistor
    [0.20, 0.06, 0.03, 0.10, 0.06, 0.50, 1.00, 0.0],
    // switch
    [0.40, 0.20, 0.10, 0.40, 0.20, 0.80, 1.00, 0.0],
    // relay
    [0.20, 0.20, 0.04, 0.30, 0.08, 0.40, 0.90, 0.0],
    // connector
    [0.005, 0.005, 0.003, 0.008, 0.003, 0.02, 0.03, 0.0],
    // circuit board
    [0.04, 0.02, 0.01, 0.03, 0.01, 0.08, 0.20, 0.0],
    // transformer / inductive device
    [0.20, 0.20, 0.20, 0.30, 0.30, 0.50, 1.00, 0.0],
];

/// Active-to-dormant conversion factor for the component's class and
/// environment pairing.
pub fn conversion_factor(
    family: &ComponentFamily,
    profile: &StressProfile,
) -> Result<f64, CalcError> {
    if !(1..=4).contains(&profile.environment_dormant) {
        return Err(CalcError::InvalidIndex {
            family: family.name(),
            table: "environment_dormant",
            index: profile.environment_dormant,
        });
    }
    if !(1..=14).contains(&profile.environment_active) {
        return Err(CalcError::InvalidIndex {
            family: family.name(),
            table: "environment_active",
            index: profile.environment_active,
        });
    }

    let Some(row) = class_row(family) else {
        return Ok(0.0);
    };
    let column = pairing_column(profile.environment_active, profile.environment_dormant);
    Ok(CONVERSION[row][column])
}

/// Component class row, None for families Appendix A does not list.
fn class_row(family: &ComponentFamily) -> Option<usize> {
    match family {
        ComponentFamily::IntegratedCircuit(_) => Some(0),
        ComponentFamily::Semiconductor(params) => match params {
            SemiconductorParams::DiodeLf { .. } | SemiconductorParams::DiodeHf { .. } => Some(1),
            SemiconductorParams::Transistor { .. } => Some(2),
        },
        ComponentFamily::Capacitor(_) => Some(3),
        ComponentFamily::Resistor(_) => Some(4),
        ComponentFamily::Switch(_) => Some(5),
        ComponentFamily::Relay(_) => Some(6),
        ComponentFamily::Connector(_) => Some(7),
        ComponentFamily::Inductor(_) => Some(9),
        ComponentFamily::Crystal(_) | ComponentFamily::Filter(_) | ComponentFamily::Meter(_) => {
            None
        }
    }
}

/// Map the (active environment, dormant environment) pair to a
/// conversion table column. Dormant environments are 1 ground, 2 naval,
/// 3 airborne, 4 space.
fn pairing_column(active: usize, dormant: usize) -> usize {
    match active {
        1..=3 => match dormant {
            1 => 0,
            _ => 7,
        },
        4..=5 => match dormant {
            2 => 3,
            1 => 4,
            _ => 7,
        },
        6..=10 => match dormant {
            3 => 1,
            1 => 2,
            _ => 7,
        },
        11 => match dormant {
            4 => 5,
            1 => 6,
            _ => 7,
        },
        _ => 7,
    }
}
