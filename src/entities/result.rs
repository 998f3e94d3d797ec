//! Calculation result returned to the caller

use serde::Serialize;

use crate::entities::model::HazardRateModel;

/// Immutable result of one component calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HazardRateResult {
    /// Active hazard rate, scaled to the configured display multiplier
    pub hazard_rate_active: f64,
    /// Dormant (storage) hazard rate derived from the active rate
    pub hazard_rate_dormant: f64,

    /// Operating voltage over rated voltage
    pub voltage_ratio: f64,
    /// Operating current over rated current
    pub current_ratio: f64,
    /// Operating power over rated power
    pub power_ratio: f64,

    /// True iff any derating limit was violated
    pub overstressed: bool,
    /// Numbered violation descriptions, in evaluation order
    pub reasons: Vec<String>,

    /// The resolved factor map, for audit
    pub model: HazardRateModel,
}
