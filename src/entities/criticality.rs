//! FMEA criticality - Risk Priority Number calculation
//!
//! RPN = severity x occurrence x detection, computed identically for the
//! current ratings and the post-mitigation ("new") ratings. Inputs are
//! checked against [1, 10]; the product is self-checked against
//! [1, 1000] as a guard on the engine's own arithmetic.

use serde::{Deserialize, Serialize};

use crate::core::error::CalcError;

/// Severity/occurrence/detection ratings, current and post-mitigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalityInputs {
    /// Severity of the failure effect (1 = none, 10 = hazardous)
    pub severity: u32,
    /// Likelihood of occurrence (1 = remote, 10 = inevitable)
    pub occurrence: u32,
    /// Chance the failure escapes detection (1 = certain detection)
    pub detection: u32,

    /// Severity after mitigation
    pub new_severity: u32,
    /// Occurrence after mitigation
    pub new_occurrence: u32,
    /// Detection after mitigation
    pub new_detection: u32,
}

/// Risk level banding of an RPN value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Band an RPN: 1-50 low, 51-150 medium, 151-400 high, above critical.
    pub fn from_rpn(rpn: u32) -> Self {
        match rpn {
            0..=50 => RiskLevel::Low,
            51..=150 => RiskLevel::Medium,
            151..=400 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Critical => write!(f, "critical"),
        }
    }
}

/// Computed RPNs with their risk bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CriticalityResult {
    pub rpn: u32,
    pub risk_level: RiskLevel,
    pub new_rpn: u32,
    pub new_risk_level: RiskLevel,
}

impl CriticalityInputs {
    /// Calculate the current and post-mitigation RPNs.
    pub fn calculate(&self) -> Result<CriticalityResult, CalcError> {
        let rpn = checked_rpn(self.severity, self.occurrence, self.detection, "")?;
        let new_rpn = checked_rpn(
            self.new_severity,
            self.new_occurrence,
            self.new_detection,
            "new_",
        )?;
        Ok(CriticalityResult {
            rpn,
            risk_level: RiskLevel::from_rpn(rpn),
            new_rpn,
            new_risk_level: RiskLevel::from_rpn(new_rpn),
        })
    }
}

fn check_rating(field: &str, prefix: &str, value: u32) -> Result<(), CalcError> {
    if !(1..=10).contains(&value) {
        return Err(CalcError::OutOfRange {
            field: format!("{prefix}{field}"),
            value: value as f64,
            min: 1.0,
            max: 10.0,
        });
    }
    Ok(())
}

fn checked_rpn(
    severity: u32,
    occurrence: u32,
    detection: u32,
    prefix: &str,
) -> Result<u32, CalcError> {
    check_rating("severity", prefix, severity)?;
    check_rating("occurrence", prefix, occurrence)?;
    check_rating("detection", prefix, detection)?;

    let rpn = severity * occurrence * detection;

    // Self-check on the engine's own arithmetic, not just the inputs.
    if !(1..=1000).contains(&rpn) {
        return Err(CalcError::OutOfRange {
            field: format!("{prefix}rpn"),
            value: rpn as f64,
            min: 1.0,
            max: 1000.0,
        });
    }
    Ok(rpn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(s: u32, o: u32, d: u32) -> CriticalityInputs {
        CriticalityInputs {
            severity: s,
            occurrence: o,
            detection: d,
            new_severity: 1,
            new_occurrence: 1,
            new_detection: 1,
        }
    }

    #[test]
    fn test_rpn_product() {
        let result = inputs(7, 5, 3).calculate().unwrap();
        assert_eq!(result.rpn, 105);
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.new_rpn, 1);
        assert_eq!(result.new_risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_rpn_lower_corner() {
        let result = inputs(1, 1, 1).calculate().unwrap();
        assert_eq!(result.rpn, 1);
    }

    #[test]
    fn test_rpn_upper_corner() {
        let result = inputs(10, 10, 10).calculate().unwrap();
        assert_eq!(result.rpn, 1000);
        assert_eq!(result.risk_level, RiskLevel::Critical);
    }

    #[test]
    fn test_zero_severity_rejected() {
        let err = inputs(0, 5, 5).calculate().unwrap_err();
        match err {
            CalcError::OutOfRange { field, value, .. } => {
                assert_eq!(field, "severity");
                assert_eq!(value, 0.0);
            }
            other => panic!("wrong error: {:?}", other),
        }
    }

    #[test]
    fn test_new_ratings_checked_with_prefix() {
        let mut bad = inputs(5, 5, 5);
        bad.new_detection = 11;
        let err = bad.calculate().unwrap_err();
        match err {
            CalcError::OutOfRange { field, .. } => assert_eq!(field, "new_detection"),
            other => panic!("wrong error: {:?}", other),
        }
    }

    #[test]
    fn test_risk_level_band_edges() {
        assert_eq!(RiskLevel::from_rpn(50), RiskLevel::Low);
        assert_eq!(RiskLevel::from_rpn(51), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_rpn(150), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_rpn(151), RiskLevel::High);
        assert_eq!(RiskLevel::from_rpn(400), RiskLevel::High);
        assert_eq!(RiskLevel::from_rpn(401), RiskLevel::Critical);
    }
}
