//! Hazard rate model - the audit trail of a calculation
//!
//! Every correction factor resolved during a calculation is recorded by
//! name so a caller can render "how was this computed" without
//! re-deriving it. The map preserves insertion order and is never
//! mutated after the calculation returns it.

use serde::Serialize;

/// Named factor map plus the resolved base model result
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HazardRateModel {
    factors: Vec<(String, f64)>,
    /// The family equation's result before adjustment, duty cycle,
    /// quantity, and display scaling are applied
    pub model_result: f64,
}

impl HazardRateModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a named factor. Re-recording a name overwrites its value.
    pub fn record(&mut self, name: &str, value: f64) {
        if let Some(entry) = self.factors.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.factors.push((name.to_string(), value));
        }
    }

    /// Look up a factor by name.
    pub fn factor(&self, name: &str) -> Option<f64> {
        self.factors
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Factors in the order they were resolved.
    pub fn factors(&self) -> impl Iterator<Item = (&str, f64)> {
        self.factors.iter().map(|(n, v)| (n.as_str(), *v))
    }
}
