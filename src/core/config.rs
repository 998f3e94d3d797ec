//! Engine configuration
//!
//! Calculation-wide settings are carried in an explicit [`EngineConfig`]
//! value passed by parameter into every calculation, never read from a
//! global. The CLI can deserialize one from the input file; library
//! callers usually take the default.

use serde::{Deserialize, Serialize};

/// Configuration threaded through a calculation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Display-scale divisor applied to every final hazard rate.
    /// The conventional scale is failures per 10^6 hours.
    pub fr_multiplier: f64,

    /// Mission time in hours for reliability rollup metrics
    pub mission_time: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            fr_multiplier: 1_000_000.0,
            mission_time: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_is_failures_per_million_hours() {
        let config = EngineConfig::default();
        assert_eq!(config.fr_multiplier, 1e6);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: EngineConfig = serde_yml::from_str("fr_multiplier: 1.0").unwrap();
        assert_eq!(config.fr_multiplier, 1.0);
        assert_eq!(config.mission_time, 100.0);
    }
}
