//! Engine data model
//!
//! The prediction engine works on plain immutable values:
//!
//! - [`StressProfile`] - operating/rated electrical and thermal stresses
//! - [`ComponentFamily`] - the closed set of supported component families,
//!   each variant carrying its family-specific parameters
//! - [`HazardRateModel`] - the named correction factors resolved during a
//!   calculation, kept for audit
//! - [`HazardRateResult`] - hazard rates, stress ratios, and the
//!   overstress verdict returned to the caller
//! - [`HardwareNode`] - a node in the hardware composition tree
//! - [`CriticalityInputs`] - FMEA severity/occurrence/detection ratings

pub mod criticality;
pub mod family;
pub mod model;
pub mod node;
pub mod profile;
pub mod result;

pub use criticality::{CriticalityInputs, CriticalityResult, RiskLevel};
pub use family::ComponentFamily;
pub use model::HazardRateModel;
pub use node::{HardwareNode, NodeKind};
pub use profile::{PredictionMethod, StressProfile};
pub use result::HazardRateResult;
