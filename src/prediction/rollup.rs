//! Hardware tree rollup
//!
//! Post-order walk of a [`HardwareNode`] tree. Leaves run the
//! prediction engine; assemblies sum their children's active, dormant,
//! and software hazard rates plus cost and power, then apply their own
//! adjustment factors to the total. A failing leaf is recorded against
//! its node id and removed from the sums without aborting its
//! siblings; every enclosing assembly is marked partial with the
//! number of failures in its subtree.

use serde::{Serialize, Serializer};

use crate::core::config::EngineConfig;
use crate::core::error::CalcError;
use crate::entities::node::{HardwareNode, NodeKind};
use crate::prediction;

/// Aggregated hazard rates and derived metrics for one node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSummary {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Leaf components in this subtree
    pub part_count: usize,

    /// Active hazard rate in failures per hour
    pub hazard_rate_active: f64,
    pub hazard_rate_dormant: f64,
    pub hazard_rate_software: f64,

    /// Mean time between failures in hours; absent while the active
    /// rate is zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtbf: Option<f64>,
    /// Probability of surviving the configured mission time
    pub reliability: f64,

    /// Rolled-up cost of this subtree
    pub cost: f64,
    /// Rolled-up operating power in W
    pub power: f64,

    /// True iff any component in this subtree violated a derating limit
    pub overstressed: bool,
    /// Derating violations of this node itself (leaves only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,

    pub status: AggregateStatus,
}

/// Whether a node's aggregate covers its whole subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AggregateStatus {
    Complete,
    /// Some descendants failed to compute and are missing from the sums
    Partial { children_failed: usize },
}

/// A calculation failure, tagged with the node it occurred at
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeFailure {
    pub node_id: String,
    #[serde(serialize_with = "error_as_string")]
    pub error: CalcError,
}

fn error_as_string<S: Serializer>(error: &CalcError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&error.to_string())
}

/// Result of rolling up a hardware tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollupReport {
    /// Per-node aggregates in post-order; the root is last
    pub summaries: Vec<NodeSummary>,
    pub failures: Vec<NodeFailure>,
}

impl RollupReport {
    /// The root aggregate, absent only when the root itself was a leaf
    /// that failed.
    pub fn root(&self) -> Option<&NodeSummary> {
        self.summaries.last()
    }
}

/// Compute aggregates for every node of the tree.
pub fn rollup(tree: &HardwareNode, config: &EngineConfig) -> RollupReport {
    let mut report = RollupReport {
        summaries: Vec::new(),
        failures: Vec::new(),
    };
    visit(tree, config, &mut report);
    report
}

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    active: f64,
    dormant: f64,
    software: f64,
    cost: f64,
    power: f64,
    overstressed: bool,
}

fn visit(node: &HardwareNode, config: &EngineConfig, report: &mut RollupReport) -> Option<Totals> {
    let scale = node.quantity as f64 * node.mult_adj_factor;
    match &node.kind {
        NodeKind::Component {
            component,
            profile,
            method,
        } => match prediction::calculate(component, profile, *method, config) {
            Ok(result) => {
                let totals = Totals {
                    active: (result.hazard_rate_active + node.add_adj_factor) * scale,
                    dormant: result.hazard_rate_dormant * scale,
                    software: node.software_hazard_rate * scale,
                    cost: node.unit_cost * node.quantity as f64,
                    power: profile.operating_power * node.quantity as f64,
                    overstressed: result.overstressed,
                };
                report.summaries.push(summarize(
                    node,
                    totals,
                    result.reasons,
                    AggregateStatus::Complete,
                    config,
                ));
                Some(totals)
            }
            Err(error) => {
                report.failures.push(NodeFailure {
                    node_id: node.id.clone(),
                    error,
                });
                None
            }
        },
        NodeKind::Assembly { children } => {
            let failures_before = report.failures.len();
            let mut sum = Totals::default();
            for child in children {
                if let Some(child_totals) = visit(child, config, report) {
                    sum.active += child_totals.active;
                    sum.dormant += child_totals.dormant;
                    sum.software += child_totals.software;
                    sum.cost += child_totals.cost;
                    sum.power += child_totals.power;
                    sum.overstressed |= child_totals.overstressed;
                }
            }
            let failed = report.failures.len() - failures_before;

            let totals = Totals {
                active: (sum.active + node.add_adj_factor) * scale,
                dormant: sum.dormant * scale,
                software: (sum.software + node.software_hazard_rate) * scale,
                cost: sum.cost * node.quantity as f64,
                power: sum.power * node.quantity as f64,
                overstressed: sum.overstressed,
            };
            let status = if failed == 0 {
                AggregateStatus::Complete
            } else {
                AggregateStatus::Partial {
                    children_failed: failed,
                }
            };
            report
                .summaries
                .push(summarize(node, totals, Vec::new(), status, config));
            Some(totals)
        }
    }
}

fn summarize(
    node: &HardwareNode,
    totals: Totals,
    reasons: Vec<String>,
    status: AggregateStatus,
    config: &EngineConfig,
) -> NodeSummary {
    NodeSummary {
        id: node.id.clone(),
        name: node.name.clone(),
        part_count: node.part_count(),
        hazard_rate_active: totals.active,
        hazard_rate_dormant: totals.dormant,
        hazard_rate_software: totals.software,
        mtbf: mtbf(totals.active),
        reliability: (-totals.active * config.mission_time).exp(),
        cost: totals.cost,
        power: totals.power,
        overstressed: totals.overstressed,
        reasons,
        status,
    }
}

fn mtbf(hazard_rate: f64) -> Option<f64> {
    if hazard_rate > 0.0 {
        Some(1.0 / hazard_rate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::family::{ComponentFamily, ResistorParams};
    use crate::entities::profile::{PredictionMethod, StressProfile};

    fn resistor_leaf(id: &str, quality: usize) -> HardwareNode {
        HardwareNode {
            id: id.to_string(),
            name: None,
            quantity: 1,
            mult_adj_factor: 1.0,
            add_adj_factor: 0.0,
            unit_cost: 0.10,
            software_hazard_rate: 0.0,
            kind: NodeKind::Component {
                component: ComponentFamily::Resistor(ResistorParams {
                    quality,
                    resistance: 1000.0,
                }),
                profile: StressProfile {
                    environment_active: 2,
                    operating_power: 0.05,
                    rated_power: 0.25,
                    ..Default::default()
                },
                method: PredictionMethod::PartsCount,
            },
        }
    }

    fn assembly(id: &str, children: Vec<HardwareNode>) -> HardwareNode {
        HardwareNode {
            id: id.to_string(),
            name: None,
            quantity: 1,
            mult_adj_factor: 1.0,
            add_adj_factor: 0.0,
            unit_cost: 0.0,
            software_hazard_rate: 0.0,
            kind: NodeKind::Assembly { children },
        }
    }

    #[test]
    fn test_two_leaf_additivity() {
        let config = EngineConfig::default();
        let tree = assembly(
            "board",
            vec![resistor_leaf("r1", 1), resistor_leaf("r2", 1)],
        );
        let report = rollup(&tree, &config);

        assert_eq!(report.summaries.len(), 3);
        assert!(report.failures.is_empty());
        let root = report.root().unwrap();
        assert_eq!(root.id, "board");
        let leaf_rate = report.summaries[0].hazard_rate_active;
        assert!((root.hazard_rate_active - 2.0 * leaf_rate).abs() < 1e-18);
        assert!((root.cost - 0.20).abs() < 1e-12);
        assert!((root.power - 0.10).abs() < 1e-12);
        assert_eq!(root.status, AggregateStatus::Complete);
    }

    #[test]
    fn test_failed_leaf_does_not_abort_siblings() {
        let config = EngineConfig::default();
        // Quality 9 is out of range for the resistor piQ table.
        let tree = assembly(
            "board",
            vec![resistor_leaf("bad", 9), resistor_leaf("good", 1)],
        );
        let report = rollup(&tree, &config);

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].node_id, "bad");
        let root = report.root().unwrap();
        assert_eq!(
            root.status,
            AggregateStatus::Partial { children_failed: 1 }
        );
        let good = report
            .summaries
            .iter()
            .find(|s| s.id == "good")
            .unwrap();
        assert!((root.hazard_rate_active - good.hazard_rate_active).abs() < 1e-18);
    }

    #[test]
    fn test_subtree_failures_mark_every_enclosing_assembly() {
        let config = EngineConfig::default();
        let tree = assembly(
            "system",
            vec![assembly("board", vec![resistor_leaf("bad", 9)])],
        );
        let report = rollup(&tree, &config);

        for id in ["board", "system"] {
            let summary = report.summaries.iter().find(|s| s.id == id).unwrap();
            assert_eq!(
                summary.status,
                AggregateStatus::Partial { children_failed: 1 },
                "{id}"
            );
        }
    }

    #[test]
    fn test_mtbf_and_mission_reliability() {
        let config = EngineConfig {
            mission_time: 1000.0,
            ..Default::default()
        };
        let report = rollup(&resistor_leaf("r1", 1), &config);
        let summary = report.root().unwrap();

        let rate = summary.hazard_rate_active;
        assert!(rate > 0.0);
        assert!((summary.mtbf.unwrap() - 1.0 / rate).abs() < 1e-6);
        assert!((summary.reliability - (-rate * 1000.0).exp()).abs() < 1e-15);
        assert!(summary.reliability < 1.0);
    }

    #[test]
    fn test_assembly_adjustment_factors() {
        let config = EngineConfig::default();
        let mut tree = assembly("rack", vec![resistor_leaf("r1", 1)]);
        let base = rollup(&tree, &config).root().unwrap().hazard_rate_active;

        tree.quantity = 2;
        tree.mult_adj_factor = 1.5;
        let adjusted = rollup(&tree, &config).root().unwrap().hazard_rate_active;
        assert!((adjusted - base * 3.0).abs() < 1e-18);
    }

    #[test]
    fn test_overstress_bubbles_up_without_reasons() {
        let config = EngineConfig::default();
        let mut hot = resistor_leaf("r1", 1);
        if let NodeKind::Component { profile, .. } = &mut hot.kind {
            // 60% of rated power in a harsh environment.
            profile.environment_active = 3;
            profile.operating_power = 0.15;
        }
        let tree = assembly("board", vec![hot]);
        let report = rollup(&tree, &config);

        let root = report.root().unwrap();
        assert!(root.overstressed);
        assert!(root.reasons.is_empty());
        let leaf = report.summaries.iter().find(|s| s.id == "r1").unwrap();
        assert!(!leaf.reasons.is_empty());
    }

    #[test]
    fn test_zero_rate_has_no_mtbf() {
        assert_eq!(mtbf(0.0), None);
        assert_eq!(mtbf(2.0), Some(0.5));
    }
}
