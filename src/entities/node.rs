//! Hardware composition tree
//!
//! A [`HardwareNode`] is either a leaf component with a family and a
//! stress profile, or an assembly owning a list of children. Parents own
//! their children outright; identity is the caller-assigned `id` string,
//! which also tags calculation failures during rollup.

use serde::{Deserialize, Serialize};

use crate::entities::family::ComponentFamily;
use crate::entities::profile::{PredictionMethod, StressProfile};

/// A node in the hardware tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareNode {
    /// Caller-assigned identifier, unique within the tree
    pub id: String,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Number of identical instances of this node in its parent
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Multiplicative hazard rate adjustment applied at this node
    #[serde(default = "default_mult_adj")]
    pub mult_adj_factor: f64,

    /// Additive hazard rate adjustment applied at this node
    #[serde(default)]
    pub add_adj_factor: f64,

    /// Unit cost, rolled up into parent totals
    #[serde(default)]
    pub unit_cost: f64,

    /// Software hazard rate assessed against this node
    #[serde(default)]
    pub software_hazard_rate: f64,

    #[serde(flatten)]
    pub kind: NodeKind,
}

fn default_quantity() -> u32 {
    1
}

fn default_mult_adj() -> f64 {
    1.0
}

/// Leaf component or internal assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum NodeKind {
    /// A leaf part computed by the prediction engine
    Component {
        component: ComponentFamily,
        profile: StressProfile,
        #[serde(default)]
        method: PredictionMethod,
    },
    /// An internal node aggregating its children
    Assembly {
        #[serde(default)]
        children: Vec<HardwareNode>,
    },
}

impl HardwareNode {
    /// Number of leaf components in this subtree.
    pub fn part_count(&self) -> usize {
        match &self.kind {
            NodeKind::Component { .. } => 1,
            NodeKind::Assembly { children } => children.iter().map(HardwareNode::part_count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::family::ResistorParams;

    fn leaf(id: &str) -> HardwareNode {
        HardwareNode {
            id: id.to_string(),
            name: None,
            quantity: 1,
            mult_adj_factor: 1.0,
            add_adj_factor: 0.0,
            unit_cost: 0.0,
            software_hazard_rate: 0.0,
            kind: NodeKind::Component {
                component: ComponentFamily::Resistor(ResistorParams::default()),
                profile: StressProfile::default(),
                method: PredictionMethod::PartsCount,
            },
        }
    }

    #[test]
    fn test_part_count_walks_the_tree() {
        let tree = HardwareNode {
            id: "root".to_string(),
            name: None,
            quantity: 1,
            mult_adj_factor: 1.0,
            add_adj_factor: 0.0,
            unit_cost: 0.0,
            software_hazard_rate: 0.0,
            kind: NodeKind::Assembly {
                children: vec![
                    leaf("r1"),
                    HardwareNode {
                        id: "sub".to_string(),
                        name: None,
                        quantity: 1,
                        mult_adj_factor: 1.0,
                        add_adj_factor: 0.0,
                        unit_cost: 0.0,
                        software_hazard_rate: 0.0,
                        kind: NodeKind::Assembly {
                            children: vec![leaf("r2"), leaf("r3")],
                        },
                    },
                ],
            },
        };
        assert_eq!(tree.part_count(), 3);
    }

    #[test]
    fn test_tree_yaml_deserializes_with_defaults() {
        let yaml = r#"
id: board
node: assembly
children:
  - id: r1
    node: component
    method: parts_count
    component:
      family: resistor
      quality: 1
      resistance: 100.0
    profile:
      environment_active: 2
"#;
        let tree: HardwareNode = serde_yml::from_str(yaml).unwrap();
        assert_eq!(tree.quantity, 1);
        assert_eq!(tree.mult_adj_factor, 1.0);
        assert_eq!(tree.part_count(), 1);
    }
}
