//! Binary hierarchy tree built by the placer.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Area;

/// A node of the cluster hierarchy.
///
/// `Internal` owns both children. `angle` is the span the merge subtends,
/// `radius` the circle on which the merge (and any leaf directly below it)
/// sits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureNode {
    Leaf(Area),
    Internal {
        left: Box<StructureNode>,
        right: Box<StructureNode>,
        angle: f64,
        radius: f64,
    },
}

impl StructureNode {
    pub fn leaf(area: impl Into<Area>) -> Self {
        Self::Leaf(area.into())
    }

    pub fn join(left: StructureNode, right: StructureNode, angle: f64, radius: f64) -> Self {
        Self::Internal {
            left: Box::new(left),
            right: Box::new(right),
            angle,
            radius,
        }
    }

    /// Radius of an internal node; `None` for a bare leaf.
    pub fn radius(&self) -> Option<f64> {
        match self {
            Self::Leaf(_) => None,
            Self::Internal { radius, .. } => Some(*radius),
        }
    }

    /// Leaves in left-to-right order.
    pub fn leaves(&self) -> Vec<&Area> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Area>) {
        match self {
            Self::Leaf(area) => out.push(area),
            Self::Internal { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    pub fn contains(&self, area: &str) -> bool {
        match self {
            Self::Leaf(a) => a == area,
            Self::Internal { left, right, .. } => left.contains(area) || right.contains(area),
        }
    }

    /// Number of internal levels on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl fmt::Display for StructureNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(area) => write!(f, "{area}"),
            Self::Internal { left, right, .. } => write!(f, "[{left}, {right}]"),
        }
    }
}
