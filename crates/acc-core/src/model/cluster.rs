//! A placed cluster: members, hierarchy, metrics and member coordinates.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{Area, Point, StructureNode};

/// Immutable result of one placement. A new value is produced on every
/// placement; callers drop the cluster it supersedes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub members: BTreeSet<Area>,
    pub structure: StructureNode,
    pub radius: f64,
    pub diameter: f64,
    /// Angular span of the outermost merge, in degrees, within `[0, 180]`.
    pub angle: f64,
    pub local_sim: f64,
    pub global_sim: f64,
    pub points: BTreeMap<Area, Point>,
}

impl Cluster {
    pub fn contains(&self, area: &str) -> bool {
        self.members.contains(area)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Position of a member, if placed.
    pub fn point(&self, area: &str) -> Option<Point> {
        self.points.get(area).copied()
    }
}
