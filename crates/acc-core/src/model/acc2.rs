//! Output types of the ACC2 transform.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Area, Polar};

/// Reference to a child of a merge level: an area or an earlier level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRef {
    Area(Area),
    Level(usize),
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Area(area) => write!(f, "{area}"),
            Self::Level(order) => write!(f, "level#{order}"),
        }
    }
}

/// One merge of the standard average-linkage pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeLevel {
    pub order: usize,
    pub child1_id: NodeRef,
    pub child2_id: NodeRef,
    /// Sorted.
    pub members: Vec<Area>,
    pub local_sim: f64,
    pub global_sim: f64,
    pub diameter: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergePoint {
    pub order: usize,
    pub radius: f64,
    /// Signed compass angle in `(-180, 180]`.
    pub angle: f64,
    pub children: [NodeRef; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConnectionLine {
    Radial { from: Polar, to: Polar },
    Arc {
        radius: f64,
        angle_start: f64,
        angle_end: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaPosition {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub angle: f64,
}

/// Everything the ACC2 transform produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Acc2Bundle {
    pub positions: BTreeMap<Area, AreaPosition>,
    pub levels: Vec<MergeLevel>,
    pub merge_points: Vec<MergePoint>,
    pub lines: Vec<ConnectionLine>,
    /// Sorted, unique circle radii.
    pub circles: Vec<f64>,
}

/// Optional post-processing of the ACC2 geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Acc2Options {
    /// Compress area angles into this total span (degrees).
    pub max_angle: Option<f64>,
    /// Rescale circle diameters into `(min, max)`.
    pub diameter_range: Option<(f64, f64)>,
}

impl Acc2Options {
    pub fn with_max_angle(mut self, max_angle: f64) -> Self {
        self.max_angle = Some(max_angle);
        self
    }

    pub fn with_diameter_range(mut self, min: f64, max: f64) -> Self {
        self.diameter_range = Some((min, max));
        self
    }
}
