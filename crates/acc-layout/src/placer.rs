//! Concentric-circle placement.
//!
//! `diameter = unit / global_sim` (or `unit × 100` when `global_sim <= 0`),
//! `radius = diameter / 2`, `angle = 180 × (1 - local_sim)`. Positions come
//! from walking the structure tree from the root, which always points north
//! (0°): at an internal node with direction `d`, the left child sits at
//! `d - angle/2` and the right child at `d + angle/2`. A leaf takes the
//! radius of the internal node that owns it, so a radius is fixed the
//! moment an area is placed.

use std::collections::{BTreeMap, BTreeSet};

use acc_core::constants::{DEGENERATE_DIAMETER_FACTOR, MAX_SPAN_DEGREES};
use acc_core::geometry::pol2cart;
use acc_core::{Area, Cluster, Point, StructureNode};

/// Diameter, radius and angular span for one merge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterMetrics {
    pub diameter: f64,
    pub radius: f64,
    pub angle: f64,
}

pub fn cluster_metrics(local_sim: f64, global_sim: f64, unit: f64) -> ClusterMetrics {
    let diameter = if global_sim > 0.0 {
        unit / global_sim
    } else {
        tracing::debug!(
            global_sim,
            unit,
            "non-positive global similarity, using degenerate diameter"
        );
        unit * DEGENERATE_DIAMETER_FACTOR
    };
    let angle = MAX_SPAN_DEGREES * (1.0 - local_sim.clamp(0.0, 1.0));
    ClusterMetrics {
        diameter,
        radius: diameter / 2.0,
        angle,
    }
}

/// Two fresh areas: `first` at `-angle/2`, `second` at `+angle/2`.
pub fn place_pair(
    first: &str,
    second: &str,
    local_sim: f64,
    global_sim: f64,
    unit: f64,
) -> Cluster {
    let metrics = cluster_metrics(local_sim, global_sim, unit);
    let structure = StructureNode::join(
        StructureNode::leaf(first),
        StructureNode::leaf(second),
        metrics.angle,
        metrics.radius,
    );
    let mut points = BTreeMap::new();
    layout(&structure, 0.0, &mut points);

    Cluster {
        members: [first.to_string(), second.to_string()]
            .into_iter()
            .collect(),
        structure,
        radius: metrics.radius,
        diameter: metrics.diameter,
        angle: metrics.angle,
        local_sim,
        global_sim,
        points,
    }
}

/// Attach one unplaced area to `cluster`.
///
/// The new root is `[cluster.structure, area]`. Existing members keep
/// their points unchanged; only `area` is positioned, at the new radius.
pub fn attach_area(
    cluster: &Cluster,
    area: &str,
    local_sim: f64,
    global_sim: f64,
    unit: f64,
) -> Cluster {
    let metrics = cluster_metrics(local_sim, global_sim, unit);
    let structure = StructureNode::join(
        cluster.structure.clone(),
        StructureNode::leaf(area),
        metrics.angle,
        metrics.radius,
    );

    let mut points = cluster.points.clone();
    if let Some(point) = locate(&structure, area, 0.0) {
        points.insert(area.to_string(), point);
    }

    let mut members = cluster.members.clone();
    members.insert(area.to_string());

    Cluster {
        members,
        structure,
        radius: metrics.radius,
        diameter: metrics.diameter,
        angle: metrics.angle,
        local_sim,
        global_sim,
        points,
    }
}

/// Merge two clusters under a new root `[first, second]` and re-walk the
/// whole tree. Angles may move; every leaf keeps its radius.
pub fn merge_clusters(
    first: &Cluster,
    second: &Cluster,
    local_sim: f64,
    global_sim: f64,
    unit: f64,
) -> Cluster {
    let metrics = cluster_metrics(local_sim, global_sim, unit);
    let structure = StructureNode::join(
        first.structure.clone(),
        second.structure.clone(),
        metrics.angle,
        metrics.radius,
    );
    let mut points = BTreeMap::new();
    layout(&structure, 0.0, &mut points);

    let members: BTreeSet<Area> = first.members.union(&second.members).cloned().collect();

    Cluster {
        members,
        structure,
        radius: metrics.radius,
        diameter: metrics.diameter,
        angle: metrics.angle,
        local_sim,
        global_sim,
        points,
    }
}

/// Position every leaf under `node`, which points in `direction`.
pub fn layout(node: &StructureNode, direction: f64, points: &mut BTreeMap<Area, Point>) {
    let StructureNode::Internal {
        left,
        right,
        angle,
        radius,
    } = node
    else {
        return;
    };
    let half = angle / 2.0;
    for (child, child_direction) in [(left, direction - half), (right, direction + half)] {
        match child.as_ref() {
            StructureNode::Leaf(area) => {
                points.insert(area.clone(), pol2cart(*radius, child_direction));
            }
            internal => layout(internal, child_direction, points),
        }
    }
}

/// Position of a single leaf under `node`, which points in `direction`.
pub fn locate(node: &StructureNode, target: &str, direction: f64) -> Option<Point> {
    let StructureNode::Internal {
        left,
        right,
        angle,
        radius,
    } = node
    else {
        return None;
    };
    let half = angle / 2.0;
    for (child, child_direction) in [(left, direction - half), (right, direction + half)] {
        let found = match child.as_ref() {
            StructureNode::Leaf(area) if area == target => Some(pol2cart(*radius, child_direction)),
            StructureNode::Leaf(_) => None,
            internal => locate(internal, target, child_direction),
        };
        if found.is_some() {
            return found;
        }
    }
    None
}
