//! ACC2: clean per-level circles and connection geometry.
//!
//! A standard greedy average-linkage pass produces the merge levels
//! (`diameter = 1 + (1 - global_sim)`, so every level radius lies in
//! `[0.5, 1.0]`). Area angles come from a full ACC build; every area sits
//! on the innermost circle. Each level gets a merge point at the circular
//! midpoint of its children plus two radial segments and one arc.

use std::collections::{BTreeMap, BTreeSet};

use acc_core::config::AccConfig;
use acc_core::constants::{ACC2_AREA_RADIUS, DEFAULT_UNIT};
use acc_core::geometry::{
    cart2pol, circular_midpoint, normalize_signed, pol2cart, shortest_arc, unwrap_angles,
};
use acc_core::{
    Acc2Bundle, Acc2Error, Acc2Options, Area, AreaPosition, BuildError, ConnectionLine,
    LinkageMethod, MergeLevel, MergePoint, NodeRef, NoopObserver, Polar, SimilarityMatrix,
};

use crate::builder::AccBuilder;
use crate::linkage::aggregate;
use crate::similarity::SimilarityAccessor;

/// Radii closer than this are one circle.
const CIRCLE_EPSILON: f64 = 1e-12;

pub struct Acc2Transformer<'a> {
    local: &'a SimilarityMatrix,
    global: &'a SimilarityMatrix,
    unit: f64,
    options: Acc2Options,
}

impl<'a> Acc2Transformer<'a> {
    pub fn new(local: &'a SimilarityMatrix, global: &'a SimilarityMatrix) -> Self {
        Self {
            local,
            global,
            unit: DEFAULT_UNIT,
            options: Acc2Options::default(),
        }
    }

    /// Unit passed to the underlying ACC build.
    pub fn unit(mut self, unit: f64) -> Self {
        self.unit = unit;
        self
    }

    pub fn options(mut self, options: Acc2Options) -> Self {
        self.options = options;
        self
    }

    pub fn config(self, config: &AccConfig) -> Self {
        self.unit(config.unit()).options(config.acc2_options())
    }

    pub fn transform(&self) -> Result<Acc2Bundle, Acc2Error> {
        let local = SimilarityAccessor::new(self.local);
        let global = SimilarityAccessor::new(self.global);
        tracing::info!(areas = local.len(), "starting ACC2 transform");

        let levels = analyze_levels(&local, &global);

        let build = AccBuilder::new(self.local, self.global)
            .unit(self.unit)
            .build(&NoopObserver);
        let Some(cluster) = build.final_cluster() else {
            let err = build.incomplete.clone().unwrap_or(BuildError::NoCandidate {
                unplaced: local.len(),
                active_clusters: build.active_clusters.len(),
            });
            tracing::warn!(error = %err, "ACC2 needs a complete build");
            return Err(err.into());
        };

        let mut angles: BTreeMap<Area, f64> = cluster
            .points
            .iter()
            .map(|(area, point)| (area.clone(), normalize_signed(cart2pol(*point).angle)))
            .collect();
        if let Some(max_angle) = self.options.max_angle {
            compress_angles(&mut angles, max_angle);
        }

        let raw_circles = circles(&levels);
        let scale = self
            .options
            .diameter_range
            .and_then(|(min, max)| RadiusScale::fit(&raw_circles, min / 2.0, max / 2.0));
        let rescale = |r: f64| scale.as_ref().map_or(r, |s| s.apply(r));

        let area_radius = rescale(ACC2_AREA_RADIUS);
        let positions: BTreeMap<Area, AreaPosition> = angles
            .into_iter()
            .map(|(area, angle)| {
                let p = pol2cart(area_radius, angle);
                let position = AreaPosition {
                    x: p.x,
                    y: p.y,
                    radius: area_radius,
                    angle,
                };
                (area, position)
            })
            .collect();

        let mut merge_points: Vec<MergePoint> = Vec::with_capacity(levels.len());
        let mut lines = Vec::with_capacity(levels.len() * 3);
        for level in &levels {
            let first = resolve(&level.child1_id, &positions, &merge_points)?;
            let second = resolve(&level.child2_id, &positions, &merge_points)?;
            let radius = rescale(level.radius);
            let angle = circular_midpoint(first.angle, second.angle);

            lines.push(ConnectionLine::Radial {
                from: first,
                to: Polar::new(radius, first.angle),
            });
            lines.push(ConnectionLine::Radial {
                from: second,
                to: Polar::new(radius, second.angle),
            });
            let (angle_start, angle_end) = shortest_arc(first.angle, second.angle);
            lines.push(ConnectionLine::Arc {
                radius,
                angle_start,
                angle_end,
            });

            tracing::debug!(order = level.order, radius, angle, "merge point");
            merge_points.push(MergePoint {
                order: level.order,
                radius,
                angle,
                children: [level.child1_id.clone(), level.child2_id.clone()],
            });
        }

        let circles = raw_circles.into_iter().map(rescale).collect();
        tracing::info!(
            levels = levels.len(),
            lines = lines.len(),
            "ACC2 transform finished"
        );

        Ok(Acc2Bundle {
            positions,
            levels,
            merge_points,
            lines,
            circles,
        })
    }
}

/// `(diameter, radius)` of a merge level.
pub fn level_geometry(global_sim: f64) -> (f64, f64) {
    let diameter = 1.0 + (1.0 - global_sim.clamp(0.0, 1.0));
    (diameter, diameter / 2.0)
}

/// Greedy average-linkage clustering over the local matrix.
///
/// Clusters start as sorted singletons; merged clusters are appended. At
/// each round the pair with the highest local linkage wins (first visited
/// on ties) and the global linkage of the same pair sizes its level.
pub fn analyze_levels(local: &SimilarityAccessor, global: &SimilarityAccessor) -> Vec<MergeLevel> {
    let mut clusters: Vec<(NodeRef, BTreeSet<Area>)> = local
        .areas()
        .iter()
        .map(|a| (NodeRef::Area(a.clone()), [a.clone()].into_iter().collect()))
        .collect();
    let mut levels = Vec::with_capacity(clusters.len().saturating_sub(1));

    while clusters.len() > 1 {
        let mut best: Option<(usize, usize, f64)> = None;
        for i in 0..clusters.len() {
            for j in (i + 1)..clusters.len() {
                let (a, b) = (&clusters[i].1, &clusters[j].1);
                let sim = aggregate(LinkageMethod::Average, a, b, local);
                if best.map_or(true, |(_, _, b)| sim > b) {
                    best = Some((i, j, sim));
                }
            }
        }
        let Some((i, j, local_sim)) = best else {
            break;
        };

        let (second_id, second) = clusters.remove(j);
        let (first_id, first) = clusters.remove(i);
        let global_sim = aggregate(LinkageMethod::Average, &first, &second, global);
        let (diameter, radius) = level_geometry(global_sim);
        let members: BTreeSet<Area> = first.union(&second).cloned().collect();
        let order = levels.len();

        levels.push(MergeLevel {
            order,
            child1_id: first_id,
            child2_id: second_id,
            members: members.iter().cloned().collect(),
            local_sim,
            global_sim,
            diameter,
            radius,
        });
        clusters.push((NodeRef::Level(order), members));
    }

    levels
}

/// Affine-compress angles around their midpoint so the arc they occupy is
/// at most `max_angle`. Spans already within the limit are left alone.
///
/// Min, max and midpoint are taken on the circle, cut at the widest empty
/// arc, so a layout straddling ±180° is squeezed as one piece.
pub fn compress_angles(angles: &mut BTreeMap<Area, f64>, max_angle: f64) {
    let values: Vec<f64> = angles.values().copied().collect();
    let unwrapped = unwrap_angles(&values);
    let (min, max) = unwrapped
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &a| (lo.min(a), hi.max(a)));
    let span = max - min;
    if unwrapped.is_empty() || max_angle <= 0.0 || span <= max_angle {
        return;
    }
    let mid = (min + max) / 2.0;
    let factor = max_angle / span;
    tracing::debug!(span, max_angle, factor, "compressing area angles");
    for (angle, lifted) in angles.values_mut().zip(unwrapped) {
        *angle = normalize_signed(mid + (lifted - mid) * factor);
    }
}

/// Sorted unique radii: the area circle plus every level.
fn circles(levels: &[MergeLevel]) -> Vec<f64> {
    let mut radii: Vec<f64> = std::iter::once(ACC2_AREA_RADIUS)
        .chain(levels.iter().map(|l| l.radius))
        .collect();
    radii.sort_by(f64::total_cmp);
    radii.dedup_by(|a, b| (*a - *b).abs() < CIRCLE_EPSILON);
    radii
}

/// Affine map from the current circle range onto a target radius range.
#[derive(Debug, Clone, Copy)]
struct RadiusScale {
    from_min: f64,
    from_range: f64,
    to_min: f64,
    to_range: f64,
}

impl RadiusScale {
    fn fit(circles: &[f64], to_min: f64, to_max: f64) -> Option<Self> {
        let (from_min, from_max) = (*circles.first()?, *circles.last()?);
        let from_range = from_max - from_min;
        if from_range <= CIRCLE_EPSILON {
            tracing::debug!(from_min, "degenerate radius range, skipping rescale");
            return None;
        }
        Some(Self {
            from_min,
            from_range,
            to_min,
            to_range: to_max - to_min,
        })
    }

    fn apply(&self, r: f64) -> f64 {
        self.to_min + (r - self.from_min) / self.from_range * self.to_range
    }
}

fn resolve(
    id: &NodeRef,
    positions: &BTreeMap<Area, AreaPosition>,
    merge_points: &[MergePoint],
) -> Result<Polar, Acc2Error> {
    let found = match id {
        NodeRef::Area(area) => positions.get(area).map(|p| Polar::new(p.radius, p.angle)),
        NodeRef::Level(order) => merge_points
            .get(*order)
            .map(|m| Polar::new(m.radius, m.angle)),
    };
    found.ok_or_else(|| Acc2Error::StructureInconsistency { id: id.to_string() })
}
