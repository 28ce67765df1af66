//! Polar geometry in compass convention.
//!
//! 0° points north (+y) and angles grow clockwise, so
//! `x = r·sin(θ)` and `y = r·cos(θ)`. Every layout computation in the
//! workspace goes through these helpers.

use crate::model::{Point, Polar};

/// Polar (degrees, compass) to cartesian.
pub fn pol2cart(radius: f64, angle_deg: f64) -> Point {
    let theta = angle_deg.to_radians();
    Point::new(radius * theta.sin(), radius * theta.cos())
}

/// Cartesian to polar, angle in `[0, 360)`.
pub fn cart2pol(point: Point) -> Polar {
    let radius = point.x.hypot(point.y);
    let mut angle = point.x.atan2(point.y).to_degrees().rem_euclid(360.0);
    // rem_euclid rounds -ε up to exactly 360.0
    if angle >= 360.0 {
        angle = 0.0;
    }
    Polar::new(radius, angle)
}

/// Map any angle into `(-180, 180]`.
pub fn normalize_signed(angle_deg: f64) -> f64 {
    let r = angle_deg.rem_euclid(360.0);
    if r > 180.0 {
        r - 360.0
    } else {
        r
    }
}

/// Signed rotation from `from` to `to` along the shorter arc, in `(-180, 180]`.
pub fn shortest_delta(from: f64, to: f64) -> f64 {
    normalize_signed(to - from)
}

/// Midpoint of `a` and `b` along the shorter arc, in `(-180, 180]`.
///
/// Unwraps across the ±180° seam: 170° and -170° meet at 180°, not 0°.
pub fn circular_midpoint(a: f64, b: f64) -> f64 {
    normalize_signed(a + shortest_delta(a, b) / 2.0)
}

/// Start and end of the shorter arc between `a` and `b`, as
/// `(mid - half, mid + half)`. The ends are not normalized, so the pair
/// always describes a continuous sweep with `start <= end`.
pub fn shortest_arc(a: f64, b: f64) -> (f64, f64) {
    let mid = circular_midpoint(a, b);
    let half = shortest_delta(a, b).abs() / 2.0;
    (mid - half, mid + half)
}

/// Lift angles onto one continuous range, cut at the widest empty arc.
///
/// The result keeps input order. Every value stays within 360° of the
/// smallest one, so `max - min` of the output is the arc the angles occupy.
/// When the widest gap already straddles ±180° the signed angles are
/// returned as they are.
pub fn unwrap_angles(angles: &[f64]) -> Vec<f64> {
    let signed: Vec<f64> = angles.iter().map(|&a| normalize_signed(a)).collect();
    let mut sorted = signed.clone();
    sorted.sort_by(f64::total_cmp);
    match widest_gap_end(&sorted) {
        Some(cut) => signed
            .into_iter()
            .map(|a| if a < cut { a + 360.0 } else { a })
            .collect(),
        None => signed,
    }
}

/// Width of the arc occupied by `angles`: 360° minus the widest empty gap.
pub fn circular_span(angles: &[f64]) -> f64 {
    let unwrapped = unwrap_angles(angles);
    if unwrapped.is_empty() {
        return 0.0;
    }
    let (min, max) = unwrapped
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &a| (lo.min(a), hi.max(a)));
    max - min
}

/// First angle after the widest gap between sorted signed angles, or
/// `None` when the gap across ±180° is the widest (ties included).
fn widest_gap_end(sorted: &[f64]) -> Option<f64> {
    let (first, last) = (*sorted.first()?, *sorted.last()?);
    let mut widest = first + 360.0 - last;
    let mut cut = None;
    for pair in sorted.windows(2) {
        let gap = pair[1] - pair[0];
        if gap > widest {
            widest = gap;
            cut = Some(pair[1]);
        }
    }
    cut
}
