//! Property tests for acc-core polar geometry.

use proptest::prelude::*;

use acc_core::geometry::{
    cart2pol, circular_midpoint, circular_span, normalize_signed, pol2cart, shortest_arc,
    shortest_delta, unwrap_angles,
};

const EPS: f64 = 1e-7;

/// Smallest distance between two angles on the circle.
fn angular_distance(a: f64, b: f64) -> f64 {
    shortest_delta(a, b).abs()
}

proptest! {
    #[test]
    fn polar_roundtrip(r in 0.01f64..100.0, theta in -720.0f64..720.0) {
        let polar = cart2pol(pol2cart(r, theta));
        prop_assert!((polar.radius - r).abs() < EPS * r.max(1.0));
        prop_assert!(polar.angle >= 0.0 && polar.angle < 360.0);
        prop_assert!(angular_distance(polar.angle, theta.rem_euclid(360.0)) < EPS);
    }

    #[test]
    fn normalized_angles_are_half_open(a in -10_000.0f64..10_000.0) {
        let n = normalize_signed(a);
        prop_assert!(n > -180.0 && n <= 180.0);
        prop_assert!(angular_distance(n, a) < EPS);
    }

    #[test]
    fn midpoint_is_equidistant_and_short(a in -180.0f64..180.0, b in -180.0f64..180.0) {
        let mid = circular_midpoint(a, b);
        let da = angular_distance(mid, a);
        let db = angular_distance(mid, b);
        prop_assert!((da - db).abs() < EPS);
        prop_assert!(da <= 90.0 + EPS);
    }

    #[test]
    fn arc_covers_short_way(a in -180.0f64..180.0, b in -180.0f64..180.0) {
        let (start, end) = shortest_arc(a, b);
        prop_assert!(start <= end);
        prop_assert!(end - start <= 180.0 + EPS);
        prop_assert!((end - start - angular_distance(a, b)).abs() < EPS);
    }

    #[test]
    fn unwrapping_preserves_directions(angles in prop::collection::vec(-720.0f64..720.0, 1..12)) {
        let unwrapped = unwrap_angles(&angles);
        prop_assert_eq!(unwrapped.len(), angles.len());
        for (u, a) in unwrapped.iter().zip(&angles) {
            prop_assert!(angular_distance(*u, *a) < EPS);
        }
        let span = circular_span(&angles);
        prop_assert!((0.0..360.0).contains(&span));
        // Every shorter-arc distance fits inside the occupied arc.
        for a in &angles {
            for b in &angles {
                prop_assert!(angular_distance(*a, *b) <= span + EPS);
            }
        }
    }
}
