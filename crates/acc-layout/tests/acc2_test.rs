//! ACC2 transform behaviour.

use acc_core::errors::error_code::AccErrorCode;
use acc_core::geometry::{
    cart2pol, circular_midpoint, circular_span, normalize_signed, pol2cart, shortest_delta,
};
use acc_core::{Acc2Options, AccConfig, ConnectionLine, NodeRef, NoopObserver, SimilarityMatrix};
use acc_layout::acc2::{analyze_levels, level_geometry};
use acc_layout::{Acc2Transformer, AccBuilder, SimilarityAccessor};
use test_fixtures::load_scenario;

const EPS: f64 = 1e-9;

#[test]
fn test_level_radius_bounds_are_exact() {
    let (_, r) = level_geometry(0.0);
    assert_eq!(r, 1.0);
    let (_, r) = level_geometry(1.0);
    assert_eq!(r, 0.5);
}

#[test]
fn test_wrap_midpoint() {
    let mid = circular_midpoint(170.0, -170.0);
    assert!((mid.abs() - 180.0).abs() < EPS, "got {mid}");
    assert!(mid.abs() > 90.0);
}

#[test]
fn test_six_area_bundle() {
    let scenario = load_scenario("six_areas");
    let bundle = Acc2Transformer::new(&scenario.local, &scenario.global)
        .transform()
        .unwrap();

    assert_eq!(bundle.levels.len(), 5);
    assert_eq!(bundle.merge_points.len(), 5);
    assert_eq!(bundle.lines.len(), 15);
    assert_eq!(bundle.positions.len(), 6);
    assert_eq!(bundle.circles[0], 0.5);
    assert!(bundle.circles.windows(2).all(|w| w[0] < w[1]));

    for level in &bundle.levels {
        assert!((0.5..=1.0).contains(&level.radius));
        assert!((level.diameter - 2.0 * level.radius).abs() < EPS);
        assert!(level.members.windows(2).all(|w| w[0] < w[1]));
    }

    for position in bundle.positions.values() {
        assert_eq!(position.radius, 0.5);
        let p = pol2cart(position.radius, position.angle);
        assert!(
            (p.x - position.x).abs() < EPS && (p.y - position.y).abs() < EPS
        );
        assert!(position.angle > -180.0 && position.angle <= 180.0);
    }
}

#[test]
fn test_merge_points_sit_between_children() {
    let scenario = load_scenario("six_areas");
    let bundle = Acc2Transformer::new(&scenario.local, &scenario.global)
        .transform()
        .unwrap();
    let angle_of = |id: &NodeRef| match id {
        NodeRef::Area(a) => bundle.positions[a].angle,
        NodeRef::Level(k) => bundle.merge_points[*k].angle,
    };
    for point in &bundle.merge_points {
        let expected =
            circular_midpoint(angle_of(&point.children[0]), angle_of(&point.children[1]));
        assert!((point.angle - expected).abs() < EPS);
        assert_eq!(point.radius, bundle.levels[point.order].radius);
    }
}

#[test]
fn test_lines_reach_merge_radius() {
    let scenario = load_scenario("simple_abc");
    let bundle = Acc2Transformer::new(&scenario.local, &scenario.global)
        .transform()
        .unwrap();
    for (level, chunk) in bundle.levels.iter().zip(bundle.lines.chunks(3)) {
        match chunk {
            [
                ConnectionLine::Radial { to: t1, .. },
                ConnectionLine::Radial { to: t2, .. },
                ConnectionLine::Arc {
                    radius,
                    angle_start,
                    angle_end,
                },
            ] => {
                assert_eq!(t1.radius, level.radius);
                assert_eq!(t2.radius, level.radius);
                assert_eq!(*radius, level.radius);
                assert!(angle_start <= angle_end);
                assert!(angle_end - angle_start <= 180.0 + EPS);
            }
            other => panic!("unexpected line layout {other:?}"),
        }
    }
}

#[test]
fn test_angle_compression() {
    let scenario = load_scenario("six_areas");
    let opts = Acc2Options::default().with_max_angle(30.0);
    let bundle = Acc2Transformer::new(&scenario.local, &scenario.global)
        .options(opts)
        .transform()
        .unwrap();
    let angles: Vec<f64> = bundle.positions.values().map(|p| p.angle).collect();
    let span = circular_span(&angles);
    assert!(span <= 30.0 + EPS, "span {span}");
}

#[test]
fn test_radius_rescale() {
    let scenario = load_scenario("six_areas");
    let opts = Acc2Options::default().with_diameter_range(2.0, 6.0);
    let bundle = Acc2Transformer::new(&scenario.local, &scenario.global)
        .options(opts)
        .transform()
        .unwrap();
    assert!((bundle.circles[0] - 1.0).abs() < EPS);
    assert!((bundle.circles[bundle.circles.len() - 1] - 3.0).abs() < EPS);
    for position in bundle.positions.values() {
        assert!((position.radius - 1.0).abs() < EPS);
        assert!((position.x.hypot(position.y) - 1.0).abs() < EPS);
    }
    for point in &bundle.merge_points {
        assert!(bundle
            .circles
            .iter()
            .any(|c| (c - point.radius).abs() < EPS));
    }
}

#[test]
fn test_config_drives_options() {
    let scenario = load_scenario("six_areas");
    let config = AccConfig::from_toml(
        "[acc2]\nmax_angle = 60.0\nmin_diameter = 1.0\nmax_diameter = 4.0\n",
    )
    .unwrap();
    let bundle = Acc2Transformer::new(&scenario.local, &scenario.global)
        .config(&config)
        .transform()
        .unwrap();
    assert!((bundle.circles[bundle.circles.len() - 1] - 2.0).abs() < EPS);
}

#[test]
fn test_levels_match_accessor_areas() {
    let scenario = load_scenario("six_areas");
    let local = SimilarityAccessor::new(&scenario.local);
    let global = SimilarityAccessor::new(&scenario.global);
    let levels = analyze_levels(&local, &global);
    let last = levels.last().unwrap();
    assert_eq!(last.members, local.areas());
}

#[test]
fn test_single_area_fails_cleanly() {
    let mut local = SimilarityMatrix::new();
    local.insert_area("A");
    let err = Acc2Transformer::new(&local, &local)
        .transform()
        .unwrap_err();
    assert_eq!(err.error_code(), "INCOMPLETE_BUILD");
}

/// Two three-area clusters `[[A, B], C]` and `[[D, E], F]` joined at
/// 171°. The builder puts A at -175.5° and F at 157.5°, 27° apart across
/// the seam.
fn seam_matrices() -> (SimilarityMatrix, SimilarityMatrix) {
    let mut pairs = vec![
        ("A", "B", 0.8),
        ("D", "E", 0.8),
        ("A", "C", 0.2),
        ("B", "C", 0.2),
        ("D", "F", 0.2),
        ("E", "F", 0.2),
    ];
    for a in ["A", "B", "C"] {
        for b in ["D", "E", "F"] {
            pairs.push((a, b, 0.05));
        }
    }
    let global = SimilarityMatrix::from_pairs(pairs.iter().map(|&(a, b, _)| (a, b, 0.5)));
    (SimilarityMatrix::from_pairs(pairs), global)
}

#[test]
fn test_default_config_keeps_builder_angles() {
    let (local, global) = seam_matrices();
    let build = AccBuilder::new(&local, &global).build(&NoopObserver);
    let cluster = build.final_cluster().unwrap();
    let bundle = Acc2Transformer::new(&local, &global)
        .config(&AccConfig::default())
        .transform()
        .unwrap();

    for (area, position) in &bundle.positions {
        let expected = normalize_signed(cart2pol(cluster.points[area]).angle);
        assert!((position.angle - expected).abs() < EPS, "{area}");
    }
    assert!((bundle.positions["A"].angle + 175.5).abs() < 1e-7);
    assert!((bundle.positions["F"].angle - 157.5).abs() < 1e-7);
}

#[test]
fn test_compression_keeps_seam_neighbours() {
    let (local, global) = seam_matrices();
    let bundle = Acc2Transformer::new(&local, &global)
        .options(Acc2Options::default().with_max_angle(180.0))
        .transform()
        .unwrap();
    let angle = |area: &str| bundle.positions[area].angle;

    // Occupied arc is C (-13.5) through B (220.5 unwrapped): 234 degrees.
    let factor = 180.0 / 234.0;
    let across_seam = shortest_delta(angle("F"), angle("A"));
    assert!(
        (across_seam - 27.0 * factor).abs() < 1e-7,
        "F -> A moved {across_seam}"
    );
    let inside_pair = shortest_delta(angle("A"), angle("B"));
    assert!(
        (inside_pair - 36.0 * factor).abs() < 1e-7,
        "A -> B moved {inside_pair}"
    );

    let angles: Vec<f64> = bundle.positions.values().map(|p| p.angle).collect();
    assert!(circular_span(&angles) <= 180.0 + 1e-7);
}
