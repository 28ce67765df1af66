//! Property tests for the ACC builder and ACC2 transform.

use proptest::prelude::*;

use acc_core::geometry::circular_span;
use acc_core::{Acc2Options, NoopObserver, SimilarityMatrix, StepAction};
use acc_layout::{Acc2Transformer, AccBuilder};

const EPS: f64 = 1e-9;

/// Full upper-triangle matrix over `n` areas named `a0`, `a1`, ...
fn matrix(n: usize, values: &[f64]) -> SimilarityMatrix {
    let mut m = SimilarityMatrix::new();
    let mut k = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            m.insert(&format!("a{i}"), &format!("a{j}"), values[k]);
            k += 1;
        }
    }
    m
}

fn matrices() -> impl Strategy<Value = (SimilarityMatrix, SimilarityMatrix)> {
    (2usize..8).prop_flat_map(|n| {
        let pairs = n * (n - 1) / 2;
        (
            prop::collection::vec(0.0f64..=1.0, pairs),
            prop::collection::vec(0.0f64..=1.0, pairs),
        )
            .prop_map(move |(l, g)| (matrix(n, &l), matrix(n, &g)))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn complete_matrices_always_finish((local, global) in matrices()) {
        let build = AccBuilder::new(&local, &global).build(&NoopObserver);
        prop_assert!(build.is_complete());
        let cluster = build.final_cluster().unwrap();
        prop_assert_eq!(&cluster.members, &local.areas());
        prop_assert_eq!(cluster.points.len(), local.len());
    }

    #[test]
    fn radii_never_change_once_placed((local, global) in matrices()) {
        let build = AccBuilder::new(&local, &global).build(&NoopObserver);
        for pair in build.steps.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            for area in &before.placed_areas {
                let old = before.cluster_of(area).and_then(|c| c.point(area)).unwrap();
                let new = after.cluster_of(area).and_then(|c| c.point(area)).unwrap();
                prop_assert!((old.radius() - new.radius()).abs() < EPS);
                if after.action == StepAction::AddArea {
                    prop_assert_eq!(old, new);
                }
            }
        }
    }

    #[test]
    fn angles_and_diameters_are_bounded((local, global) in matrices()) {
        let build = AccBuilder::new(&local, &global).build(&NoopObserver);
        for step in &build.steps {
            for cluster in &step.active_clusters {
                prop_assert!(cluster.angle >= 0.0 && cluster.angle <= 180.0);
                prop_assert!(cluster.diameter > 0.0 && cluster.diameter.is_finite());
            }
        }
    }

    #[test]
    fn builds_are_reproducible((local, global) in matrices()) {
        let first = AccBuilder::new(&local, &global).build(&NoopObserver);
        let second = AccBuilder::new(&local, &global).build(&NoopObserver);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn acc2_levels_and_circles((local, global) in matrices(), max_angle in 10.0f64..360.0) {
        let bundle = Acc2Transformer::new(&local, &global)
            .options(Acc2Options::default().with_max_angle(max_angle))
            .transform()
            .unwrap();
        prop_assert_eq!(bundle.levels.len(), local.len() - 1);
        prop_assert!(bundle.circles.contains(&0.5));
        prop_assert!(bundle.circles.windows(2).all(|w| w[0] < w[1]));
        for level in &bundle.levels {
            prop_assert!(level.radius >= 0.5 && level.radius <= 1.0);
        }
        let angles: Vec<f64> = bundle.positions.values().map(|p| p.angle).collect();
        prop_assert!(circular_span(&angles) <= max_angle + 1e-7);
    }
}
