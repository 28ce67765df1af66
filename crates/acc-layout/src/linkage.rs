//! Linkage aggregation: many pairwise similarities into one value.

use std::collections::BTreeSet;

use acc_core::constants::{MISSING_LINKAGE_SIMILARITY, SELF_SIMILARITY};
use acc_core::{Area, LinkageMethod};

use crate::similarity::SimilarityAccessor;

/// Aggregate the similarities of every cross pair in `a × b`.
///
/// Undefined pairs are skipped. When no pair has data the result is 0.5.
/// A lone area against nothing (`|a| + |b| <= 1`) is fully similar to
/// itself and yields 1.0.
pub fn aggregate(
    method: LinkageMethod,
    a: &BTreeSet<Area>,
    b: &BTreeSet<Area>,
    accessor: &SimilarityAccessor,
) -> f64 {
    if a.len() + b.len() <= 1 {
        return SELF_SIMILARITY;
    }

    let values = a
        .iter()
        .flat_map(|x| b.iter().filter_map(move |y| accessor.get(x, y)));

    match combine(method, values) {
        Some(sim) => sim,
        None => {
            tracing::debug!(
                method = %method,
                left = a.len(),
                right = b.len(),
                fallback = MISSING_LINKAGE_SIMILARITY,
                "no defined cross pair, using fallback linkage"
            );
            MISSING_LINKAGE_SIMILARITY
        }
    }
}

/// Combine already-defined values with `method`; `None` when empty.
pub fn combine<I>(method: LinkageMethod, values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut count = 0usize;
    let mut acc = 0.0f64;
    for v in values {
        acc = match (method, count) {
            (_, 0) => v,
            (LinkageMethod::Average, _) => acc + v,
            (LinkageMethod::Single, _) => acc.max(v),
            (LinkageMethod::Complete, _) => acc.min(v),
        };
        count += 1;
    }
    match (method, count) {
        (_, 0) => None,
        (LinkageMethod::Average, n) => Some(acc / n as f64),
        _ => Some(acc),
    }
}
