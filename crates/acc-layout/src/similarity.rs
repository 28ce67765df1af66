//! Direction-agnostic similarity lookup, plus pure matrix helpers.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use acc_core::constants::SELF_SIMILARITY;
use acc_core::{Area, LinkageMethod, SimilarityMatrix};

use crate::linkage;

/// Read-only dense view of a [`SimilarityMatrix`].
///
/// Areas are indexed in sorted order. Each cell holds `rows[a][b]` when
/// present, else `rows[b][a]`; identical ids always resolve to 1.0.
#[derive(Debug, Clone)]
pub struct SimilarityAccessor {
    areas: Vec<Area>,
    index: FxHashMap<Area, usize>,
    cells: Vec<Option<f64>>,
}

impl SimilarityAccessor {
    pub fn new(matrix: &SimilarityMatrix) -> Self {
        let areas: Vec<Area> = matrix.areas().into_iter().collect();
        let index: FxHashMap<Area, usize> = areas
            .iter()
            .enumerate()
            .map(|(i, a)| (a.clone(), i))
            .collect();
        let n = areas.len();
        let mut cells = vec![None; n * n];

        // Forward entries first so they take precedence over mirrored ones.
        for (a, b, value) in matrix.entries() {
            if let (Some(&i), Some(&j)) = (index.get(a), index.get(b)) {
                cells[i * n + j] = Some(value);
            }
        }
        for (a, b, value) in matrix.entries() {
            if let (Some(&i), Some(&j)) = (index.get(a), index.get(b)) {
                cells[j * n + i].get_or_insert(value);
            }
        }
        for i in 0..n {
            cells[i * n + i] = Some(SELF_SIMILARITY);
        }

        Self {
            areas,
            index,
            cells,
        }
    }

    /// Sorted area set.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn index_of(&self, area: &str) -> Option<usize> {
        self.index.get(area).copied()
    }

    pub fn contains(&self, area: &str) -> bool {
        self.index.contains_key(area)
    }

    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        if a == b {
            return Some(SELF_SIMILARITY);
        }
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        self.get_index(i, j)
    }

    pub fn get_index(&self, i: usize, j: usize) -> Option<f64> {
        let n = self.areas.len();
        if i >= n || j >= n {
            return None;
        }
        self.cells[i * n + j]
    }
}

/// Highest defined similarity between two distinct areas.
///
/// Pairs are visited as `(i, j)` with `i < j` in sorted area order and a
/// later pair wins only when strictly greater.
pub fn highest_pair(accessor: &SimilarityAccessor) -> Option<(Area, Area, f64)> {
    let n = accessor.len();
    let mut best: Option<(usize, usize, f64)> = None;
    for i in 0..n {
        for j in (i + 1)..n {
            let Some(sim) = accessor.get_index(i, j) else {
                continue;
            };
            if best.map_or(true, |(_, _, b)| sim > b) {
                best = Some((i, j, sim));
            }
        }
    }
    let areas = accessor.areas();
    best.map(|(i, j, sim)| (areas[i].clone(), areas[j].clone(), sim))
}

/// Collapse `a` and `b` into one cluster row named `(a+b)`.
///
/// The cluster's similarity to every other area combines the defined
/// values for `a` and `b` with `method`; an area with neither value gets no
/// entry. The input matrix is left untouched.
pub fn merge_areas(
    matrix: &SimilarityMatrix,
    a: &str,
    b: &str,
    method: LinkageMethod,
) -> (SimilarityMatrix, Area) {
    let name = format!("({a}+{b})");
    let others: Vec<Area> = matrix
        .areas()
        .into_iter()
        .filter(|x| x != a && x != b)
        .collect();

    let mut rows: BTreeMap<Area, BTreeMap<Area, f64>> = BTreeMap::new();
    let mut cluster_row = BTreeMap::new();
    for other in &others {
        let values = [matrix.get(a, other), matrix.get(b, other)];
        if let Some(sim) = linkage::combine(method, values.into_iter().flatten()) {
            cluster_row.insert(other.clone(), sim);
        }
    }

    for other in &others {
        let mut row = BTreeMap::new();
        if let Some(&sim) = cluster_row.get(other) {
            row.insert(name.clone(), sim);
        }
        for peer in &others {
            if peer == other {
                continue;
            }
            if let Some(sim) = matrix.get(other, peer) {
                row.insert(peer.clone(), sim);
            }
        }
        rows.insert(other.clone(), row);
    }
    rows.insert(name.clone(), cluster_row);

    (SimilarityMatrix::from_nested(rows), name)
}
