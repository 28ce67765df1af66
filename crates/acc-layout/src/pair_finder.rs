//! Next-action selection for the iterative builder.
//!
//! Three candidate classes are scored by local similarity in one pass:
//! a new pair of unplaced areas (direct similarity), one unplaced area
//! attached to an active cluster, and two active clusters merged. The two
//! cluster classes are scored with a max probe over member pairs. The probe
//! only picks the action; the builder computes the authoritative linkage
//! afterwards.

use std::collections::BTreeSet;

use acc_core::constants::MISSING_PROBE_SIMILARITY;
use acc_core::{Area, BuildError, Cluster};

use crate::similarity::SimilarityAccessor;

#[derive(Debug, Clone, PartialEq)]
pub enum CandidateKind {
    NewPair { first: Area, second: Area },
    AddToCluster { cluster: usize, area: Area },
    /// `first < second`, both indices into the active cluster list.
    MergeClusters { first: usize, second: usize },
}

/// The winning next action.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub kind: CandidateKind,
    /// Local similarity that won the selection.
    pub score: f64,
    /// Global similarity estimate, falling back to `score` without data.
    pub global_estimate: f64,
}

/// Read-only scanner over unplaced areas and active clusters.
pub struct PairFinder<'a> {
    local: &'a SimilarityAccessor,
    global: &'a SimilarityAccessor,
}

impl<'a> PairFinder<'a> {
    pub fn new(local: &'a SimilarityAccessor, global: &'a SimilarityAccessor) -> Self {
        Self { local, global }
    }

    /// Pick the highest-scoring candidate.
    ///
    /// Visiting order: new pairs `(a1, a2)` with `a1 < a2`, then
    /// `(cluster index, area)`, then cluster pairs `(i, j)` with `i < j`.
    /// A later candidate replaces the best only when strictly greater.
    pub fn find(
        &self,
        placed: &BTreeSet<Area>,
        clusters: &[Cluster],
    ) -> Result<Candidate, BuildError> {
        let unplaced: Vec<&Area> = self
            .local
            .areas()
            .iter()
            .filter(|a| !placed.contains(*a))
            .collect();
        let mut best: Option<(CandidateKind, f64)> = None;
        let mut offer = |kind: CandidateKind, score: f64| {
            if best.as_ref().map_or(true, |(_, b)| score > *b) {
                best = Some((kind, score));
            }
        };

        for (i, a1) in unplaced.iter().enumerate() {
            for a2 in &unplaced[i + 1..] {
                if let Some(sim) = self.local.get(a1, a2) {
                    let kind = CandidateKind::NewPair {
                        first: (*a1).clone(),
                        second: (*a2).clone(),
                    };
                    offer(kind, sim);
                }
            }
        }

        for (index, cluster) in clusters.iter().enumerate() {
            for area in &unplaced {
                let sim = probe(self.local, cluster.members.iter(), std::iter::once(*area));
                if let Some(sim) = sim {
                    let kind = CandidateKind::AddToCluster {
                        cluster: index,
                        area: (*area).clone(),
                    };
                    offer(kind, sim);
                }
            }
        }

        for i in 0..clusters.len() {
            for j in (i + 1)..clusters.len() {
                let (left, right) = (&clusters[i].members, &clusters[j].members);
                if let Some(sim) = probe(self.local, left.iter(), right.iter()) {
                    let kind = CandidateKind::MergeClusters {
                        first: i,
                        second: j,
                    };
                    offer(kind, sim);
                }
            }
        }

        let Some((kind, score)) = best else {
            return Err(BuildError::NoCandidate {
                unplaced: unplaced.len(),
                active_clusters: clusters.len(),
            });
        };

        let global_estimate = self.estimate_global(&kind, clusters).unwrap_or_else(|| {
            tracing::debug!(
                score,
                "no global similarity for candidate, using local score"
            );
            score
        });

        Ok(Candidate {
            kind,
            score,
            global_estimate,
        })
    }

    fn estimate_global(&self, kind: &CandidateKind, clusters: &[Cluster]) -> Option<f64> {
        match kind {
            CandidateKind::NewPair { first, second } => self.global.get(first, second),
            CandidateKind::AddToCluster { cluster, area } => probe(
                self.global,
                clusters.get(*cluster)?.members.iter(),
                std::iter::once(area),
            ),
            CandidateKind::MergeClusters { first, second } => probe(
                self.global,
                clusters.get(*first)?.members.iter(),
                clusters.get(*second)?.members.iter(),
            ),
        }
    }
}

/// Max similarity over `left × right`. Undefined pairs count as 0.0, but
/// with no defined pair at all the probe has no score.
fn probe<'x, L, R>(accessor: &SimilarityAccessor, left: L, right: R) -> Option<f64>
where
    L: IntoIterator<Item = &'x Area>,
    R: IntoIterator<Item = &'x Area> + Clone,
{
    let mut best: Option<f64> = None;
    let mut saw_missing = false;
    for x in left {
        for y in right.clone() {
            match accessor.get(x, y) {
                Some(sim) => best = Some(best.map_or(sim, |b| b.max(sim))),
                None => saw_missing = true,
            }
        }
    }
    best.map(|b| {
        if saw_missing {
            b.max(MISSING_PROBE_SIMILARITY)
        } else {
            b
        }
    })
}
