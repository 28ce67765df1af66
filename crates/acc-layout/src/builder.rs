//! Iterative ACC builder.
//!
//! Places the strongest pair first, then repeatedly asks the
//! [`PairFinder`] for the next action, computes the authoritative linkage
//! and hands it to the placer, recording one [`Step`] per iteration until
//! a single cluster holds every area.

use std::collections::BTreeSet;

use acc_core::config::AccConfig;
use acc_core::constants::{DEFAULT_METHOD, DEFAULT_UNIT};
use acc_core::{
    Area, BuildError, BuildObserver, Cluster, LinkageMethod, SimilarityMatrix, Step, StepAction,
};

use crate::linkage::aggregate;
use crate::pair_finder::{CandidateKind, PairFinder};
use crate::placer;
use crate::similarity::{highest_pair, SimilarityAccessor};

/// Result of one build.
///
/// `incomplete` is set when the builder ran out of scorable candidates
/// before reaching a single cluster; the recorded steps stay valid.
#[derive(Debug, Clone, PartialEq)]
pub struct AccBuild {
    pub steps: Vec<Step>,
    pub active_clusters: Vec<Cluster>,
    pub incomplete: Option<BuildError>,
}

impl AccBuild {
    pub fn is_complete(&self) -> bool {
        self.incomplete.is_none() && self.active_clusters.len() == 1
    }

    /// The single remaining cluster of a complete build.
    pub fn final_cluster(&self) -> Option<&Cluster> {
        if self.is_complete() {
            self.active_clusters.first()
        } else {
            None
        }
    }
}

/// Builder over a local (angle) and a global (radius) similarity matrix.
pub struct AccBuilder<'a> {
    local: &'a SimilarityMatrix,
    global: &'a SimilarityMatrix,
    unit: f64,
    method: LinkageMethod,
}

/// Mutable state of a running build.
struct BuildState {
    steps: Vec<Step>,
    clusters: Vec<Cluster>,
    placed: BTreeSet<Area>,
}

impl BuildState {
    fn record<O: BuildObserver + ?Sized>(
        &mut self,
        observer: &O,
        action: StepAction,
        highlighted: BTreeSet<Area>,
        description: String,
    ) {
        let step = Step {
            index: self.steps.len(),
            action,
            active_clusters: self.clusters.clone(),
            highlighted_members: highlighted,
            description,
            placed_areas: self.placed.clone(),
        };
        tracing::debug!(
            step = step.index,
            action = %step.action,
            placed = step.placed_areas.len(),
            active_clusters = step.active_clusters.len(),
            "{}",
            step.description
        );
        observer.on_log(&step.description);
        observer.on_step(&step);
        self.steps.push(step);
    }
}

impl<'a> AccBuilder<'a> {
    pub fn new(local: &'a SimilarityMatrix, global: &'a SimilarityMatrix) -> Self {
        Self {
            local,
            global,
            unit: DEFAULT_UNIT,
            method: DEFAULT_METHOD,
        }
    }

    pub fn unit(mut self, unit: f64) -> Self {
        self.unit = unit;
        self
    }

    pub fn method(mut self, method: LinkageMethod) -> Self {
        self.method = method;
        self
    }

    /// Take `unit` and `method` from a resolved config.
    pub fn config(self, config: &AccConfig) -> Self {
        self.unit(config.unit()).method(config.method())
    }

    /// Run the full build, streaming each step to `observer`.
    pub fn build<O: BuildObserver + ?Sized>(&self, observer: &O) -> AccBuild {
        let local = SimilarityAccessor::new(self.local);
        let global = SimilarityAccessor::new(self.global);
        let total = local.len();

        tracing::info!(
            areas = total,
            unit = self.unit,
            method = %self.method,
            "starting ACC build"
        );
        observer.on_log(&format!(
            "Starting ACC build: {total} areas, unit={}, method={}",
            self.unit, self.method
        ));

        let mut state = BuildState {
            steps: Vec::new(),
            clusters: Vec::new(),
            placed: BTreeSet::new(),
        };

        let Some((first, second, local_sim)) = highest_pair(&local) else {
            let err = BuildError::NoCandidate {
                unplaced: total,
                active_clusters: 0,
            };
            tracing::warn!(areas = total, "no initial pair with defined similarity");
            observer.on_log(&format!("No initial pair found: {err}"));
            return AccBuild {
                steps: state.steps,
                active_clusters: state.clusters,
                incomplete: Some(err),
            };
        };

        let global_sim = global.get(&first, &second).unwrap_or_else(|| {
            tracing::debug!(
                first = %first,
                second = %second,
                "no global similarity for initial pair, using local"
            );
            local_sim
        });
        let pair = placer::place_pair(&first, &second, local_sim, global_sim, self.unit);
        state.clusters.push(pair);
        state.placed.extend([first.clone(), second.clone()]);
        state.record(
            observer,
            StepAction::Initial,
            [first.clone(), second.clone()].into_iter().collect(),
            format!(
                "Initial: {first} and {second} (local={local_sim:.3}, global={global_sim:.3})"
            ),
        );

        let finder = PairFinder::new(&local, &global);
        let mut incomplete = None;

        while state.placed.len() < total || state.clusters.len() > 1 {
            let candidate = match finder.find(&state.placed, &state.clusters) {
                Ok(candidate) => candidate,
                Err(err) => {
                    tracing::warn!(
                        placed = state.placed.len(),
                        areas = total,
                        active_clusters = state.clusters.len(),
                        "build stopped early: {err}"
                    );
                    observer.on_log(&format!("Stopping: {err}"));
                    incomplete = Some(err);
                    break;
                }
            };

            match candidate.kind {
                CandidateKind::NewPair { first, second } => {
                    let local_sim = candidate.score;
                    let global_sim = candidate.global_estimate;
                    let pair =
                        placer::place_pair(&first, &second, local_sim, global_sim, self.unit);
                    state.clusters.push(pair);
                    state.placed.extend([first.clone(), second.clone()]);
                    state.record(
                        observer,
                        StepAction::NewPair,
                        [first.clone(), second.clone()].into_iter().collect(),
                        format!(
                            "New pair: {first} and {second} \
                             (local={local_sim:.3}, global={global_sim:.3})"
                        ),
                    );
                }
                CandidateKind::AddToCluster { cluster, area } => {
                    let target = &state.clusters[cluster];
                    let single: BTreeSet<Area> = [area.clone()].into_iter().collect();
                    let local_sim = aggregate(self.method, &target.members, &single, &local);
                    let global_sim = aggregate(self.method, &target.members, &single, &global);
                    let description = format!(
                        "Add {area} to cluster {} (sim={local_sim:.3})",
                        target.structure
                    );
                    let grown =
                        placer::attach_area(target, &area, local_sim, global_sim, self.unit);
                    state.clusters[cluster] = grown;
                    state.placed.insert(area);
                    state.record(observer, StepAction::AddArea, single, description);
                }
                CandidateKind::MergeClusters { first, second } => {
                    let (a, b) = (&state.clusters[first], &state.clusters[second]);
                    let local_sim = aggregate(self.method, &a.members, &b.members, &local);
                    let global_sim = aggregate(self.method, &a.members, &b.members, &global);
                    let description = format!(
                        "Merge clusters {} and {} (sim={local_sim:.3})",
                        a.structure, b.structure
                    );
                    let merged = placer::merge_clusters(a, b, local_sim, global_sim, self.unit);
                    // second > first, so removing it first keeps `first` valid.
                    state.clusters.remove(second);
                    state.clusters.remove(first);
                    state.clusters.push(merged);
                    // A merge places nothing new.
                    state.record(
                        observer,
                        StepAction::MergeClusters,
                        BTreeSet::new(),
                        description,
                    );
                }
            }
        }

        let build = AccBuild {
            steps: state.steps,
            active_clusters: state.clusters,
            incomplete,
        };
        tracing::info!(
            steps = build.steps.len(),
            complete = build.is_complete(),
            active_clusters = build.active_clusters.len(),
            "ACC build finished"
        );
        observer.on_log(&format!("Finished after {} steps", build.steps.len()));
        build
    }
}
