//! Append-only step log entries.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Area, Cluster};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAction {
    Initial,
    NewPair,
    AddArea,
    MergeClusters,
}

impl StepAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::NewPair => "new_pair",
            Self::AddArea => "add_area",
            Self::MergeClusters => "merge_clusters",
        }
    }
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded builder iteration. `active_clusters` is a snapshot taken
/// after the step was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub index: usize,
    pub action: StepAction,
    pub active_clusters: Vec<Cluster>,
    /// Areas placed by this step: both areas of a pair, the attached area,
    /// nothing for a merge.
    pub highlighted_members: BTreeSet<Area>,
    pub description: String,
    pub placed_areas: BTreeSet<Area>,
}

impl Step {
    /// Find the active cluster holding `area` in this snapshot.
    pub fn cluster_of(&self, area: &str) -> Option<&Cluster> {
        self.active_clusters.iter().find(|c| c.contains(area))
    }
}
