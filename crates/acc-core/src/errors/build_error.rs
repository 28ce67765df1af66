//! Builder errors.

use super::error_code::{self, AccErrorCode};

/// Conditions that stop the iterative builder before a single cluster
/// holds every area.
///
/// These are surfaced on the build result rather than returned as `Err`:
/// the steps recorded so far remain valid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("no scorable candidate: {unplaced} unplaced areas, {active_clusters} active clusters")]
    NoCandidate {
        unplaced: usize,
        active_clusters: usize,
    },
}

impl AccErrorCode for BuildError {
    fn error_code(&self) -> &'static str {
        error_code::NO_CANDIDATE
    }
}
