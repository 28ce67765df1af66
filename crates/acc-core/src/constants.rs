//! Shared constants for the ACC layout engine.

use crate::model::LinkageMethod;

/// Default length unit for the `diameter = unit / global_sim` formula.
pub const DEFAULT_UNIT: f64 = 1.0;

/// Default linkage method for cluster-to-cluster aggregation.
pub const DEFAULT_METHOD: LinkageMethod = LinkageMethod::Average;

/// Diameter multiplier used when `global_sim <= 0` (instead of dividing by zero).
pub const DEGENERATE_DIAMETER_FACTOR: f64 = 100.0;

/// Linkage result when no cross pair has a defined similarity.
pub const MISSING_LINKAGE_SIMILARITY: f64 = 0.5;

/// Contribution of an undefined pair to a selection probe.
pub const MISSING_PROBE_SIMILARITY: f64 = 0.0;

/// Similarity of an area with itself.
pub const SELF_SIMILARITY: f64 = 1.0;

/// Largest angular span a single merge can subtend, in degrees.
pub const MAX_SPAN_DEGREES: f64 = 180.0;

/// Radius of the innermost ACC2 circle, where every area sits.
pub const ACC2_AREA_RADIUS: f64 = 0.5;

/// Default lower bound of the ACC2 diameter range.
pub const DEFAULT_MIN_DIAMETER: f64 = 1.0;

/// Default upper bound of the ACC2 diameter range.
pub const DEFAULT_MAX_DIAMETER: f64 = 2.0;

/// Default tracing filter when `ACC_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "acc=info";
