//! Builder configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_METHOD, DEFAULT_UNIT};
use crate::model::LinkageMethod;

/// Settings of the iterative builder.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BuildConfig {
    /// Length unit in `diameter = unit / global_sim`. Default: 1.0.
    pub unit: Option<f64>,
    /// Linkage method for authoritative aggregation. Default: average.
    pub method: Option<LinkageMethod>,
}

impl BuildConfig {
    pub fn effective_unit(&self) -> f64 {
        self.unit.unwrap_or(DEFAULT_UNIT)
    }

    pub fn effective_method(&self) -> LinkageMethod {
        self.method.unwrap_or(DEFAULT_METHOD)
    }
}
