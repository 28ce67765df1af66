//! ACC2 post-processing configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_DIAMETER, DEFAULT_MIN_DIAMETER};
use crate::model::Acc2Options;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Acc2Config {
    /// Smallest circle diameter after rescale. Default: 1.0.
    pub min_diameter: Option<f64>,
    /// Largest circle diameter after rescale. Default: 2.0.
    pub max_diameter: Option<f64>,
    /// Total angular span areas are compressed into. Unset: no compression.
    pub max_angle: Option<f64>,
    /// Skip the radius rescale entirely. Default: false.
    pub keep_radii: Option<bool>,
}

impl Acc2Config {
    pub fn effective_min_diameter(&self) -> f64 {
        self.min_diameter.unwrap_or(DEFAULT_MIN_DIAMETER)
    }

    pub fn effective_max_diameter(&self) -> f64 {
        self.max_diameter.unwrap_or(DEFAULT_MAX_DIAMETER)
    }

    pub fn effective_keep_radii(&self) -> bool {
        self.keep_radii.unwrap_or(false)
    }

    /// Transform options with every default resolved.
    pub fn to_options(&self) -> Acc2Options {
        let mut options = Acc2Options::default();
        if let Some(max_angle) = self.max_angle {
            options = options.with_max_angle(max_angle);
        }
        if !self.effective_keep_radii() {
            options = options
                .with_diameter_range(self.effective_min_diameter(), self.effective_max_diameter());
        }
        options
    }
}
