//! Linkage rule for collapsing many pairwise similarities into one value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkageMethod {
    /// Mean over all defined cross pairs.
    #[default]
    Average,
    /// Maximum over all defined cross pairs.
    Single,
    /// Minimum over all defined cross pairs.
    Complete,
}

impl LinkageMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Single => "single",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for LinkageMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkageMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "average" => Ok(Self::Average),
            "single" => Ok(Self::Single),
            "complete" => Ok(Self::Complete),
            other => Err(ConfigError::InvalidValue {
                field: "method".to_string(),
                message: format!(
                    "unknown linkage method '{other}', expected average, single or complete"
                ),
            }),
        }
    }
}
