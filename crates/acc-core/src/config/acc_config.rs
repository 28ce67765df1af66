//! Top-level ACC configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Acc2Config, BuildConfig};
use crate::errors::ConfigError;
use crate::model::{Acc2Options, LinkageMethod};

/// Top-level configuration aggregating the builder and ACC2 sections.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ACC_UNIT`, `ACC_METHOD`, `ACC_MAX_ANGLE`)
/// 2. Config file passed to [`AccConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AccConfig {
    pub build: BuildConfig,
    pub acc2: Acc2Config,
}

impl AccConfig {
    /// Load from `path` (defaults when the file does not exist), apply
    /// environment overrides, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file without overrides or validation.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(unit) = self.build.unit {
            if !(unit > 0.0 && unit.is_finite()) {
                return Err(ConfigError::ValidationFailed {
                    field: "build.unit".to_string(),
                    message: "must be a finite number greater than 0".to_string(),
                });
            }
        }
        let min = self.acc2.effective_min_diameter();
        let max = self.acc2.effective_max_diameter();
        if min <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "acc2.min_diameter".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if max <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "acc2.max_diameter".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if min >= max {
            return Err(ConfigError::ValidationFailed {
                field: "acc2.min_diameter".to_string(),
                message: format!("must be less than acc2.max_diameter ({max})"),
            });
        }
        if let Some(max_angle) = self.acc2.max_angle {
            if !(max_angle > 0.0 && max_angle.is_finite()) {
                return Err(ConfigError::ValidationFailed {
                    field: "acc2.max_angle".to_string(),
                    message: "must be a finite number greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Unparseable values are
    /// ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("ACC_UNIT") {
            if let Ok(v) = val.trim().parse::<f64>() {
                self.build.unit = Some(v);
            }
        }
        if let Some(val) = lookup("ACC_METHOD") {
            match val.parse::<LinkageMethod>() {
                Ok(method) => self.build.method = Some(method),
                Err(e) => ::tracing::warn!(error = %e, "ignoring ACC_METHOD override"),
            }
        }
        if let Some(val) = lookup("ACC_MAX_ANGLE") {
            if let Ok(v) = val.trim().parse::<f64>() {
                self.acc2.max_angle = Some(v);
            }
        }
    }

    pub fn unit(&self) -> f64 {
        self.build.effective_unit()
    }

    pub fn method(&self) -> LinkageMethod {
        self.build.effective_method()
    }

    pub fn acc2_options(&self) -> Acc2Options {
        self.acc2.to_options()
    }
}
