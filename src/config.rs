//! Optional `recoup.toml` configuration.
//!
//! Every field has a default, so a missing file or an empty file is a valid
//! configuration. The loaded value is passed explicitly to whatever needs
//! it; nothing in the crate reads configuration through global state.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::features::NormalizationParams;
use crate::formatting::PriorityLabelThresholds;
use crate::sanity::ValidationParams;
use crate::scoring::engine::PriorityParams;

pub const DEFAULT_CONFIG_FILE: &str = "recoup.toml";

/// Trainer defaults, overridable per-run from the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingDefaults {
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_epochs")]
    pub epochs: usize,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,
}

fn default_samples() -> usize {
    5000
}

fn default_seed() -> u64 {
    42
}

fn default_epochs() -> usize {
    2000
}

fn default_learning_rate() -> f64 {
    0.5
}

fn default_test_fraction() -> f64 {
    0.2
}

impl Default for TrainingDefaults {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            seed: default_seed(),
            epochs: default_epochs(),
            learning_rate: default_learning_rate(),
            test_fraction: default_test_fraction(),
        }
    }
}

/// Root configuration: one section per tunable subsystem.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecoupConfig {
    #[serde(default)]
    pub normalization: NormalizationParams,
    #[serde(default)]
    pub priority: PriorityParams,
    #[serde(default)]
    pub labels: PriorityLabelThresholds,
    #[serde(default)]
    pub training: TrainingDefaults,
    #[serde(default)]
    pub validation: ValidationParams,
}

impl RecoupConfig {
    /// Load configuration. An explicit path must exist; otherwise
    /// `recoup.toml` is read if present, else defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: RecoupConfig = toml::from_str("").unwrap();
        assert_eq!(config, RecoupConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: RecoupConfig = toml::from_str(
            r#"
            [priority]
            urgency_divisor_days = 60.0

            [validation]
            min_spread = 0.3
            "#,
        )
        .unwrap();
        assert_eq!(config.priority.urgency_divisor_days, 60.0);
        assert_eq!(config.priority.urgency_window_days, 365.0);
        assert_eq!(config.validation.min_spread, 0.3);
        assert_eq!(config.normalization, NormalizationParams::default());
    }

    #[test]
    fn test_default_constants_match_business_formulas() {
        let config = RecoupConfig::default();
        assert_eq!(config.normalization.ageing_cap_days, 120.0);
        assert_eq!(config.normalization.staleness_cap_days, 14.0);
        assert_eq!(config.priority.urgency_window_days, 365.0);
        assert_eq!(config.priority.urgency_divisor_days, 90.0);
        assert_eq!(config.labels.critical, 7000.0);
    }
}
