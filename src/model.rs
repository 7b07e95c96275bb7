//! Parameter-set loading, validation and persistence.
//!
//! The parameter file is the single artifact shared between offline fitting
//! and inference. It is read once and never mutated afterwards; every
//! scoring call borrows it immutably.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;

/// Fitted model parameters plus explanation tables and training metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Parameter-file format version.
    pub version: String,
    /// Date the model was fitted (informational).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trained_on: Option<String>,
    /// Number of cases the fit was run on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_samples: Option<usize>,
    /// Held-out accuracy at the 0.5 threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_accuracy: Option<f64>,
    /// Held-out ROC-AUC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_auc: Option<f64>,
    /// Intercept term of the linear score.
    pub bias: f64,
    /// Per-feature weights.
    pub weights: BTreeMap<String, f64>,
    /// Per-feature low/medium/high explanation texts.
    #[serde(default)]
    pub reason_mappings: BTreeMap<String, [String; 3]>,
}

impl ParameterSet {
    /// Parse and validate a parameter set from JSON.
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        let params: Self = serde_json::from_str(json)
            .map_err(|e| ScoringError::MalformedParameterSet(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Load a parameter set from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read parameter file {}", path.display()))?;
        let params = Self::from_json(&content)
            .with_context(|| format!("invalid parameter file {}", path.display()))?;
        log::debug!(
            "loaded parameter set v{} ({} weights)",
            params.version,
            params.weights.len()
        );
        Ok(params)
    }

    /// Serialize to the on-disk JSON form.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the parameter file.
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let json = self.to_pretty_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write parameter file {}", path.display()))?;
        Ok(())
    }

    /// Reject structurally unusable parameter sets before any scoring.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if !self.bias.is_finite() {
            return Err(ScoringError::MalformedParameterSet(format!(
                "non-finite bias: {}",
                self.bias
            )));
        }
        if self.weights.is_empty() {
            return Err(ScoringError::MalformedParameterSet(
                "empty weight table".to_string(),
            ));
        }
        for (name, weight) in &self.weights {
            if !weight.is_finite() {
                return Err(ScoringError::MalformedParameterSet(format!(
                    "non-finite weight for '{name}': {weight}"
                )));
            }
        }
        Ok(())
    }
}

/// Explanation texts shipped with freshly trained models: one low/medium/high
/// triple per feature (binary features reuse the high text for the on state).
pub fn default_reason_mappings() -> BTreeMap<String, [String; 3]> {
    let entries: [(&str, [&str; 3]); 6] = [
        (
            "ageing",
            [
                "Low ageing increases recovery",
                "Medium ageing moderately affects recovery",
                "High ageing reduces recovery significantly",
            ],
        ),
        (
            "log_amount",
            [
                "Low amount case",
                "Medium amount case",
                "High amount increases priority",
            ],
        ),
        (
            "attempts",
            [
                "No recent contact attempts",
                "Some contact attempts made",
                "Active engagement with customer",
            ],
        ),
        (
            "staleness",
            [
                "Recently updated case",
                "Moderate staleness",
                "Stale case needs immediate attention",
            ],
        ),
        (
            "dispute",
            [
                "No active dispute",
                "Active dispute reduces recovery",
                "Active dispute reduces recovery",
            ],
        ),
        (
            "ptp_active",
            [
                "No payment promise",
                "Active PTP significantly increases recovery",
                "Active PTP significantly increases recovery",
            ],
        ),
    ];

    entries
        .into_iter()
        .map(|(name, texts)| (name.to_string(), texts.map(String::from)))
        .collect()
}
