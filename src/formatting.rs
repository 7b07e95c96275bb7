//! Display helpers: priority labels and number formatting for terminal
//! reports. Presentation only; the scoring core never consults these.

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Priority-score cutoffs for operator-facing labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityLabelThresholds {
    #[serde(default = "default_critical_threshold")]
    pub critical: f64,
    #[serde(default = "default_high_threshold")]
    pub high: f64,
    #[serde(default = "default_medium_threshold")]
    pub medium: f64,
}

fn default_critical_threshold() -> f64 {
    7000.0
}

fn default_high_threshold() -> f64 {
    5000.0
}

fn default_medium_threshold() -> f64 {
    3000.0
}

impl Default for PriorityLabelThresholds {
    fn default() -> Self {
        Self {
            critical: default_critical_threshold(),
            high: default_high_threshold(),
            medium: default_medium_threshold(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriorityLabel {
    Critical,
    High,
    Medium,
    Low,
}

impl PriorityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Colorized form for terminal output.
    pub fn colored(&self) -> String {
        match self {
            Self::Critical => self.as_str().red().bold().to_string(),
            Self::High => self.as_str().yellow().bold().to_string(),
            Self::Medium => self.as_str().yellow().to_string(),
            Self::Low => self.as_str().green().to_string(),
        }
    }
}

pub fn priority_label(score: f64, thresholds: &PriorityLabelThresholds) -> PriorityLabel {
    if score >= thresholds.critical {
        PriorityLabel::Critical
    } else if score >= thresholds.high {
        PriorityLabel::High
    } else if score >= thresholds.medium {
        PriorityLabel::Medium
    } else {
        PriorityLabel::Low
    }
}

/// One-decimal percent, e.g. `61.3%`.
pub fn format_probability(prob: f64) -> String {
    format!("{:.1}%", prob * 100.0)
}

/// Priority scores print as whole numbers.
pub fn format_priority_score(score: f64) -> String {
    format!("{score:.0}")
}
