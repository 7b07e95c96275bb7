//! Business-rule sanity checks over a fitted parameter set.
//!
//! Each check perturbs one feature of a fixed base case and asserts the
//! probability moves the way collections experience says it must. A model
//! that fails here is miscalibrated regardless of its held-out metrics.

use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;
use crate::features::FeatureVector;
use crate::model::ParameterSet;
use crate::scoring::engine::probability;

/// Thresholds for the sanity suite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationParams {
    /// Minimum probability spread between the best and worst compound case.
    #[serde(default = "default_min_spread")]
    pub min_spread: f64,
}

fn default_min_spread() -> f64 {
    0.20
}

impl Default for ValidationParams {
    fn default() -> Self {
        Self {
            min_spread: default_min_spread(),
        }
    }
}

/// Result of one sanity check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

/// All check outcomes for one model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SanityReport {
    pub checks: Vec<CheckOutcome>,
}

impl SanityReport {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn total(&self) -> usize {
        self.checks.len()
    }
}

fn base_case() -> FeatureVector {
    FeatureVector::from_pairs(&[
        ("ageing", 0.5),
        ("log_amount", 1.2),
        ("attempts", 0.4),
        ("staleness", 0.5),
        ("dispute", 0.0),
        ("ptp_active", 0.0),
    ])
}

fn with(base: &FeatureVector, feature: &str, value: f64) -> FeatureVector {
    let mut fv = base.clone();
    fv.insert(feature, value);
    fv
}

fn directional_check(
    name: &'static str,
    before: f64,
    after: f64,
    increases: bool,
) -> CheckOutcome {
    let passed = if increases { after > before } else { after < before };
    CheckOutcome {
        name,
        passed,
        detail: format!("{:.1}% -> {:.1}%", before * 100.0, after * 100.0),
    }
}

/// Run the six business checks against a parameter set.
pub fn run_sanity_checks(
    params: &ParameterSet,
    validation: &ValidationParams,
) -> Result<SanityReport, ScoringError> {
    let base = base_case();
    let base_prob = probability(params, &base)?;

    let mut checks = Vec::with_capacity(6);

    let ptp_prob = probability(params, &with(&base, "ptp_active", 1.0))?;
    checks.push(directional_check(
        "Active PTP increases recovery probability",
        base_prob,
        ptp_prob,
        true,
    ));

    let dispute_prob = probability(params, &with(&base, "dispute", 1.0))?;
    checks.push(directional_check(
        "Active dispute reduces recovery probability",
        base_prob,
        dispute_prob,
        false,
    ));

    let older_prob = probability(params, &with(&base, "ageing", 0.9))?;
    checks.push(directional_check(
        "Higher ageing reduces recovery probability",
        base_prob,
        older_prob,
        false,
    ));

    let engaged_prob = probability(params, &with(&base, "attempts", 0.9))?;
    checks.push(directional_check(
        "More contact attempts increase recovery probability",
        base_prob,
        engaged_prob,
        true,
    ));

    let fresh_prob = probability(params, &with(&base, "staleness", 0.1))?;
    checks.push(directional_check(
        "Recently updated cases recover more often",
        base_prob,
        fresh_prob,
        true,
    ));

    let best = FeatureVector::from_pairs(&[
        ("ageing", 0.2),
        ("log_amount", 1.5),
        ("attempts", 0.8),
        ("staleness", 0.2),
        ("dispute", 0.0),
        ("ptp_active", 1.0),
    ]);
    let worst = FeatureVector::from_pairs(&[
        ("ageing", 0.9),
        ("log_amount", 0.8),
        ("attempts", 0.1),
        ("staleness", 0.9),
        ("dispute", 1.0),
        ("ptp_active", 0.0),
    ]);
    let best_prob = probability(params, &best)?;
    let worst_prob = probability(params, &worst)?;
    checks.push(CheckOutcome {
        name: "Positive factors compound",
        passed: best_prob > worst_prob + validation.min_spread,
        detail: format!(
            "worst {:.1}% vs best {:.1}% (required spread {:.0}pp)",
            worst_prob * 100.0,
            best_prob * 100.0,
            validation.min_spread * 100.0
        ),
    });

    Ok(SanityReport { checks })
}
