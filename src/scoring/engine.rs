//! Linear scorer: logit, logistic transform and the priority heuristic.
//!
//! Pure functions of their inputs. The parameter set is borrowed immutably,
//! so calls are reentrant and safe from any number of threads.

use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;
use crate::features::FeatureVector;
use crate::model::ParameterSet;

/// Fallbacks for the priority heuristic when a custom parameter set scores
/// vectors without the named features (a mid-range case).
const FALLBACK_LOG_AMOUNT: f64 = 11.5;
const FALLBACK_AGEING: f64 = 0.5;

/// Business constants behind the priority score. The formula is
/// `amount * probability * urgency` with `amount = e^(scale * log_amount)`
/// and `urgency = 1 + ageing * window / divisor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityParams {
    /// Days the normalized ageing value spans.
    #[serde(default = "default_urgency_window_days")]
    pub urgency_window_days: f64,
    /// Days of age that double the urgency multiplier.
    #[serde(default = "default_urgency_divisor_days")]
    pub urgency_divisor_days: f64,
    /// Exponent scale when inverting the log-amount feature.
    #[serde(default = "default_amount_scale")]
    pub amount_scale: f64,
}

fn default_urgency_window_days() -> f64 {
    365.0
}

fn default_urgency_divisor_days() -> f64 {
    90.0
}

fn default_amount_scale() -> f64 {
    1.0
}

impl Default for PriorityParams {
    fn default() -> Self {
        Self {
            urgency_window_days: default_urgency_window_days(),
            urgency_divisor_days: default_urgency_divisor_days(),
            amount_scale: default_amount_scale(),
        }
    }
}

/// Output of a single scoring call. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    /// Recovery probability, strictly inside (0, 1).
    pub probability: f64,
    /// Business ranking heuristic, ≥ 0. Not a probability.
    pub priority_score: f64,
    /// Raw linear score before the logistic transform.
    pub logit: f64,
}

/// Numerically stable logistic sigmoid.
pub(crate) fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let ez = z.exp();
        ez / (1.0 + ez)
    }
}

/// Compute `bias + Σ weight * value`, enforcing the exact-match invariant
/// between vector keys and weight keys in both directions.
pub fn logit(params: &ParameterSet, features: &FeatureVector) -> Result<f64, ScoringError> {
    let mut z = params.bias;
    for (name, value) in features.iter() {
        let weight = params
            .weights
            .get(name)
            .ok_or_else(|| ScoringError::UnknownFeature(name.to_string()))?;
        z += weight * value;
    }
    for name in params.weights.keys() {
        if features.get(name).is_none() {
            return Err(ScoringError::MissingFeature(name.clone()));
        }
    }
    Ok(z)
}

/// Recovery probability for a feature vector.
pub fn probability(params: &ParameterSet, features: &FeatureVector) -> Result<f64, ScoringError> {
    Ok(sigmoid(logit(params, features)?))
}

/// Full prediction: probability, priority score and raw logit.
pub fn predict(
    params: &ParameterSet,
    features: &FeatureVector,
    priority: &PriorityParams,
) -> Result<Prediction, ScoringError> {
    let z = logit(params, features)?;
    let prob = sigmoid(z);
    Ok(Prediction {
        probability: prob,
        priority_score: priority_score(features, prob, priority),
        logit: z,
    })
}

/// `amount * probability * urgency`. Unbounded above; never clipped.
fn priority_score(features: &FeatureVector, prob: f64, params: &PriorityParams) -> f64 {
    let log_amount = features.get("log_amount").unwrap_or(FALLBACK_LOG_AMOUNT);
    let ageing = features.get("ageing").unwrap_or(FALLBACK_AGEING);
    let amount = (params.amount_scale * log_amount).exp();
    let urgency = 1.0 + ageing * params.urgency_window_days / params.urgency_divisor_days;
    amount * prob * urgency
}
