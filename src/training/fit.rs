//! Six-feature logistic regression fitted by batch gradient descent on
//! log-loss.

use std::collections::BTreeMap;

use crate::features::FEATURE_NAMES;
use crate::scoring::engine::sigmoid;
use crate::training::synth::LabeledCase;

/// Gradient-descent settings.
#[derive(Debug, Clone, PartialEq)]
pub struct FitConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    /// L2 penalty on the weights (not the bias). Zero disables it.
    pub l2: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            epochs: 2000,
            l2: 0.0,
        }
    }
}

/// Fitted coefficients in [`FEATURE_NAMES`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedModel {
    pub bias: f64,
    pub weights: [f64; 6],
}

impl FittedModel {
    pub fn predict_proba(&self, x: &[f64; 6]) -> f64 {
        let z = self.bias
            + self
                .weights
                .iter()
                .zip(x.iter())
                .map(|(w, v)| w * v)
                .sum::<f64>();
        sigmoid(z)
    }

    /// Weights keyed by feature name, for the parameter file.
    pub fn named_weights(&self) -> BTreeMap<String, f64> {
        FEATURE_NAMES
            .iter()
            .zip(self.weights)
            .map(|(name, w)| (name.to_string(), w))
            .collect()
    }
}

/// Resolve feature vectors into dense rows once, before the descent loop.
pub fn design_matrix(cases: &[LabeledCase]) -> (Vec<[f64; 6]>, Vec<bool>) {
    let xs = cases
        .iter()
        .map(|c| {
            let mut row = [0.0; 6];
            for (slot, name) in row.iter_mut().zip(FEATURE_NAMES) {
                *slot = c.features.get(name).unwrap_or(0.0);
            }
            row
        })
        .collect();
    let ys = cases.iter().map(|c| c.recovered).collect();
    (xs, ys)
}

/// Fit by full-batch gradient descent. Returns `None` on empty or
/// mismatched input, a non-positive learning rate, or zero epochs.
pub fn fit(xs: &[[f64; 6]], ys: &[bool], cfg: &FitConfig) -> Option<FittedModel> {
    if xs.len() != ys.len() || xs.is_empty() {
        return None;
    }
    if !(cfg.learning_rate > 0.0) || cfg.epochs == 0 {
        return None;
    }

    let n = xs.len() as f64;
    let mut bias = 0.0;
    let mut weights = [0.0f64; 6];

    for _ in 0..cfg.epochs {
        let mut grad_bias = 0.0;
        let mut grad_weights = [0.0f64; 6];

        for (x, &y) in xs.iter().zip(ys.iter()) {
            let z = bias
                + weights
                    .iter()
                    .zip(x.iter())
                    .map(|(w, v)| w * v)
                    .sum::<f64>();
            let diff = sigmoid(z) - if y { 1.0 } else { 0.0 };
            grad_bias += diff;
            for (g, v) in grad_weights.iter_mut().zip(x.iter()) {
                *g += diff * v;
            }
        }

        bias -= cfg.learning_rate * grad_bias / n;
        for (w, g) in weights.iter_mut().zip(grad_weights) {
            *w -= cfg.learning_rate * (g / n + cfg.l2 * *w);
        }
    }

    Some(FittedModel { bias, weights })
}
