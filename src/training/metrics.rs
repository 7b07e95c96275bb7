//! Evaluation metrics for the fitted classifier.

use std::cmp::Ordering;

const LOG_LOSS_EPS: f64 = 1e-15;

/// Counts at a fixed decision threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfusionMatrix {
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl ConfusionMatrix {
    pub fn total(&self) -> usize {
        self.true_positives + self.true_negatives + self.false_positives + self.false_negatives
    }

    pub fn accuracy(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        (self.true_positives + self.true_negatives) as f64 / self.total() as f64
    }
}

pub fn confusion_matrix(probs: &[f64], labels: &[bool], threshold: f64) -> ConfusionMatrix {
    let mut cm = ConfusionMatrix {
        true_positives: 0,
        true_negatives: 0,
        false_positives: 0,
        false_negatives: 0,
    };
    for (&p, &y) in probs.iter().zip(labels.iter()) {
        match (p >= threshold, y) {
            (true, true) => cm.true_positives += 1,
            (false, false) => cm.true_negatives += 1,
            (true, false) => cm.false_positives += 1,
            (false, true) => cm.false_negatives += 1,
        }
    }
    cm
}

pub fn accuracy(probs: &[f64], labels: &[bool], threshold: f64) -> f64 {
    confusion_matrix(probs, labels, threshold).accuracy()
}

/// ROC-AUC via the rank statistic. Tied scores share their average rank.
/// Degenerate single-class input returns 0.5.
pub fn roc_auc(probs: &[f64], labels: &[bool]) -> f64 {
    let positives = labels.iter().filter(|&&y| y).count();
    let negatives = labels.len() - positives;
    if positives == 0 || negatives == 0 {
        return 0.5;
    }

    let mut indexed: Vec<(f64, bool)> = probs.iter().copied().zip(labels.iter().copied()).collect();
    indexed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut positive_rank_sum = 0.0;
    let mut i = 0;
    while i < indexed.len() {
        let mut j = i + 1;
        while j < indexed.len() && indexed[j].0 == indexed[i].0 {
            j += 1;
        }
        // ranks i+1..=j collapse to their mean
        let average_rank = (i + 1 + j) as f64 / 2.0;
        for entry in &indexed[i..j] {
            if entry.1 {
                positive_rank_sum += average_rank;
            }
        }
        i = j;
    }

    let p = positives as f64;
    let n = negatives as f64;
    (positive_rank_sum - p * (p + 1.0) / 2.0) / (p * n)
}

/// Mean squared distance between predicted probability and outcome.
pub fn brier_score(probs: &[f64], labels: &[bool]) -> f64 {
    if probs.is_empty() {
        return 0.0;
    }
    probs
        .iter()
        .zip(labels.iter())
        .map(|(&p, &y)| {
            let y = if y { 1.0 } else { 0.0 };
            (p - y) * (p - y)
        })
        .sum::<f64>()
        / probs.len() as f64
}

/// Mean negative log-likelihood, with probabilities clamped away from 0/1.
pub fn log_loss(probs: &[f64], labels: &[bool]) -> f64 {
    if probs.is_empty() {
        return 0.0;
    }
    probs
        .iter()
        .zip(labels.iter())
        .map(|(&p, &y)| {
            let p = p.clamp(LOG_LOSS_EPS, 1.0 - LOG_LOSS_EPS);
            if y {
                -p.ln()
            } else {
                -(1.0 - p).ln()
            }
        })
        .sum::<f64>()
        / probs.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confusion_matrix_counts() {
        let probs = [0.9, 0.8, 0.3, 0.2];
        let labels = [true, false, true, false];
        let cm = confusion_matrix(&probs, &labels, 0.5);
        assert_eq!(cm.true_positives, 1);
        assert_eq!(cm.false_positives, 1);
        assert_eq!(cm.false_negatives, 1);
        assert_eq!(cm.true_negatives, 1);
        assert!((cm.accuracy() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_roc_auc_perfect_ranking() {
        let probs = [0.1, 0.2, 0.8, 0.9];
        let labels = [false, false, true, true];
        assert!((roc_auc(&probs, &labels) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_roc_auc_inverted_ranking() {
        let probs = [0.9, 0.8, 0.2, 0.1];
        let labels = [false, false, true, true];
        assert!(roc_auc(&probs, &labels).abs() < 1e-12);
    }

    #[test]
    fn test_roc_auc_ties_average() {
        // one positive and one negative share the same score
        let probs = [0.5, 0.5];
        let labels = [true, false];
        assert!((roc_auc(&probs, &labels) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_roc_auc_single_class_is_midpoint() {
        assert!((roc_auc(&[0.2, 0.9], &[true, true]) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_brier_score_bounds() {
        assert!((brier_score(&[1.0, 0.0], &[true, false])).abs() < 1e-12);
        assert!((brier_score(&[0.0, 1.0], &[true, false]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_log_loss_handles_confident_wrong_predictions() {
        // clamped away from ln(0)
        let loss = log_loss(&[1.0], &[false]);
        assert!(loss.is_finite());
        assert!(loss > 30.0);
    }
}
