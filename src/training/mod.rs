//! Offline fitting: synthetic data, logistic-regression fit, evaluation.

pub mod fit;
pub mod metrics;
pub mod synth;

pub use fit::{design_matrix, fit, FitConfig, FittedModel};
pub use synth::{generate, LabeledCase, SynthConfig};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Split cases into train/test, preserving the label ratio in both halves.
pub fn stratified_split(
    cases: &[LabeledCase],
    test_fraction: f64,
    seed: u64,
) -> (Vec<LabeledCase>, Vec<LabeledCase>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positives: Vec<&LabeledCase> = cases.iter().filter(|c| c.recovered).collect();
    let mut negatives: Vec<&LabeledCase> = cases.iter().filter(|c| !c.recovered).collect();
    positives.shuffle(&mut rng);
    negatives.shuffle(&mut rng);

    let mut train = Vec::with_capacity(cases.len());
    let mut test = Vec::new();
    for group in [positives, negatives] {
        let test_count = (group.len() as f64 * test_fraction).round() as usize;
        for (i, case) in group.into_iter().enumerate() {
            if i < test_count {
                test.push(case.clone());
            } else {
                train.push(case.clone());
            }
        }
    }
    (train, test)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stratified_split_preserves_counts() {
        let cases = generate(
            &SynthConfig {
                samples: 400,
                seed: 7,
            },
            &crate::features::NormalizationParams::default(),
        )
        .unwrap();
        let (train, test) = stratified_split(&cases, 0.25, 7);
        assert_eq!(train.len() + test.len(), cases.len());

        let total_pos = cases.iter().filter(|c| c.recovered).count();
        let test_pos = test.iter().filter(|c| c.recovered).count();
        let expected_test_pos = (total_pos as f64 * 0.25).round() as usize;
        assert_eq!(test_pos, expected_test_pos);
    }

    #[test]
    fn test_stratified_split_is_seeded() {
        let cases = generate(
            &SynthConfig {
                samples: 200,
                seed: 3,
            },
            &crate::features::NormalizationParams::default(),
        )
        .unwrap();
        let (train_a, _) = stratified_split(&cases, 0.2, 11);
        let (train_b, _) = stratified_split(&cases, 0.2, 11);
        assert_eq!(train_a, train_b);
    }
}
