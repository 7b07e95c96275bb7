//! Seeded synthetic debt-collection cases for model fitting.
//!
//! Raw attributes are drawn first and pushed through the same normalizer
//! inference uses, so the fitted weights apply to production features
//! without rescaling. Labels come from a ground-truth logit plus noise;
//! the weight directions are what the sanity checks later assert.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Distribution, Exp, LogNormal, Normal, Poisson};

use crate::features::{normalize, CaseAttributes, FeatureVector, NormalizationParams, FEATURE_NAMES};
use crate::scoring::engine::sigmoid;

/// Ground-truth intercept of the label model.
pub const TRUE_BIAS: f64 = -0.5;

/// Ground-truth weights in [`FEATURE_NAMES`] order: older, staler and
/// disputed cases recover less; engagement, amount and an active PTP help.
pub const TRUE_WEIGHTS: [f64; 6] = [-3.0, 0.15, 0.25, -1.5, -1.8, 2.5];

const LABEL_NOISE_SIGMA: f64 = 0.8;

const MAX_AGEING_DAYS: f64 = 180.0;
const MIN_AMOUNT: f64 = 10_000.0;
const MAX_AMOUNT: f64 = 5_000_000.0;
const MAX_ATTEMPTS: f64 = 15.0;
const MAX_STALENESS_DAYS: f64 = 30.0;

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthConfig {
    pub samples: usize,
    pub seed: u64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            samples: 5000,
            seed: 42,
        }
    }
}

/// One generated case: raw attributes, normalized features, outcome label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledCase {
    pub case: CaseAttributes,
    pub features: FeatureVector,
    pub recovered: bool,
}

/// Generate `cfg.samples` labeled cases. Same seed, same cases.
pub fn generate(cfg: &SynthConfig, norm: &NormalizationParams) -> Result<Vec<LabeledCase>> {
    let mut rng = StdRng::seed_from_u64(cfg.seed);

    // ageing skews towards newer cases; amounts are log-normal
    let ageing_shape = Beta::new(2.0, 5.0)?;
    let amount_dist = LogNormal::<f64>::new(11.5, 0.8)?;
    let staleness_noise = Exp::new(0.2)?;
    let label_noise = Normal::new(0.0, LABEL_NOISE_SIGMA)?;

    let mut cases = Vec::with_capacity(cfg.samples);
    for _ in 0..cfg.samples {
        let ageing_days = ageing_shape.sample(&mut rng) * MAX_AGEING_DAYS;
        let age_fraction = ageing_days / MAX_AGEING_DAYS;

        let amount = amount_dist.sample(&mut rng).clamp(MIN_AMOUNT, MAX_AMOUNT);

        // newer cases get worked harder
        let attempt_rate = (4.0 * (1.0 - age_fraction.sqrt())).max(0.05);
        let attempts_count = Poisson::new(attempt_rate)?
            .sample(&mut rng)
            .min(MAX_ATTEMPTS) as u32;

        let days_since_update =
            (ageing_days * 0.3 + staleness_noise.sample(&mut rng)).clamp(0.0, MAX_STALENESS_DAYS);

        let ageing_norm = (ageing_days / norm.ageing_cap_days).clamp(0.0, 1.0);
        let attempts_norm = (f64::from(attempts_count) / norm.attempts_cap).clamp(0.0, 1.0);

        let dispute_prob = (0.1 + 0.3 * ageing_norm).clamp(0.0, 1.0);
        let has_dispute = rng.gen_bool(dispute_prob);

        let dispute_penalty = if has_dispute { 0.2 } else { 0.0 };
        let ptp_prob = (0.15 + 0.1 * attempts_norm - dispute_penalty).clamp(0.0, 0.6);
        let ptp_active = rng.gen_bool(ptp_prob);

        let case = CaseAttributes {
            amount,
            ageing_days,
            attempts_count,
            days_since_update,
            has_dispute,
            ptp_active,
        };
        let features = normalize(&case, norm);

        let mut z = TRUE_BIAS + label_noise.sample(&mut rng);
        for (name, weight) in FEATURE_NAMES.iter().zip(TRUE_WEIGHTS) {
            z += weight * features.get(name).unwrap_or(0.0);
        }
        let recovered = rng.gen::<f64>() < sigmoid(z);

        cases.push(LabeledCase {
            case,
            features,
            recovered,
        });
    }

    log::debug!(
        "generated {} cases, {:.1}% recovered",
        cases.len(),
        100.0 * cases.iter().filter(|c| c.recovered).count() as f64 / cases.len().max(1) as f64
    );
    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_cases() {
        let cfg = SynthConfig {
            samples: 50,
            seed: 42,
        };
        let norm = NormalizationParams::default();
        let a = generate(&cfg, &norm).unwrap();
        let b = generate(&cfg, &norm).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let norm = NormalizationParams::default();
        let a = generate(
            &SynthConfig {
                samples: 50,
                seed: 1,
            },
            &norm,
        )
        .unwrap();
        let b = generate(
            &SynthConfig {
                samples: 50,
                seed: 2,
            },
            &norm,
        )
        .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_features_respect_contracted_ranges() {
        let cases = generate(&SynthConfig::default(), &NormalizationParams::default()).unwrap();
        for labeled in &cases {
            for name in ["ageing", "attempts", "staleness"] {
                let v = labeled.features.get(name).unwrap();
                assert!((0.0..=1.0).contains(&v), "{name} out of range: {v}");
            }
            for name in ["dispute", "ptp_active"] {
                let v = labeled.features.get(name).unwrap();
                assert!(v == 0.0 || v == 1.0);
            }
            assert!(labeled.features.get("log_amount").unwrap() > 0.0);
            assert!(labeled.case.amount >= MIN_AMOUNT && labeled.case.amount <= MAX_AMOUNT);
        }
    }

    #[test]
    fn test_label_base_rate_is_plausible() {
        let cases = generate(&SynthConfig::default(), &NormalizationParams::default()).unwrap();
        let rate = cases.iter().filter(|c| c.recovered).count() as f64 / cases.len() as f64;
        // ground-truth logit keeps recoveries well away from degenerate rates
        assert!(rate > 0.1 && rate < 0.9, "recovery rate {rate}");
    }
}
