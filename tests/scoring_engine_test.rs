mod common;

use common::{base_features, fixture_model, with_feature};
use proptest::prelude::*;
use recoup::scoring::{predict, probability, PriorityParams};

#[test]
fn ptp_strictly_increases_probability() {
    let model = fixture_model();
    let base = base_features();
    let with_ptp = with_feature(&base, "ptp_active", 1.0);

    let p_base = probability(&model, &base).unwrap();
    let p_ptp = probability(&model, &with_ptp).unwrap();
    assert!(p_ptp > p_base, "{p_ptp} should exceed {p_base}");
}

#[test]
fn dispute_strictly_decreases_probability() {
    let model = fixture_model();
    let base = base_features();
    let with_dispute = with_feature(&base, "dispute", 1.0);

    let p_base = probability(&model, &base).unwrap();
    let p_dispute = probability(&model, &with_dispute).unwrap();
    assert!(p_dispute < p_base, "{p_dispute} should be below {p_base}");
}

#[test]
fn compounded_effects_exceed_twenty_point_spread() {
    let model = fixture_model();
    let base = base_features();

    let mut worst = with_feature(&base, "ageing", 1.0);
    worst.insert("dispute", 1.0);
    worst.insert("ptp_active", 0.0);
    worst.insert("attempts", 0.0);
    worst.insert("staleness", 1.0);

    let mut best = with_feature(&base, "ageing", 0.02);
    best.insert("ptp_active", 1.0);
    best.insert("attempts", 0.8);
    best.insert("staleness", 0.01);
    best.insert("dispute", 0.0);

    let p_worst = probability(&model, &worst).unwrap();
    let p_best = probability(&model, &best).unwrap();
    assert!(
        p_best - p_worst > 0.20,
        "spread {:.3} too small (best {:.3}, worst {:.3})",
        p_best - p_worst,
        p_best,
        p_worst
    );
}

#[test]
fn scoring_is_bit_identical_across_calls() {
    let model = fixture_model();
    let base = base_features();
    let priority = PriorityParams::default();

    let first = predict(&model, &base, &priority).unwrap();
    for _ in 0..5 {
        let again = predict(&model, &base, &priority).unwrap();
        assert_eq!(first.probability.to_bits(), again.probability.to_bits());
        assert_eq!(first.priority_score.to_bits(), again.priority_score.to_bits());
        assert_eq!(first.logit.to_bits(), again.logit.to_bits());
    }
}

#[test]
fn priority_score_is_never_negative_and_not_a_probability() {
    let model = fixture_model();
    let priority = PriorityParams::default();

    // a likely-to-recover high-amount case pushes the score far above 1.0
    let mut features = base_features();
    features.insert("log_amount", 1.4);
    features.insert("ptp_active", 1.0);
    let prediction = predict(&model, &features, &priority).unwrap();
    assert!(prediction.priority_score >= 0.0);
    assert!(prediction.priority_score > 1.0);
}

proptest! {
    #[test]
    fn probability_always_strictly_inside_unit_interval(
        ageing in 0.0f64..=1.0,
        log_amount in 0.0f64..=1.6,
        attempts in 0.0f64..=1.0,
        staleness in 0.0f64..=1.0,
        dispute in 0usize..=1,
        ptp in 0usize..=1,
    ) {
        let model = fixture_model();
        let fv = recoup::FeatureVector::from_pairs(&[
            ("ageing", ageing),
            ("log_amount", log_amount),
            ("attempts", attempts),
            ("staleness", staleness),
            ("dispute", dispute as f64),
            ("ptp_active", ptp as f64),
        ]);
        let p = probability(&model, &fv).unwrap();
        prop_assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn ptp_monotonicity_holds_everywhere(
        ageing in 0.0f64..=1.0,
        log_amount in 0.0f64..=1.6,
        attempts in 0.0f64..=1.0,
        staleness in 0.0f64..=1.0,
        dispute in 0usize..=1,
    ) {
        let model = fixture_model();
        let make = |ptp: f64| recoup::FeatureVector::from_pairs(&[
            ("ageing", ageing),
            ("log_amount", log_amount),
            ("attempts", attempts),
            ("staleness", staleness),
            ("dispute", dispute as f64),
            ("ptp_active", ptp),
        ]);
        let without = probability(&model, &make(0.0)).unwrap();
        let with = probability(&model, &make(1.0)).unwrap();
        // positive weight: switching the indicator on must raise the probability
        prop_assert!(with > without);
    }
}
