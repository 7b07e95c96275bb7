#![allow(dead_code)]

use std::collections::BTreeMap;

use recoup::features::FeatureVector;
use recoup::model::ParameterSet;

/// Parameter set with the generator's ground-truth coefficients and the
/// stock reason mappings. Directionally correct by construction.
pub fn fixture_model() -> ParameterSet {
    ParameterSet {
        version: "1.0".to_string(),
        trained_on: Some("2024-01-10".to_string()),
        n_samples: Some(5000),
        test_accuracy: Some(0.79),
        test_auc: Some(0.86),
        bias: -0.5,
        weights: BTreeMap::from([
            ("ageing".to_string(), -3.0),
            ("log_amount".to_string(), 0.15),
            ("attempts".to_string(), 0.25),
            ("staleness".to_string(), -1.5),
            ("dispute".to_string(), -1.8),
            ("ptp_active".to_string(), 2.5),
        ]),
        reason_mappings: recoup::model::default_reason_mappings(),
    }
}

/// The base case the sanity suite perturbs.
pub fn base_features() -> FeatureVector {
    FeatureVector::from_pairs(&[
        ("ageing", 0.5),
        ("log_amount", 1.2),
        ("attempts", 0.4),
        ("staleness", 0.5),
        ("dispute", 0.0),
        ("ptp_active", 0.0),
    ])
}

/// Copy of `base` with one feature overridden.
pub fn with_feature(base: &FeatureVector, name: &str, value: f64) -> FeatureVector {
    let mut fv = base.clone();
    fv.insert(name, value);
    fv
}
