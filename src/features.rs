//! Feature vectors and raw-case normalization.
//!
//! A [`FeatureVector`] preserves insertion order. That order is the
//! documented tie-break for reason-code ranking (first-seen feature wins),
//! so the normalizer always emits features in [`FEATURE_NAMES`] order.

use serde::{Deserialize, Serialize};

/// Canonical feature order used by the normalizer and the trainer.
pub const FEATURE_NAMES: [&str; 6] = [
    "ageing",
    "log_amount",
    "attempts",
    "staleness",
    "dispute",
    "ptp_active",
];

/// Features carrying a 0/1 indicator rather than a continuous value.
pub const BINARY_FEATURES: [&str; 2] = ["dispute", "ptp_active"];

/// Ordered `feature name → value` mapping.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector {
    entries: Vec<(String, f64)>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a feature value. A repeated name updates the value in place and
    /// keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build from name/value pairs, preserving slice order.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        let mut fv = Self::new();
        for (name, value) in pairs {
            fv.insert(*name, *value);
        }
        fv
    }
}

impl FromIterator<(String, f64)> for FeatureVector {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        let mut fv = Self::new();
        for (name, value) in iter {
            fv.insert(name, value);
        }
        fv
    }
}

/// Raw case attributes as the collection system records them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseAttributes {
    /// Outstanding amount.
    pub amount: f64,
    /// Days since the case originated.
    pub ageing_days: f64,
    /// Contact attempts in the last 30 days.
    pub attempts_count: u32,
    /// Days since the last case update.
    pub days_since_update: f64,
    /// An active dispute exists on the case.
    pub has_dispute: bool,
    /// An active promise-to-pay exists on the case.
    pub ptp_active: bool,
}

/// Divisors and caps for raw-to-normalized conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationParams {
    /// Ageing saturates at this many days.
    #[serde(default = "default_ageing_cap_days")]
    pub ageing_cap_days: f64,
    /// `ln(1 + amount)` is divided by this scale.
    #[serde(default = "default_log_amount_divisor")]
    pub log_amount_divisor: f64,
    /// Attempt count saturates at this many attempts.
    #[serde(default = "default_attempts_cap")]
    pub attempts_cap: f64,
    /// Staleness saturates at this many days without an update.
    #[serde(default = "default_staleness_cap_days")]
    pub staleness_cap_days: f64,
}

fn default_ageing_cap_days() -> f64 {
    120.0
}

fn default_log_amount_divisor() -> f64 {
    10.0
}

fn default_attempts_cap() -> f64 {
    10.0
}

fn default_staleness_cap_days() -> f64 {
    14.0
}

impl Default for NormalizationParams {
    fn default() -> Self {
        Self {
            ageing_cap_days: default_ageing_cap_days(),
            log_amount_divisor: default_log_amount_divisor(),
            attempts_cap: default_attempts_cap(),
            staleness_cap_days: default_staleness_cap_days(),
        }
    }
}

/// Map raw case attributes onto the six bounded model features.
///
/// Continuous features land in [0, 1] (clamped at the configured caps);
/// `dispute` and `ptp_active` are 0/1 indicators.
pub fn normalize(case: &CaseAttributes, params: &NormalizationParams) -> FeatureVector {
    let mut fv = FeatureVector::new();
    fv.insert(
        "ageing",
        (case.ageing_days / params.ageing_cap_days).clamp(0.0, 1.0),
    );
    fv.insert(
        "log_amount",
        (1.0 + case.amount).ln() / params.log_amount_divisor,
    );
    fv.insert(
        "attempts",
        (f64::from(case.attempts_count) / params.attempts_cap).clamp(0.0, 1.0),
    );
    fv.insert(
        "staleness",
        (case.days_since_update / params.staleness_cap_days).clamp(0.0, 1.0),
    );
    fv.insert("dispute", if case.has_dispute { 1.0 } else { 0.0 });
    fv.insert("ptp_active", if case.ptp_active { 1.0 } else { 0.0 });
    fv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_case() -> CaseAttributes {
        CaseAttributes {
            amount: 160_000.0,
            ageing_days: 60.0,
            attempts_count: 4,
            days_since_update: 7.0,
            has_dispute: false,
            ptp_active: true,
        }
    }

    #[test]
    fn test_normalize_midrange_case() {
        let fv = normalize(&sample_case(), &NormalizationParams::default());
        assert!((fv.get("ageing").unwrap() - 0.5).abs() < 1e-12);
        assert!((fv.get("attempts").unwrap() - 0.4).abs() < 1e-12);
        assert!((fv.get("staleness").unwrap() - 0.5).abs() < 1e-12);
        assert!((fv.get("log_amount").unwrap() - (160_001.0f64).ln() / 10.0).abs() < 1e-12);
        assert_eq!(fv.get("dispute"), Some(0.0));
        assert_eq!(fv.get("ptp_active"), Some(1.0));
    }

    #[test]
    fn test_normalize_clamps_at_caps() {
        let case = CaseAttributes {
            amount: 5_000_000.0,
            ageing_days: 400.0,
            attempts_count: 25,
            days_since_update: 90.0,
            has_dispute: true,
            ptp_active: false,
        };
        let fv = normalize(&case, &NormalizationParams::default());
        assert_eq!(fv.get("ageing"), Some(1.0));
        assert_eq!(fv.get("attempts"), Some(1.0));
        assert_eq!(fv.get("staleness"), Some(1.0));
    }

    #[test]
    fn test_normalize_emits_canonical_order() {
        let fv = normalize(&sample_case(), &NormalizationParams::default());
        let names: Vec<&str> = fv.names().collect();
        assert_eq!(names, FEATURE_NAMES);
    }

    #[test]
    fn test_insert_updates_in_place() {
        let mut fv = FeatureVector::from_pairs(&[("a", 1.0), ("b", 2.0)]);
        fv.insert("a", 3.0);
        assert_eq!(fv.get("a"), Some(3.0));
        assert_eq!(fv.len(), 2);
        let names: Vec<&str> = fv.names().collect();
        assert_eq!(names, ["a", "b"]);
    }
}
