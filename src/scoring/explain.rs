//! Reason explainer: ranked feature contributions mapped to bucketed text.

use std::cmp::Ordering;

use crate::errors::ScoringError;
use crate::features::{FeatureVector, BINARY_FEATURES};
use crate::model::ParameterSet;

/// Reasons returned per prediction.
pub const TOP_REASONS: usize = 3;

/// Bucket boundaries for continuous features.
const LOW_BUCKET_LIMIT: f64 = 0.33;
const MEDIUM_BUCKET_LIMIT: f64 = 0.67;

/// One feature's share of the logit, in feature-vector order.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub feature: String,
    pub value: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// Per-feature `weight * value` contributions, preserving vector order.
pub fn contributions(
    params: &ParameterSet,
    features: &FeatureVector,
) -> Result<Vec<Contribution>, ScoringError> {
    features
        .iter()
        .map(|(name, value)| {
            let weight = *params
                .weights
                .get(name)
                .ok_or_else(|| ScoringError::UnknownFeature(name.to_string()))?;
            Ok(Contribution {
                feature: name.to_string(),
                value,
                weight,
                contribution: weight * value,
            })
        })
        .collect()
}

/// Contributions ranked by absolute magnitude, descending. The sort is
/// stable, so equal magnitudes keep vector order: first-seen feature wins.
pub fn ranked_contributions(
    params: &ParameterSet,
    features: &FeatureVector,
) -> Result<Vec<Contribution>, ScoringError> {
    let mut ranked = contributions(params, features)?;
    ranked.sort_by(|a, b| {
        b.contribution
            .abs()
            .partial_cmp(&a.contribution.abs())
            .unwrap_or(Ordering::Equal)
    });
    Ok(ranked)
}

/// Bucket index into a feature's reason triple.
///
/// Continuous features: low below 0.33, medium below 0.67, high otherwise.
/// Binary features map the on state to the high bucket; the medium bucket is
/// unreachable for them.
pub fn bucket_for(feature: &str, value: f64) -> usize {
    if BINARY_FEATURES.contains(&feature) {
        return if value == 1.0 { 2 } else { 0 };
    }
    if value < LOW_BUCKET_LIMIT {
        0
    } else if value < MEDIUM_BUCKET_LIMIT {
        1
    } else {
        2
    }
}

/// Up to [`TOP_REASONS`] explanation strings for a prediction, strongest
/// contribution first. Vectors with fewer features yield fewer reasons.
pub fn reason_codes(
    params: &ParameterSet,
    features: &FeatureVector,
) -> Result<Vec<String>, ScoringError> {
    let mut ranked = ranked_contributions(params, features)?;
    ranked.truncate(TOP_REASONS);

    ranked
        .into_iter()
        .map(|c| {
            let mapping = params
                .reason_mappings
                .get(&c.feature)
                .ok_or_else(|| ScoringError::MissingReasonMapping(c.feature.clone()))?;
            Ok(mapping[bucket_for(&c.feature, c.value)].clone())
        })
        .collect()
}
