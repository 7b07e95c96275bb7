//! Typed errors for the scoring core.
//!
//! Scoring and explanation fail fast on malformed input: a feature with no
//! matching weight is a hard error, never a silent zero. Command-level code
//! wraps these in `anyhow` with file and CLI context.

use thiserror::Error;

/// Errors surfaced by parameter loading, scoring and explanation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    /// A feature-vector key has no matching weight in the parameter set.
    #[error("unknown feature '{0}': no matching weight in parameter set")]
    UnknownFeature(String),

    /// A weighted feature is absent from the feature vector. The feature
    /// name set must match the weight key set exactly.
    #[error("missing feature '{0}': parameter set expects a value for it")]
    MissingFeature(String),

    /// A feature has no reason-mapping triple. Fatal for explanation only;
    /// scoring can still succeed on the same inputs.
    #[error("no reason mapping for feature '{0}'")]
    MissingReasonMapping(String),

    /// The parameter file is structurally unusable (missing bias or
    /// weights, unparseable JSON, non-finite values).
    #[error("malformed parameter set: {0}")]
    MalformedParameterSet(String),
}
