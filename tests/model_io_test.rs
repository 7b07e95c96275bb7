mod common;

use common::fixture_model;
use indoc::indoc;
use pretty_assertions::assert_eq;
use recoup::errors::ScoringError;
use recoup::model::ParameterSet;

#[test]
fn full_parameter_file_round_trips() {
    let model = fixture_model();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");

    model.write_file(&path).unwrap();
    let loaded = ParameterSet::from_file(&path).unwrap();
    assert_eq!(loaded, model);
}

#[test]
fn metadata_fields_are_optional_on_input() {
    let json = indoc! {r#"
        {
          "version": "1.0",
          "bias": -0.5,
          "weights": {
            "ageing": -3.0,
            "ptp_active": 2.5
          },
          "reason_mappings": {
            "ageing": ["low", "mid", "high"],
            "ptp_active": ["off", "unused", "on"]
          }
        }
    "#};
    let params = ParameterSet::from_json(json).unwrap();
    assert_eq!(params.version, "1.0");
    assert_eq!(params.trained_on, None);
    assert_eq!(params.weights["ptp_active"], 2.5);
    assert_eq!(params.reason_mappings["ageing"][2], "high");
}

#[test]
fn missing_bias_is_rejected_before_scoring() {
    let json = r#"{ "version": "1.0", "weights": { "ageing": -3.0 } }"#;
    assert!(matches!(
        ParameterSet::from_json(json),
        Err(ScoringError::MalformedParameterSet(_))
    ));
}

#[test]
fn missing_weights_is_rejected_before_scoring() {
    let json = r#"{ "version": "1.0", "bias": -0.5 }"#;
    assert!(matches!(
        ParameterSet::from_json(json),
        Err(ScoringError::MalformedParameterSet(_))
    ));
}

#[test]
fn unparseable_json_is_malformed() {
    assert!(matches!(
        ParameterSet::from_json("{ not json"),
        Err(ScoringError::MalformedParameterSet(_))
    ));
}

#[test]
fn wrong_reason_triple_arity_is_malformed() {
    let json = indoc! {r#"
        {
          "version": "1.0",
          "bias": 0.0,
          "weights": { "ageing": -3.0 },
          "reason_mappings": { "ageing": ["only", "two"] }
        }
    "#};
    assert!(matches!(
        ParameterSet::from_json(json),
        Err(ScoringError::MalformedParameterSet(_))
    ));
}
