//! Integration tests for the ranking pipeline.
//!
//! These tests verify the end-to-end flow:
//! 1. A decision model is built or loaded from a JSON/YAML document
//! 2. Criteria and per-criterion matrices pass the consistency gate
//! 3. Alternatives are synthesized into a ranked list
//!
//! Failures must stop the run and name the offending comparison set.

use std::io::Write;

use tempfile::NamedTempFile;

use ahp_engine::adapters::report::render_ranking;
use ahp_engine::adapters::{FileDecisionSource, InMemoryDecisionSource};
use ahp_engine::application::{
    ConsistencyReportHandler, RankAlternativesCommand, RankAlternativesHandler,
};
use ahp_engine::domain::ahp::{
    AhpError, ComparisonSet, ConsistencyGate, DecisionModel, Intensity, Judgment,
};
use ahp_engine::domain::foundation::ErrorCode;
use ahp_engine::ports::{DecisionSource, SourceError};

// =============================================================================
// Test Infrastructure
// =============================================================================

const EPS: f64 = 1e-9;

fn cost_quality_model() -> DecisionModel {
    DecisionModel::new()
        .with_criterion("Cost")
        .and_then(|m| m.with_criterion("Quality"))
        .and_then(|m| m.with_alternative("A"))
        .and_then(|m| m.with_alternative("B"))
        .and_then(|m| m.compare_criteria("Cost", "Quality", Intensity::Moderate))
        .and_then(|m| m.compare_alternatives("Cost", "A", "B", Intensity::EqualToModerate))
        .and_then(|m| m.compare_alternatives("Quality", "B", "A", Intensity::EqualToModerate))
        .expect("valid model")
}

/// A > B, B > C and C > A, all moderately.
fn cyclic_model() -> DecisionModel {
    DecisionModel::new()
        .with_criterion("Cost")
        .and_then(|m| m.with_alternative("A"))
        .and_then(|m| m.with_alternative("B"))
        .and_then(|m| m.with_alternative("C"))
        .and_then(|m| m.compare_alternatives("Cost", "A", "B", Intensity::Moderate))
        .and_then(|m| m.compare_alternatives("Cost", "B", "C", Intensity::Moderate))
        .and_then(|m| m.compare_alternatives("Cost", "C", "A", Intensity::Moderate))
        .expect("valid model")
}

fn rank(model: &DecisionModel) -> Result<ahp_engine::application::RankAlternativesResult, AhpError> {
    RankAlternativesHandler::default().handle(&RankAlternativesCommand {
        model: model.clone(),
    })
}

fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

// =============================================================================
// Ranking
// =============================================================================

#[test]
fn ranks_cost_quality_scenario() {
    let result = rank(&cost_quality_model()).unwrap();

    assert!((result.criteria.weights[0] - 0.75).abs() < EPS);
    assert!((result.criteria.weights[1] - 0.25).abs() < EPS);

    assert_eq!(result.rankings.len(), 2);
    assert_eq!(result.rankings[0].name, "A");
    assert_eq!(result.rankings[0].rank, 1);
    assert!((result.rankings[0].score - 7.0 / 12.0).abs() < EPS);
    assert_eq!(result.rankings[1].name, "B");
    assert!((result.rankings[1].score - 5.0 / 12.0).abs() < EPS);

    let total: f64 = result.rankings.iter().map(|r| r.score).sum();
    assert!((total - 1.0).abs() < EPS);
}

#[test]
fn intransitive_judgments_are_rejected_with_named_set() {
    let err = rank(&cyclic_model()).unwrap_err();

    assert_eq!(err.code(), ErrorCode::InconsistentJudgments);
    match err {
        AhpError::InconsistentJudgments { set, ratio, .. } => {
            assert_eq!(set, ComparisonSet::alternatives("Cost"));
            assert!(ratio > 0.1);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn lenient_gate_accepts_what_default_rejects() {
    let model = cyclic_model();
    let result = RankAlternativesHandler::new(ConsistencyGate::new(0.99).unwrap())
        .handle(&RankAlternativesCommand {
            model: model.clone(),
        });

    // CR of the cycle is about 1.15, still above any threshold below 1
    assert!(result.is_err());

    let report = ConsistencyReportHandler::new(ConsistencyGate::new(0.99).unwrap()).handle(&model);
    assert!(!report.all_accepted());
    assert_eq!(
        report.first_rejection().map(|e| e.set.clone()),
        Some(ComparisonSet::alternatives("Cost"))
    );
}

#[test]
fn removing_an_alternative_keeps_remaining_judgments() {
    let model = cost_quality_model()
        .with_alternative("C")
        .and_then(|m| m.without_alternative("C"))
        .unwrap();

    assert_eq!(model, cost_quality_model());
    assert_eq!(rank(&model).unwrap().rankings[0].name, "A");
}

#[test]
fn new_criterion_starts_with_equal_alternatives() {
    let model = cost_quality_model().with_criterion("Speed").unwrap();
    // Padding the criteria matrix with ones pushes its CR to about 0.12
    let result = RankAlternativesHandler::new(ConsistencyGate::new(0.2).unwrap())
        .handle(&RankAlternativesCommand { model })
        .unwrap();

    assert_eq!(result.alternatives.len(), 3);
    let speed = &result.alternatives[2];
    assert_eq!(speed.criterion, "Speed");
    assert!(speed.priorities.weights.iter().all(|w| (w - 0.5).abs() < EPS));
}

#[test]
fn reversed_comparison_matches_explicit_reciprocal() {
    let forward = DecisionModel::new()
        .with_criterion("X")
        .and_then(|m| m.with_criterion("Y"))
        .and_then(|m| m.compare_criteria("Y", "X", Intensity::Strong))
        .unwrap();
    let explicit = DecisionModel::new()
        .with_criterion("X")
        .and_then(|m| m.with_criterion("Y"))
        .and_then(|m| m.compare_criteria("X", "Y", Judgment::FavorsSecond(Intensity::Strong)))
        .unwrap();

    assert_eq!(forward.criteria_matrix(), explicit.criteria_matrix());
}

#[test]
fn in_memory_source_feeds_the_pipeline() {
    let source = InMemoryDecisionSource::new(cost_quality_model());
    let model = source.load().unwrap();
    let result = rank(&model).unwrap();

    let text = render_ranking(&model, &result);
    assert!(text.contains("Ranking"));
    assert!(text.contains(" 1. A"));
    assert!(text.contains(" 2. B"));
}

// =============================================================================
// File documents
// =============================================================================

#[test]
fn loads_json_document_and_ranks() {
    let file = write_temp(
        ".json",
        r#"{
            "criteria": ["Cost", "Quality"],
            "alternatives": ["A", "B"],
            "criteria_comparisons": [{"first": "Cost", "second": "Quality", "value": 3}],
            "alternative_comparisons": {
                "Cost": [{"first": "A", "second": "B", "value": 2}],
                "Quality": [{"first": "A", "second": "B", "value": 0.5}]
            }
        }"#,
    );

    let model = FileDecisionSource::new(file.path()).load().unwrap();
    assert_eq!(model, cost_quality_model());

    let result = rank(&model).unwrap();
    assert!((result.rankings[0].score - 7.0 / 12.0).abs() < EPS);
}

#[test]
fn loads_yaml_document_and_ranks() {
    let file = write_temp(
        ".yaml",
        "
criteria: [Cost, Quality]
alternatives: [A, B]
criteria_comparisons:
  - { first: Quality, second: Cost, value: 0.3333333333 }
alternative_comparisons:
  Cost:
    - { first: B, second: A, value: 0.5 }
  Quality:
    - { first: B, second: A, value: 2 }
",
    );

    let model = FileDecisionSource::new(file.path()).load().unwrap();
    let result = rank(&model).unwrap();

    assert_eq!(result.rankings[0].name, "A");
    assert!((result.rankings[0].score - 7.0 / 12.0).abs() < 1e-6);
}

#[test]
fn document_without_criterion_comparisons_reports_missing() {
    let file = write_temp(
        ".yml",
        "
criteria: [Cost, Quality]
alternatives: [A, B]
alternative_comparisons:
  Cost:
    - { first: A, second: B, value: 2 }
",
    );

    let model = FileDecisionSource::new(file.path()).load().unwrap();
    let err = rank(&model).unwrap_err();

    assert_eq!(err, AhpError::missing_comparisons("Quality"));
    assert!(err.to_string().contains("Quality"));
}

#[test]
fn off_scale_value_fails_to_parse() {
    let file = write_temp(
        ".json",
        r#"{
            "criteria": ["Cost", "Quality"],
            "alternatives": ["A"],
            "criteria_comparisons": [{"first": "Cost", "second": "Quality", "value": 12}]
        }"#,
    );

    let err = FileDecisionSource::new(file.path()).load().unwrap_err();
    assert!(matches!(err, SourceError::Parse(_)));
}

#[test]
fn oversized_document_is_refused() {
    let file = write_temp(".json", &format!("{{\"pad\": \"{}\"}}", "x".repeat(64)));

    let err = FileDecisionSource::new(file.path())
        .with_max_bytes(16)
        .load()
        .unwrap_err();
    assert!(matches!(err, SourceError::TooLarge { limit: 16, .. }));
}

#[test]
fn unknown_extension_is_refused() {
    let file = write_temp(".toml", "criteria = []");

    let err = FileDecisionSource::new(file.path()).load().unwrap_err();
    assert!(matches!(err, SourceError::UnsupportedFormat(_)));
}
