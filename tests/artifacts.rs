use indexmap::IndexMap;
use meditriage::{
    artifacts::{
        DiseaseInfo, FeatureSpace, ModelBundle, SharedBundle, DISEASE_INFO_FILE, FEATURES_FILE,
        MODEL_FILE,
    },
    config::Settings,
    error::TriageError,
    model::ModelParams,
    triage::risk::RiskLevel,
};

fn settings_for(dir: &std::path::Path) -> Settings {
    Settings {
        model_dir: dir.to_path_buf(),
        data_dir: dir.to_path_buf(),
    }
}

fn write_valid_artifacts(dir: &std::path::Path) {
    let params = ModelParams {
        weights: vec![vec![1.0, 0.0], vec![0.0, 1.0]],
        intercepts: vec![0.0, 0.0],
    };
    let features = FeatureSpace {
        symptoms: vec!["cough".to_string(), "nausea".to_string()],
        classes: vec!["Common Cold".to_string(), "Gastroenteritis".to_string()],
    };
    let mut info = IndexMap::new();
    info.insert(
        "Common Cold".to_string(),
        DiseaseInfo {
            description: "A viral infection of the upper respiratory tract.".to_string(),
            precautions: vec!["rest".to_string()],
            severity_score: 2.5,
            risk_level: RiskLevel::Low,
            is_emergency: false,
        },
    );

    std::fs::write(
        dir.join(MODEL_FILE),
        serde_json::to_string(&params).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join(FEATURES_FILE),
        serde_json::to_string(&features).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join(DISEASE_INFO_FILE),
        serde_json::to_string(&info).unwrap(),
    )
    .unwrap();
}

#[test]
fn missing_artifacts_are_reported_together() {
    let dir = tempfile::tempdir().unwrap();
    let err = ModelBundle::load(&settings_for(dir.path())).unwrap_err();
    let TriageError::ArtifactsMissing(paths) = err else {
        panic!("expected ArtifactsMissing");
    };
    assert_eq!(paths.len(), 3);
}

#[test]
fn partially_missing_artifacts_name_the_absent_files() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_artifacts(dir.path());
    std::fs::remove_file(dir.path().join(DISEASE_INFO_FILE)).unwrap();

    let err = ModelBundle::load(&settings_for(dir.path())).unwrap_err();
    let TriageError::ArtifactsMissing(paths) = err else {
        panic!("expected ArtifactsMissing");
    };
    assert_eq!(paths, vec![dir.path().join(DISEASE_INFO_FILE)]);
}

#[test]
fn valid_artifacts_load_into_a_consistent_bundle() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_artifacts(dir.path());

    let bundle = ModelBundle::load(&settings_for(dir.path())).unwrap();
    assert_eq!(bundle.vocabulary(), ["cough", "nausea"]);
    assert_eq!(bundle.classes(), ["Common Cold", "Gastroenteritis"]);
    assert_eq!(bundle.info_for("Common Cold").risk_level, RiskLevel::Low);

    // Unknown lookups never fail.
    let fallback = bundle.info_for("No Such Disease");
    assert_eq!(fallback.description, "A medical condition.");
    assert_eq!(fallback.risk_level, RiskLevel::Medium);
}

#[test]
fn corrupt_artifact_is_a_parse_error_not_missing() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_artifacts(dir.path());
    std::fs::write(dir.path().join(MODEL_FILE), "not json").unwrap();

    let err = ModelBundle::load(&settings_for(dir.path())).unwrap_err();
    assert!(matches!(err, TriageError::ArtifactParse { .. }));
    assert!(!err.is_not_ready());
}

#[test]
fn mismatched_dimensions_are_rejected_at_load() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_artifacts(dir.path());
    // Three classes of weights against a two-class label set.
    let params = ModelParams {
        weights: vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]],
        intercepts: vec![0.0, 0.0, 0.0],
    };
    std::fs::write(
        dir.path().join(MODEL_FILE),
        serde_json::to_string(&params).unwrap(),
    )
    .unwrap();

    let err = ModelBundle::load(&settings_for(dir.path())).unwrap_err();
    assert!(matches!(err, TriageError::ArtifactShape(_)));
}

#[test]
fn shared_bundle_loads_once_and_hands_out_the_same_model() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_artifacts(dir.path());
    let settings = settings_for(dir.path());

    let shared = SharedBundle::new();
    let first = shared.get_or_load(&settings).unwrap();
    // Corrupting the files after the first load must not matter.
    std::fs::remove_file(dir.path().join(MODEL_FILE)).unwrap();
    let second = shared.get_or_load(&settings).unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}
