use meditriage::triage::risk::{is_emergency, risk_level, RiskLevel};

#[test]
fn high_severity_outside_curated_set_is_still_an_emergency() {
    // Severity 6.8 clears the 6.5 general threshold regardless of curation.
    let disease = "Gastroenteritis";
    assert_eq!(risk_level(disease, 6.8), RiskLevel::High);
    assert!(is_emergency(disease, 6.8));
}

#[test]
fn curated_disease_thresholds() {
    assert_eq!(risk_level("Heart attack", 5.0), RiskLevel::Critical);
    assert_eq!(risk_level("Heart attack", 4.9), RiskLevel::High);
    assert!(is_emergency("Heart attack", 5.0));
    assert!(!is_emergency("Heart attack", 4.9));
}

#[test]
fn non_curated_risk_bands() {
    let disease = "Common Cold";
    assert_eq!(risk_level(disease, 6.0), RiskLevel::High);
    assert_eq!(risk_level(disease, 5.9), RiskLevel::Medium);
    assert_eq!(risk_level(disease, 4.0), RiskLevel::Medium);
    assert_eq!(risk_level(disease, 3.9), RiskLevel::Low);
}

#[test]
fn general_emergency_threshold_is_six_point_five() {
    assert!(!is_emergency("Common Cold", 6.4));
    assert!(is_emergency("Common Cold", 6.5));
}
