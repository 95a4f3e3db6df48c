//! Risk classification and confidence tier policy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal risk classification attached to a disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diseases curated as potentially life-threatening, independent of the
/// severity scores derived from the dataset.
pub const EMERGENCY_DISEASES: &[&str] = &[
    "Heart attack",
    "Paralysis (brain hemorrhage)",
    "Hypertension",
    "Diabetes",
    "Pneumonia",
    "Malaria",
    "Dengue",
    "Typhoid",
    "Hepatitis B",
    "Hepatitis C",
    "Hepatitis D",
    "Hepatitis E",
    "Jaundice",
    "Chronic cholestasis",
    "Alcoholic hepatitis",
    "Tuberculosis",
    "AIDS",
    "Cervical spondylosis",
    "Varicose veins",
];

fn is_curated(disease: &str) -> bool {
    EMERGENCY_DISEASES.contains(&disease)
}

/// Classify a disease's risk from its mean symptom severity (0-7 scale).
pub fn risk_level(disease: &str, score: f64) -> RiskLevel {
    if is_curated(disease) {
        return if score >= 5.0 {
            RiskLevel::Critical
        } else {
            RiskLevel::High
        };
    }
    if score >= 6.0 {
        RiskLevel::High
    } else if score >= 4.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Emergency flag: curated diseases need score >= 5, anything else >= 6.5.
/// The asymmetric thresholds are inherited from the training data curation
/// and are kept as-is.
pub fn is_emergency(disease: &str, score: f64) -> bool {
    if is_curated(disease) && score >= 5.0 {
        return true;
    }
    score >= 6.5
}

/// Human-readable bucket for a raw prediction probability. Lower bounds are
/// inclusive, so 0.80 is already "Very High".
pub fn confidence_label(prob: f64) -> &'static str {
    if prob >= 0.80 {
        "Very High"
    } else if prob >= 0.60 {
        "High"
    } else if prob >= 0.40 {
        "Moderate"
    } else if prob >= 0.20 {
        "Low"
    } else {
        "Very Low"
    }
}
