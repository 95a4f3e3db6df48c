//! Prediction pipeline: encode, classify, rank, report.

pub mod report;
pub mod risk;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    artifacts::ModelBundle,
    error::TriageError,
    nlp::features::encode_prompt,
    triage::risk::{confidence_label, RiskLevel},
};

/// One entry of the ranked top-N list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPrediction {
    pub disease: String,
    pub probability: f64,
}

/// Full prediction output for one prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_disease: String,
    pub confidence: f64,
    pub confidence_label: String,
    pub risk_level: RiskLevel,
    pub is_emergency: bool,
    pub severity_score: f64,
    pub symptoms_detected: Vec<String>,
    pub precautions: Vec<String>,
    pub detailed_analysis: String,
    pub top_predictions: Vec<TopPrediction>,
}

/// Outcome of one analysis request.
///
/// Invalid user input is a value, not an error: the serialized rejection
/// carries a single `error` field and nothing else, so callers discriminate
/// by field presence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Analysis {
    Rejected { error: String },
    Report(Box<Prediction>),
}

impl Analysis {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Sort class indices by probability descending and keep the top `n`.
///
/// The sort is stable, so equal probabilities keep class-index order and the
/// ranking is deterministic for identical distributions.
pub fn rank_distribution(distribution: &[f64], n: usize) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = distribution.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(n);
    ranked
}

/// Analyse a free-text symptom description against a loaded model bundle.
///
/// This is the sole entry point the HTTP layer and CLI consume. The bundle is
/// constructed once by the host and shared read-only; nothing here mutates it.
pub fn predict(prompt: &str, bundle: &ModelBundle) -> Result<Analysis, TriageError> {
    if prompt.trim().is_empty() {
        return Ok(Analysis::Rejected {
            error: "Please enter your symptoms.".to_string(),
        });
    }

    let (vector, symptoms_detected) = encode_prompt(prompt, bundle.vocabulary());

    // Zero matches still go through the model; it falls back to class priors.
    let distribution = bundle.classifier.predict_distribution(vector.view())?;
    if distribution.len() != bundle.classes().len() {
        return Err(TriageError::Distribution(format!(
            "{} probabilities for {} classes",
            distribution.len(),
            bundle.classes().len()
        )));
    }

    let ranked = rank_distribution(&distribution, 3);
    let Some(&(best_idx, confidence)) = ranked.first() else {
        return Err(TriageError::Distribution("empty distribution".into()));
    };
    let disease = bundle.classes()[best_idx].clone();
    debug!(%disease, confidence, matched = symptoms_detected.len(), "ranked prediction");

    let top_predictions = ranked
        .iter()
        .map(|&(idx, prob)| TopPrediction {
            disease: bundle.classes()[idx].clone(),
            probability: round_to(prob, 4),
        })
        .collect();

    let info = bundle.info_for(&disease);
    let detailed_analysis = report::render_report(&disease, &symptoms_detected, &info, confidence);

    Ok(Analysis::Report(Box::new(Prediction {
        predicted_disease: disease,
        confidence: round_to(confidence, 4),
        confidence_label: confidence_label(confidence).to_string(),
        risk_level: info.risk_level,
        is_emergency: info.is_emergency,
        severity_score: round_to(info.severity_score, 2),
        symptoms_detected,
        precautions: info.precautions,
        detailed_analysis,
        top_predictions,
    })))
}

/// Round to `places` decimal places for presentation.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
