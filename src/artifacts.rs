//! Trained artifact schema and the immutable model bundle.
//!
//! Three JSON files produced by `meditriage train` make up a model:
//! `model.json` (classifier parameters), `features.json` (symptom vocabulary
//! plus disease label order) and `disease_info.json` (per-disease metadata).
//! They are loaded once into a [`ModelBundle`] and never mutated afterwards,
//! so concurrent request handlers can share it freely.

use std::{fs, path::Path, sync::Arc};

use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    config::Settings,
    error::TriageError,
    model::{Classifier, ModelParams, SoftmaxClassifier},
    triage::risk::RiskLevel,
};

pub const MODEL_FILE: &str = "model.json";
pub const FEATURES_FILE: &str = "features.json";
pub const DISEASE_INFO_FILE: &str = "disease_info.json";

/// Serialized shape of `features.json`: the fixed feature space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSpace {
    /// Symptom vocabulary in training order; defines vector dimensionality.
    pub symptoms: Vec<String>,
    /// Disease names in class-index order.
    pub classes: Vec<String>,
}

/// Per-disease metadata assembled offline from the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseInfo {
    pub description: String,
    pub precautions: Vec<String>,
    pub severity_score: f64,
    pub risk_level: RiskLevel,
    pub is_emergency: bool,
}

impl Default for DiseaseInfo {
    /// Fallback record for diseases absent from the metadata table; lookup
    /// must never fail.
    fn default() -> Self {
        Self {
            description: "A medical condition.".to_string(),
            precautions: vec![
                "Consult a doctor".to_string(),
                "Rest well".to_string(),
                "Stay hydrated".to_string(),
            ],
            severity_score: 3.0,
            risk_level: RiskLevel::Medium,
            is_emergency: false,
        }
    }
}

/// Everything the prediction pipeline needs, loaded once and read-only.
pub struct ModelBundle {
    pub classifier: Box<dyn Classifier>,
    pub features: FeatureSpace,
    pub disease_info: IndexMap<String, DiseaseInfo>,
}

impl std::fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBundle")
            .field("features", &self.features)
            .field("disease_info", &self.disease_info)
            .finish_non_exhaustive()
    }
}

impl ModelBundle {
    /// Assemble a bundle from already-constructed parts, checking that the
    /// classifier dimensions agree with the feature space.
    pub fn new(
        classifier: Box<dyn Classifier>,
        features: FeatureSpace,
        disease_info: IndexMap<String, DiseaseInfo>,
    ) -> Result<Self, TriageError> {
        if classifier.n_features() != features.symptoms.len() {
            return Err(TriageError::ArtifactShape(format!(
                "classifier expects {} features but vocabulary has {} symptoms",
                classifier.n_features(),
                features.symptoms.len()
            )));
        }
        if classifier.n_classes() != features.classes.len() {
            return Err(TriageError::ArtifactShape(format!(
                "classifier has {} classes but label set has {}",
                classifier.n_classes(),
                features.classes.len()
            )));
        }
        Ok(Self {
            classifier,
            features,
            disease_info,
        })
    }

    /// Load the three artifact files from disk.
    ///
    /// Missing files are reported together in a dedicated error so callers
    /// can distinguish "not trained yet" from corrupt artifacts.
    pub fn load(settings: &Settings) -> Result<Self, TriageError> {
        let model_path = settings.join_model(MODEL_FILE);
        let features_path = settings.join_model(FEATURES_FILE);
        let info_path = settings.join_model(DISEASE_INFO_FILE);

        let missing: Vec<_> = [&model_path, &features_path, &info_path]
            .into_iter()
            .filter(|p| !p.exists())
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(TriageError::ArtifactsMissing(missing));
        }

        let params: ModelParams = read_json(&model_path)?;
        let features: FeatureSpace = read_json(&features_path)?;
        let disease_info: IndexMap<String, DiseaseInfo> = read_json(&info_path)?;

        let classifier = SoftmaxClassifier::from_params(params)?;
        let bundle = Self::new(Box::new(classifier), features, disease_info)?;
        info!(
            symptoms = bundle.features.symptoms.len(),
            diseases = bundle.features.classes.len(),
            "loaded model bundle"
        );
        Ok(bundle)
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.features.symptoms
    }

    pub fn classes(&self) -> &[String] {
        &self.features.classes
    }

    /// Metadata for a disease, falling back to the default record.
    pub fn info_for(&self, disease: &str) -> DiseaseInfo {
        self.disease_info
            .get(disease)
            .cloned()
            .unwrap_or_default()
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, TriageError> {
    let raw = fs::read_to_string(path).map_err(|source| TriageError::ArtifactRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| TriageError::ArtifactParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Shared lazily-initialized bundle for hosts that serve many requests.
///
/// The cell guards the check-and-load sequence, so concurrent first requests
/// load the artifacts exactly once; afterwards it is plain shared read-only
/// state.
#[derive(Clone, Default)]
pub struct SharedBundle {
    cell: Arc<OnceCell<Arc<ModelBundle>>>,
}

impl SharedBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the bundle, loading it on first use.
    pub fn get_or_load(&self, settings: &Settings) -> Result<Arc<ModelBundle>, TriageError> {
        self.cell
            .get_or_try_init(|| ModelBundle::load(settings).map(Arc::new))
            .cloned()
    }
}
