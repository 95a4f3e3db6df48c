//! Pretrained multi-class classifier abstraction and the shipped softmax model.

pub mod train;

use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::TriageError;

/// Anything that maps a fixed-length feature vector to a probability per class.
///
/// The pipeline only relies on this one capability; decision forests, linear
/// models or lookup tables are all substitutable behind it.
pub trait Classifier: Send + Sync {
    /// Number of feature slots the model was trained on.
    fn n_features(&self) -> usize;

    /// Number of disease classes the model discriminates between.
    fn n_classes(&self) -> usize;

    /// Probability distribution over classes for one feature vector.
    fn predict_distribution(&self, features: ArrayView1<'_, f64>) -> Result<Vec<f64>, TriageError>;
}

/// Serialized shape of `model.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelParams {
    /// Row per class, column per vocabulary slot.
    pub weights: Vec<Vec<f64>>,
    /// One bias per class.
    pub intercepts: Vec<f64>,
}

/// Multinomial logistic regression: softmax over `W·x + b`.
#[derive(Debug, Clone)]
pub struct SoftmaxClassifier {
    weights: Array2<f64>,
    intercepts: Array1<f64>,
}

impl SoftmaxClassifier {
    /// Build from dense parameters, checking row/column consistency.
    pub fn new(weights: Array2<f64>, intercepts: Array1<f64>) -> Result<Self, TriageError> {
        if weights.nrows() != intercepts.len() {
            return Err(TriageError::ArtifactShape(format!(
                "{} weight rows but {} intercepts",
                weights.nrows(),
                intercepts.len()
            )));
        }
        if weights.nrows() == 0 {
            return Err(TriageError::ArtifactShape("model has no classes".into()));
        }
        Ok(Self {
            weights,
            intercepts,
        })
    }

    pub fn from_params(params: ModelParams) -> Result<Self, TriageError> {
        let rows = params.weights.len();
        let cols = params.weights.first().map(Vec::len).unwrap_or(0);
        if params.weights.iter().any(|row| row.len() != cols) {
            return Err(TriageError::ArtifactShape(
                "ragged weight matrix in model artifact".into(),
            ));
        }
        let flat: Vec<f64> = params.weights.into_iter().flatten().collect();
        let weights = Array2::from_shape_vec((rows, cols), flat)
            .map_err(|e| TriageError::ArtifactShape(e.to_string()))?;
        Self::new(weights, Array1::from(params.intercepts))
    }

    pub fn to_params(&self) -> ModelParams {
        ModelParams {
            weights: self
                .weights
                .outer_iter()
                .map(|row| row.to_vec())
                .collect(),
            intercepts: self.intercepts.to_vec(),
        }
    }
}

impl Classifier for SoftmaxClassifier {
    fn n_features(&self) -> usize {
        self.weights.ncols()
    }

    fn n_classes(&self) -> usize {
        self.weights.nrows()
    }

    fn predict_distribution(&self, features: ArrayView1<'_, f64>) -> Result<Vec<f64>, TriageError> {
        if features.len() != self.n_features() {
            return Err(TriageError::Distribution(format!(
                "expected {} features, got {}",
                self.n_features(),
                features.len()
            )));
        }
        let logits = self.weights.dot(&features) + &self.intercepts;
        Ok(softmax(logits.view()))
    }
}

/// Numerically stable softmax.
pub fn softmax(logits: ArrayView1<'_, f64>) -> Vec<f64> {
    let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&l| (l - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}
