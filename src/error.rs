//! Error taxonomy for the triage pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by artifact loading and the prediction pipeline.
///
/// `ArtifactsMissing` is kept distinct so the HTTP layer can answer with a
/// service-unavailable response instead of a generic server error.
#[derive(Debug, Error)]
pub enum TriageError {
    /// One or more artifact files are absent; lists every missing path.
    #[error("model artifacts missing: {}; run `meditriage train` first", join_paths(.0))]
    ArtifactsMissing(Vec<PathBuf>),

    /// An artifact file exists but could not be read.
    #[error("failed to read artifact {path}")]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An artifact file exists but does not parse as the expected schema.
    #[error("malformed artifact {path}")]
    ArtifactParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Loaded artifacts disagree with each other (dimension mismatch).
    #[error("inconsistent artifacts: {0}")]
    ArtifactShape(String),

    /// The classifier produced a distribution that does not fit the label set.
    #[error("classifier output invalid: {0}")]
    Distribution(String),
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl TriageError {
    /// Whether this failure means the service is not ready rather than broken.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, Self::ArtifactsMissing(_))
    }
}
