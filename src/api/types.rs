//! Shared DTOs for JSON requests and responses.

use serde::{Deserialize, Serialize};

use crate::triage::risk::RiskLevel;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiseaseDto {
    pub name: String,
    pub risk_level: RiskLevel,
    pub is_emergency: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiseaseListDto {
    pub diseases: Vec<DiseaseDto>,
    pub count: usize,
}

/// Error payload mirroring the success shape convention: an `error` field,
/// optionally with details.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
