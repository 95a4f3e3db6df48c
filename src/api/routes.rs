//! HTTP route handlers for Axum.

use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, warn};

use crate::{
    api::types::{AnalyzeRequest, DiseaseDto, DiseaseListDto, ErrorBody, HealthDto},
    error::TriageError,
    triage::{self, Analysis},
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok",
        service: "meditriage",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Analyse patient symptoms from a free-text prompt.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Analysis> {
    let Some(prompt) = request.prompt else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("Missing 'prompt' in request body.")),
        ));
    };

    let bundle = state
        .bundle
        .get_or_load(&state.settings)
        .map_err(map_pipeline_error)?;

    let analysis = triage::predict(&prompt, &bundle).map_err(map_pipeline_error)?;
    if let Analysis::Rejected { error } = &analysis {
        warn!(%error, "rejected analysis request");
        return Err((StatusCode::BAD_REQUEST, Json(ErrorBody::new(error.clone()))));
    }
    Ok(Json(analysis))
}

/// Return all diseases the model knows about, sorted by name.
pub async fn list_diseases(State(state): State<AppState>) -> ApiResult<DiseaseListDto> {
    let bundle = state
        .bundle
        .get_or_load(&state.settings)
        .map_err(map_pipeline_error)?;

    let mut diseases: Vec<DiseaseDto> = bundle
        .disease_info
        .iter()
        .map(|(name, info)| DiseaseDto {
            name: name.clone(),
            risk_level: info.risk_level,
            is_emergency: info.is_emergency,
        })
        .collect();
    diseases.sort_by(|a, b| a.name.cmp(&b.name));
    let count = diseases.len();
    Ok(Json(DiseaseListDto { diseases, count }))
}

fn map_pipeline_error(err: TriageError) -> (StatusCode, Json<ErrorBody>) {
    if err.is_not_ready() {
        warn!(%err, "model artifacts not available");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorBody::with_details(
                "Model not found. Please train the model first.",
                err.to_string(),
            )),
        )
    } else {
        error!(%err, "analysis failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::with_details(
                "An internal error occurred during analysis.",
                err.to_string(),
            )),
        )
    }
}
