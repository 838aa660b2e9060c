//! Brief submission handlers.

use axum::extract::{Path, State};

use briefmatch_types::brief::{Brief, BriefId, SubmitBriefRequest, SubmitBriefResponse};

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// POST /api/v1/briefs - Store a brief and return its top matches.
pub async fn submit_brief(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SubmitBriefRequest>,
) -> Result<ApiResponse<SubmitBriefResponse>, AppError> {
    let timer = RequestTimer::start();

    let response = state.match_service.submit_brief(body).await?;
    let self_link = format!("/api/v1/briefs/{}", response.brief_id);

    Ok(timer
        .ok(response)
        .with_link("self", &self_link)
        .with_link("feedback", "/api/v1/feedback"))
}

/// GET /api/v1/briefs/{id} - Fetch a stored brief.
pub async fn get_brief(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Brief>, AppError> {
    let timer = RequestTimer::start();

    let brief_id = id
        .parse::<BriefId>()
        .map_err(|e| AppError::Validation(format!("invalid brief id '{id}': {e}")))?;

    let brief = state
        .match_service
        .get_brief(&brief_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("brief {brief_id} not found")))?;

    Ok(timer.ok(brief))
}
