//! Match preview handler.

use axum::extract::State;

use briefmatch_types::brief::SubmitBriefRequest;
use briefmatch_types::matching::ScoredTalent;

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// POST /api/v1/matches - Rank talents for a brief without storing it.
pub async fn preview_matches(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SubmitBriefRequest>,
) -> Result<ApiResponse<Vec<ScoredTalent>>, AppError> {
    let timer = RequestTimer::start();
    let matches = state.match_service.preview_matches(&body).await?;
    Ok(timer.ok(matches))
}
