//! Feedback handlers.

use axum::extract::{Query, State};
use serde_json::json;

use briefmatch_types::feedback::{Feedback, SubmitFeedbackRequest};

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::http::extractors::query::FeedbackListQuery;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// POST /api/v1/feedback - Record a rating for a proposed talent.
pub async fn submit_feedback(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SubmitFeedbackRequest>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    let timer = RequestTimer::start();

    let feedback = state.feedback_service.submit(body).await?;
    let list_link = format!("/api/v1/feedback?brief_id={}", feedback.brief_id);

    Ok(timer
        .created(json!({ "success": true, "feedback": feedback }))
        .with_link("list", &list_link))
}

/// GET /api/v1/feedback?brief_id= - List feedback left for one brief.
pub async fn list_feedback(
    State(state): State<AppState>,
    Query(query): Query<FeedbackListQuery>,
) -> Result<ApiResponse<Vec<Feedback>>, AppError> {
    let timer = RequestTimer::start();
    let brief_id = query.brief_id()?;
    let feedback = state.feedback_service.list_for_brief(&brief_id).await?;
    Ok(timer.ok(feedback))
}
