//! Talent catalogue handlers.

use axum::extract::State;

use briefmatch_types::talent::{CreateTalentRequest, Talent};

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// GET /api/v1/talents - List the catalogue in insertion order.
pub async fn list_talents(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Talent>>, AppError> {
    let timer = RequestTimer::start();
    let talents = state.talent_service.list_talents().await?;
    Ok(timer.ok(talents).with_link("self", "/api/v1/talents"))
}

/// POST /api/v1/talents - Add a talent profile.
pub async fn create_talent(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateTalentRequest>,
) -> Result<ApiResponse<Talent>, AppError> {
    let timer = RequestTimer::start();
    let talent = state.talent_service.create_talent(body).await?;
    Ok(timer.created(talent).with_link("collection", "/api/v1/talents"))
}
