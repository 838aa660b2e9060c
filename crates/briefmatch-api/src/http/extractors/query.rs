//! Query parameter extractors.

use serde::Deserialize;

use briefmatch_types::brief::BriefId;

use crate::http::error::AppError;

/// Query parameters for the feedback list endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct FeedbackListQuery {
    pub brief_id: Option<String>,
}

impl FeedbackListQuery {
    /// The brief to list feedback for. Required.
    pub fn brief_id(&self) -> Result<BriefId, AppError> {
        let raw = self
            .brief_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Validation("brief_id query parameter is required".to_string()))?;

        raw.parse::<BriefId>()
            .map_err(|e| AppError::Validation(format!("invalid brief_id '{raw}': {e}")))
    }
}
