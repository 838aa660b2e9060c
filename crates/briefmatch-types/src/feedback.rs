//! Client feedback on a proposed match.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::brief::BriefId;
use crate::error::FeedbackError;
use crate::talent::TalentId;

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating.
pub const MAX_RATING: u8 = 5;

/// A rating left by the client for one talent proposed for one brief.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub brief_id: BriefId,
    pub talent_id: TalentId,
    pub rating: u8,
    pub comment: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Incoming feedback submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub brief_id: Option<BriefId>,
    pub talent_id: Option<TalentId>,
    pub rating: Option<u8>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl SubmitFeedbackRequest {
    /// Validate and turn the request into a timestamped record.
    pub fn into_feedback(self) -> Result<Feedback, FeedbackError> {
        let (Some(brief_id), Some(talent_id), Some(rating)) =
            (self.brief_id, self.talent_id, self.rating)
        else {
            return Err(FeedbackError::MissingFields);
        };

        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(FeedbackError::InvalidRating(rating));
        }

        let comment = self
            .comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Feedback {
            id: Uuid::now_v7(),
            brief_id,
            talent_id,
            rating,
            comment,
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(rating: Option<u8>) -> SubmitFeedbackRequest {
        SubmitFeedbackRequest {
            brief_id: Some(BriefId::new()),
            talent_id: Some(TalentId::new()),
            rating,
            comment: Some("  great eye for light ".to_string()),
        }
    }

    #[test]
    fn test_into_feedback_trims_comment() {
        let feedback = request(Some(4)).into_feedback().unwrap();
        assert_eq!(feedback.rating, 4);
        assert_eq!(feedback.comment.as_deref(), Some("great eye for light"));
    }

    #[test]
    fn test_missing_rating_is_rejected() {
        let err = request(None).into_feedback().unwrap_err();
        assert!(matches!(err, FeedbackError::MissingFields));
    }

    #[test]
    fn test_out_of_range_rating_is_rejected() {
        assert!(matches!(
            request(Some(0)).into_feedback().unwrap_err(),
            FeedbackError::InvalidRating(0)
        ));
        assert!(matches!(
            request(Some(6)).into_feedback().unwrap_err(),
            FeedbackError::InvalidRating(6)
        ));
    }

    #[test]
    fn test_blank_comment_becomes_none() {
        let mut req = request(Some(5));
        req.comment = Some("   ".to_string());
        assert!(req.into_feedback().unwrap().comment.is_none());
    }
}
