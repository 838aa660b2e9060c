//! Feedback service.

use briefmatch_types::brief::BriefId;
use briefmatch_types::error::FeedbackError;
use briefmatch_types::feedback::{Feedback, SubmitFeedbackRequest};

use crate::repository::feedback::FeedbackRepository;

/// Records client ratings of proposed matches.
pub struct FeedbackService<F: FeedbackRepository> {
    feedback_repo: F,
}

impl<F: FeedbackRepository> FeedbackService<F> {
    pub fn new(feedback_repo: F) -> Self {
        Self { feedback_repo }
    }

    /// Validate and store one rating.
    ///
    /// The brief and talent ids are not checked against the store; feedback
    /// for an unknown pair is accepted as-is.
    pub async fn submit(&self, request: SubmitFeedbackRequest) -> Result<Feedback, FeedbackError> {
        let feedback = request.into_feedback()?;

        self.feedback_repo
            .create(&feedback)
            .await
            .map_err(|e| FeedbackError::StorageError(e.to_string()))?;

        tracing::info!(
            brief_id = %feedback.brief_id,
            talent_id = %feedback.talent_id,
            rating = feedback.rating,
            "Stored feedback"
        );
        Ok(feedback)
    }

    /// All feedback left for a brief, oldest first.
    pub async fn list_for_brief(&self, brief_id: &BriefId) -> Result<Vec<Feedback>, FeedbackError> {
        self.feedback_repo
            .list_for_brief(brief_id)
            .await
            .map_err(|e| FeedbackError::StorageError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::MemoryFeedbackRepository;
    use briefmatch_types::talent::TalentId;

    fn request(brief_id: &BriefId, rating: Option<u8>) -> SubmitFeedbackRequest {
        SubmitFeedbackRequest {
            brief_id: Some(brief_id.clone()),
            talent_id: Some(TalentId::new()),
            rating,
            comment: None,
        }
    }

    #[tokio::test]
    async fn test_submit_and_list() {
        let service = FeedbackService::new(MemoryFeedbackRepository::default());
        let brief = BriefId::new();
        let other = BriefId::new();

        service.submit(request(&brief, Some(5))).await.unwrap();
        service.submit(request(&brief, Some(2))).await.unwrap();
        service.submit(request(&other, Some(4))).await.unwrap();

        let listed = service.list_for_brief(&brief).await.unwrap();
        let ratings: Vec<u8> = listed.iter().map(|f| f.rating).collect();
        assert_eq!(ratings, vec![5, 2]);
    }

    #[tokio::test]
    async fn test_invalid_rating_is_not_stored() {
        let service = FeedbackService::new(MemoryFeedbackRepository::default());
        let brief = BriefId::new();

        let err = service.submit(request(&brief, Some(0))).await.unwrap_err();
        assert!(matches!(err, FeedbackError::InvalidRating(0)));
        let err = service.submit(request(&brief, Some(6))).await.unwrap_err();
        assert!(matches!(err, FeedbackError::InvalidRating(6)));

        assert!(service.list_for_brief(&brief).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_rating_is_rejected() {
        let service = FeedbackService::new(MemoryFeedbackRepository::default());
        let err = service.submit(request(&BriefId::new(), None)).await.unwrap_err();
        assert!(matches!(err, FeedbackError::MissingFields));
    }
}
