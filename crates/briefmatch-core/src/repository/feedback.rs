//! Feedback repository trait definition.

use briefmatch_types::brief::BriefId;
use briefmatch_types::error::RepositoryError;
use briefmatch_types::feedback::Feedback;

/// Repository trait for match feedback.
pub trait FeedbackRepository: Send + Sync {
    /// Insert one feedback record.
    fn create(
        &self,
        feedback: &Feedback,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// All feedback for a brief, oldest first.
    fn list_for_brief(
        &self,
        brief_id: &BriefId,
    ) -> impl std::future::Future<Output = Result<Vec<Feedback>, RepositoryError>> + Send;
}
