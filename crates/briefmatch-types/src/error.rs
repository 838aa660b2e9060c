use thiserror::Error;

/// Errors from repository operations (used by trait definitions in briefmatch-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Reasons a remote embedding request produced no usable vector.
///
/// None of these reach the ranking caller: the resilient embedder replaces
/// the vector with the deterministic fallback and logs the cause.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding request timed out after {0} ms")]
    Timeout(u64),

    #[error("embedding provider returned HTTP {0}")]
    Status(u16),

    #[error("embedding provider error: {0}")]
    Provider(String),

    #[error("malformed embedding response: {0}")]
    Malformed(String),

    #[error("embedding transport error: {0}")]
    Transport(String),
}

/// Errors from vector similarity computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimilarityError {
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("similarity is not a finite number")]
    NonFinite,
}

/// Errors related to brief submission.
#[derive(Debug, Error)]
pub enum BriefError {
    #[error("missing required fields: {0}")]
    MissingFields(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors related to talent catalogue operations.
#[derive(Debug, Error)]
pub enum TalentError {
    #[error("invalid talent: {0}")]
    Validation(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors related to feedback submission.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("missing required fields: brief_id, talent_id and rating are required")]
    MissingFields,

    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("storage error: {0}")]
    StorageError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_error_display() {
        let err = SimilarityError::DimensionMismatch {
            left: 384,
            right: 3,
        };
        assert_eq!(err.to_string(), "dimension mismatch: 384 vs 3");
    }

    #[test]
    fn test_embedding_error_display() {
        assert_eq!(
            EmbeddingError::Status(503).to_string(),
            "embedding provider returned HTTP 503"
        );
        assert!(EmbeddingError::Timeout(10_000).to_string().contains("10000 ms"));
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }
}
