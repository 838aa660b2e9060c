//! SQLite feedback repository implementation.

use briefmatch_core::repository::feedback::FeedbackRepository;
use briefmatch_types::brief::BriefId;
use briefmatch_types::error::RepositoryError;
use briefmatch_types::feedback::Feedback;
use briefmatch_types::talent::TalentId;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime};

/// SQLite-backed implementation of `FeedbackRepository`.
pub struct SqliteFeedbackRepository {
    pool: DatabasePool,
}

impl SqliteFeedbackRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct FeedbackRow {
    id: String,
    brief_id: String,
    talent_id: String,
    rating: i64,
    comment: Option<String>,
    created_at: String,
}

impl FeedbackRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            brief_id: row.try_get("brief_id")?,
            talent_id: row.try_get("talent_id")?,
            rating: row.try_get("rating")?,
            comment: row.try_get("comment")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_feedback(self) -> Result<Feedback, RepositoryError> {
        let id = self
            .id
            .parse::<uuid::Uuid>()
            .map_err(|e| RepositoryError::Query(format!("invalid feedback id: {e}")))?;
        let brief_id = self
            .brief_id
            .parse::<BriefId>()
            .map_err(|e| RepositoryError::Query(format!("invalid brief id: {e}")))?;
        let talent_id = self
            .talent_id
            .parse::<TalentId>()
            .map_err(|e| RepositoryError::Query(format!("invalid talent id: {e}")))?;
        let rating = u8::try_from(self.rating)
            .map_err(|_| RepositoryError::Query(format!("invalid rating: {}", self.rating)))?;

        Ok(Feedback {
            id,
            brief_id,
            talent_id,
            rating,
            comment: self.comment,
            timestamp: parse_datetime(&self.created_at)?,
        })
    }
}

impl FeedbackRepository for SqliteFeedbackRepository {
    async fn create(&self, feedback: &Feedback) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO feedback (id, brief_id, talent_id, rating, comment, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(feedback.id.to_string())
        .bind(feedback.brief_id.to_string())
        .bind(feedback.talent_id.to_string())
        .bind(feedback.rating as i64)
        .bind(&feedback.comment)
        .bind(format_datetime(&feedback.timestamp))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list_for_brief(&self, brief_id: &BriefId) -> Result<Vec<Feedback>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM feedback WHERE brief_id = ? ORDER BY rowid ASC")
            .bind(brief_id.to_string())
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                FeedbackRow::from_row(row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?
                    .into_feedback()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_pool() -> (DatabasePool, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        let pool = DatabasePool::new(&url).await.unwrap();
        (pool, dir)
    }

    fn feedback(brief_id: &BriefId, rating: u8, comment: Option<&str>) -> Feedback {
        Feedback {
            id: uuid::Uuid::now_v7(),
            brief_id: brief_id.clone(),
            talent_id: TalentId::new(),
            rating,
            comment: comment.map(str::to_string),
            timestamp: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list_for_brief() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteFeedbackRepository::new(pool);
        let brief = BriefId::new();

        let first = feedback(&brief, 5, Some("Loved the portfolio"));
        repo.create(&first).await.unwrap();
        repo.create(&feedback(&brief, 3, None)).await.unwrap();
        repo.create(&feedback(&BriefId::new(), 1, None)).await.unwrap();

        let listed = repo.list_for_brief(&brief).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[0].comment.as_deref(), Some("Loved the portfolio"));
        assert_eq!(listed[1].rating, 3);
        assert_eq!(listed[1].comment, None);
    }

    #[tokio::test]
    async fn test_out_of_range_rating_is_rejected_by_schema() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteFeedbackRepository::new(pool);
        let err = repo.create(&feedback(&BriefId::new(), 9, None)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Query(_)));
    }
}
