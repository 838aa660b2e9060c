//! SQLite talent repository implementation.

use briefmatch_core::repository::talent::TalentRepository;
use briefmatch_types::error::RepositoryError;
use briefmatch_types::talent::{Talent, TalentId};
use sqlx::Row;

use super::pool::DatabasePool;
use super::{decode_json, encode_json, format_datetime, parse_datetime};

/// SQLite-backed implementation of `TalentRepository`.
pub struct SqliteTalentRepository {
    pool: DatabasePool,
}

impl SqliteTalentRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Talent.
struct TalentRow {
    id: String,
    name: String,
    city: String,
    budget_min: f64,
    budget_max: f64,
    style_tags: String,
    embedding: Option<String>,
    created_at: String,
}

impl TalentRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            city: row.try_get("city")?,
            budget_min: row.try_get("budget_min")?,
            budget_max: row.try_get("budget_max")?,
            style_tags: row.try_get("style_tags")?,
            embedding: row.try_get("embedding")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_talent(self) -> Result<Talent, RepositoryError> {
        let id = self
            .id
            .parse::<TalentId>()
            .map_err(|e| RepositoryError::Query(format!("invalid talent id: {e}")))?;

        let style_tags: Vec<String> = decode_json(&self.style_tags, "style_tags")?;

        // An unreadable vector only costs this talent its vector score.
        let embedding = self.embedding.as_deref().and_then(|s| {
            decode_json::<Vec<f32>>(s, "embedding")
                .inspect_err(|e| {
                    tracing::warn!(talent_id = %id, error = %e, "Ignoring undecodable talent embedding");
                })
                .ok()
        });

        Ok(Talent {
            id,
            name: self.name,
            city: self.city,
            budget_min: self.budget_min,
            budget_max: self.budget_max,
            style_tags,
            embedding,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl TalentRepository for SqliteTalentRepository {
    async fn list_all(&self) -> Result<Vec<Talent>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM talents ORDER BY rowid ASC")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                TalentRow::from_row(row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?
                    .into_talent()
            })
            .collect()
    }

    async fn create(&self, talent: &Talent) -> Result<Talent, RepositoryError> {
        let tags_json = encode_json(&talent.style_tags)?;
        let embedding_json = talent.embedding.as_ref().map(encode_json).transpose()?;

        let result = sqlx::query(
            "INSERT INTO talents (id, name, city, budget_min, budget_max, style_tags, embedding, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(talent.id.to_string())
        .bind(&talent.name)
        .bind(&talent.city)
        .bind(talent.budget_min)
        .bind(talent.budget_max)
        .bind(&tags_json)
        .bind(&embedding_json)
        .bind(format_datetime(&talent.created_at))
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(_) => Ok(talent.clone()),
            Err(sqlx::Error::Database(db_err)) if db_err.message().contains("UNIQUE") => Err(
                RepositoryError::Conflict(format!("talent '{}' already exists", talent.id)),
            ),
            Err(e) => Err(RepositoryError::Query(e.to_string())),
        }
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM talents")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        Ok(count as u64)
    }
}
