//! SQLite brief repository implementation.

use briefmatch_core::repository::brief::BriefRepository;
use briefmatch_types::brief::{Brief, BriefId};
use briefmatch_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{decode_json, encode_json, format_datetime, parse_datetime};

/// SQLite-backed implementation of `BriefRepository`.
pub struct SqliteBriefRepository {
    pool: DatabasePool,
}

impl SqliteBriefRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct BriefRow {
    id: String,
    text: String,
    location: String,
    budget: f64,
    style_tags: String,
    embedding: String,
    created_at: String,
}

impl BriefRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            text: row.try_get("text")?,
            location: row.try_get("location")?,
            budget: row.try_get("budget")?,
            style_tags: row.try_get("style_tags")?,
            embedding: row.try_get("embedding")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_brief(self) -> Result<Brief, RepositoryError> {
        let id = self
            .id
            .parse::<BriefId>()
            .map_err(|e| RepositoryError::Query(format!("invalid brief id: {e}")))?;

        Ok(Brief {
            id,
            text: self.text,
            location: self.location,
            budget: self.budget,
            style_tags: decode_json(&self.style_tags, "style_tags")?,
            embedding: decode_json(&self.embedding, "embedding")?,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl BriefRepository for SqliteBriefRepository {
    async fn create(&self, brief: &Brief) -> Result<Brief, RepositoryError> {
        sqlx::query(
            "INSERT INTO briefs (id, text, location, budget, style_tags, embedding, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(brief.id.to_string())
        .bind(&brief.text)
        .bind(&brief.location)
        .bind(brief.budget)
        .bind(encode_json(&brief.style_tags)?)
        .bind(encode_json(&brief.embedding)?)
        .bind(format_datetime(&brief.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(brief.clone())
    }

    async fn get_by_id(&self, id: &BriefId) -> Result<Option<Brief>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM briefs WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let brief_row =
                    BriefRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(brief_row.into_brief()?))
            }
            None => Ok(None),
        }
    }
}
