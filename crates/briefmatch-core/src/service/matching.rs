//! Brief matching service.
//!
//! Orchestrates one ranking operation: embed the brief text (degrading to
//! the hashed fallback), store the brief, read every talent, rank.

use briefmatch_types::brief::{Brief, BriefCriteria, BriefId, SubmitBriefRequest, SubmitBriefResponse};
use briefmatch_types::error::{BriefError, RepositoryError};
use briefmatch_types::matching::ScoredTalent;

use crate::embedding::embedder::Embedder;
use crate::embedding::resilient::{EmbeddingSource, FallbackEmbedder};
use crate::matching::ranker::rank;
use crate::repository::brief::BriefRepository;
use crate::repository::talent::TalentRepository;

/// Service matching briefs against the talent catalogue.
///
/// Generic over repository and embedder traits -- briefmatch-core never
/// depends on briefmatch-infra.
pub struct MatchService<T: TalentRepository, B: BriefRepository, E: Embedder> {
    talent_repo: T,
    brief_repo: B,
    embedder: FallbackEmbedder<E>,
}

impl<T: TalentRepository, B: BriefRepository, E: Embedder> MatchService<T, B, E> {
    pub fn new(talent_repo: T, brief_repo: B, embedder: E) -> Self {
        Self {
            talent_repo,
            brief_repo,
            embedder: FallbackEmbedder::new(embedder),
        }
    }

    /// The embedder, wrapped with its fallback.
    pub fn embedder(&self) -> &FallbackEmbedder<E> {
        &self.embedder
    }

    /// Rank every stored talent against the brief.
    ///
    /// A store failure is logged and yields an empty list, the same as an
    /// empty table. Use [`try_get_top_matches`](Self::try_get_top_matches)
    /// to tell the two apart.
    pub async fn get_top_matches(
        &self,
        brief_vector: Option<&[f32]>,
        criteria: &BriefCriteria,
    ) -> Vec<ScoredTalent> {
        match self.try_get_top_matches(brief_vector, criteria).await {
            Ok(matches) => matches,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch talents, returning no matches");
                Vec::new()
            }
        }
    }

    /// Like [`get_top_matches`](Self::get_top_matches) but surfaces store errors.
    pub async fn try_get_top_matches(
        &self,
        brief_vector: Option<&[f32]>,
        criteria: &BriefCriteria,
    ) -> Result<Vec<ScoredTalent>, RepositoryError> {
        let talents = self.talent_repo.list_all().await?;
        if talents.is_empty() {
            tracing::info!("No talents in store");
            return Ok(Vec::new());
        }

        tracing::debug!(candidates = talents.len(), "Ranking talents");
        let matches = rank(brief_vector, criteria, &talents);
        tracing::info!(
            candidates = talents.len(),
            matches = matches.len(),
            top_score = matches.first().map(|m| m.final_score),
            "Ranked talents"
        );
        Ok(matches)
    }

    /// Validate, embed, persist and rank a brief.
    ///
    /// The embedding step never fails. A brief that cannot be stored is an
    /// error; ranking itself degrades to an empty list.
    pub async fn submit_brief(
        &self,
        request: SubmitBriefRequest,
    ) -> Result<SubmitBriefResponse, BriefError> {
        request.validate()?;

        // The stored text must be exactly what was embedded.
        let text = request.text.trim().to_string();
        let embedding = self.embedder.embed_or_fallback(&text).await;
        if embedding.source == EmbeddingSource::Fallback {
            tracing::info!("Brief embedded with hashed fallback");
        }

        let brief = Brief {
            id: BriefId::new(),
            text,
            location: request.location,
            budget: request.budget,
            style_tags: request.style_tags,
            embedding: embedding.vector,
            created_at: chrono::Utc::now(),
        };

        let brief = self
            .brief_repo
            .create(&brief)
            .await
            .map_err(|e| BriefError::StorageError(e.to_string()))?;
        tracing::info!(brief_id = %brief.id, "Stored brief");

        let matches = self
            .get_top_matches(Some(&brief.embedding), &brief.criteria())
            .await;

        Ok(SubmitBriefResponse {
            brief_id: brief.id,
            matches,
        })
    }

    /// Rank without storing the brief.
    pub async fn preview_matches(
        &self,
        request: &SubmitBriefRequest,
    ) -> Result<Vec<ScoredTalent>, BriefError> {
        request.validate()?;
        let embedding = self.embedder.embed_or_fallback(request.text.trim()).await;
        Ok(self
            .get_top_matches(Some(&embedding.vector), &request.criteria())
            .await)
    }

    /// Look up a stored brief.
    pub async fn get_brief(&self, id: &BriefId) -> Result<Option<Brief>, BriefError> {
        self.brief_repo
            .get_by_id(id)
            .await
            .map_err(|e| BriefError::StorageError(e.to_string()))
    }
}
