//! Talent catalogue service.
//!
//! Talent embeddings are computed once, when a profile is added. Unlike
//! brief embeddings they never use the hashed fallback: a profile stored
//! with a fallback vector would be compared against provider vectors from a
//! different space forever after. A profile whose embedding fails is stored
//! without one and ranked by keyword overlap instead.

use std::time::Duration;

use serde::Serialize;

use briefmatch_types::error::{EmbeddingError, TalentError};
use briefmatch_types::talent::{CreateTalentRequest, Talent, TalentId};

use crate::embedding::embedder::Embedder;
use crate::repository::talent::TalentRepository;

/// Built-in sample catalogue used by `seed_talents`.
pub const SAMPLE_TALENTS: &[SampleTalent] = &[
    SampleTalent {
        name: "Priya Sharma",
        city: "Mumbai",
        style_tags: &["portrait", "wedding", "candid"],
        budget_min: 15000.0,
        budget_max: 50000.0,
        profile_text: "Professional wedding photographer in Mumbai specializing in candid portraits and traditional ceremonies",
    },
    SampleTalent {
        name: "Arjun Patel",
        city: "Delhi",
        style_tags: &["commercial", "product", "studio"],
        budget_min: 20000.0,
        budget_max: 75000.0,
        profile_text: "Commercial photographer in Delhi expert in product photography and studio setups for brands",
    },
    SampleTalent {
        name: "Sneha Reddy",
        city: "Bangalore",
        style_tags: &["lifestyle", "travel", "outdoor"],
        budget_min: 10000.0,
        budget_max: 40000.0,
        profile_text: "Lifestyle and travel photographer in Bangalore capturing outdoor adventures and urban stories",
    },
    SampleTalent {
        name: "Rahul Gupta",
        city: "Goa",
        style_tags: &["beach", "destination", "pastel"],
        budget_min: 25000.0,
        budget_max: 80000.0,
        profile_text: "Destination wedding photographer in Goa specializing in beach ceremonies with pastel tones",
    },
    SampleTalent {
        name: "Kavya Nair",
        city: "Chennai",
        style_tags: &["traditional", "cultural", "portrait"],
        budget_min: 12000.0,
        budget_max: 45000.0,
        profile_text: "Traditional photographer in Chennai focused on cultural events and classical portraits",
    },
    SampleTalent {
        name: "Vikram Singh",
        city: "Jaipur",
        style_tags: &["heritage", "royal", "vintage"],
        budget_min: 30000.0,
        budget_max: 100000.0,
        profile_text: "Heritage photographer in Jaipur specializing in royal venues and vintage aesthetics",
    },
];

/// A static sample profile.
#[derive(Debug, Clone, Copy)]
pub struct SampleTalent {
    pub name: &'static str,
    pub city: &'static str,
    pub style_tags: &'static [&'static str],
    pub budget_min: f64,
    pub budget_max: f64,
    pub profile_text: &'static str,
}

impl SampleTalent {
    pub fn to_request(&self) -> CreateTalentRequest {
        CreateTalentRequest {
            name: self.name.to_string(),
            city: self.city.to_string(),
            budget_min: self.budget_min,
            budget_max: self.budget_max,
            style_tags: self.style_tags.iter().map(|t| t.to_string()).collect(),
            profile_text: Some(self.profile_text.to_string()),
        }
    }
}

/// Outcome of a seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// The store already held talents, so nothing was inserted.
    pub skipped_existing: bool,
    pub inserted: Vec<String>,
    pub failed: Vec<String>,
}

/// Service for reading and growing the talent catalogue.
pub struct TalentService<T: TalentRepository, E: Embedder> {
    talent_repo: T,
    embedder: E,
    seed_delay: Duration,
}

impl<T: TalentRepository, E: Embedder> TalentService<T, E> {
    pub fn new(talent_repo: T, embedder: E) -> Self {
        Self {
            talent_repo,
            embedder,
            seed_delay: Duration::ZERO,
        }
    }

    /// Pause between sample inserts, to stay under provider rate limits.
    pub fn with_seed_delay(mut self, delay: Duration) -> Self {
        self.seed_delay = delay;
        self
    }

    /// Every talent in the store, in insertion order.
    pub async fn list_talents(&self) -> Result<Vec<Talent>, TalentError> {
        self.talent_repo
            .list_all()
            .await
            .map_err(|e| TalentError::StorageError(e.to_string()))
    }

    pub async fn count(&self) -> Result<u64, TalentError> {
        self.talent_repo
            .count()
            .await
            .map_err(|e| TalentError::StorageError(e.to_string()))
    }

    /// Validate, embed and store a new talent.
    ///
    /// An embedding failure does not reject the profile; it is stored with
    /// no embedding.
    pub async fn create_talent(&self, request: CreateTalentRequest) -> Result<Talent, TalentError> {
        request.validate()?;

        let embedding = match self.embed_profile(&request.embedding_text()).await {
            Ok(vector) => Some(vector),
            Err(e) => {
                tracing::warn!(
                    name = %request.name,
                    error = %e,
                    "Profile embedding failed, storing talent without embedding"
                );
                None
            }
        };

        self.insert(request, embedding).await
    }

    /// Insert the sample catalogue into an empty store.
    ///
    /// Does nothing when the store already holds talents. A sample whose
    /// embedding fails is skipped and reported; the rest are still inserted.
    pub async fn seed_talents(&self) -> Result<SeedReport, TalentError> {
        let mut report = SeedReport::default();

        if self.count().await? > 0 {
            tracing::info!("Talent store already populated, skipping seed");
            report.skipped_existing = true;
            return Ok(report);
        }

        for (i, sample) in SAMPLE_TALENTS.iter().enumerate() {
            if i > 0 && !self.seed_delay.is_zero() {
                tokio::time::sleep(self.seed_delay).await;
            }

            tracing::debug!(name = sample.name, "Seeding talent");
            let embedding = match self.embed_profile(sample.profile_text).await {
                Ok(vector) => vector,
                Err(e) => {
                    tracing::warn!(name = sample.name, error = %e, "Skipping sample talent");
                    report.failed.push(sample.name.to_string());
                    continue;
                }
            };

            match self.insert(sample.to_request(), Some(embedding)).await {
                Ok(_) => report.inserted.push(sample.name.to_string()),
                Err(e) => {
                    tracing::warn!(name = sample.name, error = %e, "Failed to insert sample talent");
                    report.failed.push(sample.name.to_string());
                }
            }
        }

        tracing::info!(
            inserted = report.inserted.len(),
            failed = report.failed.len(),
            "Seed complete"
        );
        Ok(report)
    }

    async fn embed_profile(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let vector = self.embedder.embed(text).await?;
        let expected = self.embedder.dimension();
        if vector.len() != expected {
            return Err(EmbeddingError::Malformed(format!(
                "expected {expected} dimensions, got {}",
                vector.len()
            )));
        }
        Ok(vector)
    }

    async fn insert(
        &self,
        request: CreateTalentRequest,
        embedding: Option<Vec<f32>>,
    ) -> Result<Talent, TalentError> {
        let talent = Talent {
            id: TalentId::new(),
            name: request.name.trim().to_string(),
            city: request.city.trim().to_string(),
            budget_min: request.budget_min,
            budget_max: request.budget_max,
            style_tags: request.style_tags,
            embedding,
            created_at: chrono::Utc::now(),
        };

        let talent = self
            .talent_repo
            .create(&talent)
            .await
            .map_err(|e| TalentError::StorageError(e.to_string()))?;
        tracing::info!(talent_id = %talent.id, name = %talent.name, "Stored talent");
        Ok(talent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::hashed::HashedEmbedder;
    use crate::service::testing::{DownEmbedder, MemoryTalentRepository, SelectiveEmbedder};

    fn request() -> CreateTalentRequest {
        CreateTalentRequest {
            name: "  Asha Menon ".to_string(),
            city: "Kochi".to_string(),
            budget_min: 8000.0,
            budget_max: 30000.0,
            style_tags: vec!["backwater".to_string()],
            profile_text: Some("Backwater weddings in Kerala".to_string()),
        }
    }

    #[test]
    fn test_sample_catalogue_is_valid() {
        assert_eq!(SAMPLE_TALENTS.len(), 6);
        for sample in SAMPLE_TALENTS {
            sample.to_request().validate().unwrap();
        }
    }

    #[tokio::test]
    async fn test_create_talent_stores_embedding() {
        let service = TalentService::new(MemoryTalentRepository::default(), HashedEmbedder::new(384));
        let talent = service.create_talent(request()).await.unwrap();
        assert_eq!(talent.name, "Asha Menon");
        assert_eq!(talent.embedding.as_ref().map(Vec::len), Some(384));
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_talent_without_provider_stores_no_embedding() {
        let service =
            TalentService::new(MemoryTalentRepository::default(), DownEmbedder { dimension: 384 });
        let talent = service.create_talent(request()).await.unwrap();
        assert!(talent.embedding.is_none());
        assert_eq!(service.list_talents().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_talent_rejects_inverted_budget() {
        let service = TalentService::new(MemoryTalentRepository::default(), HashedEmbedder::new(384));
        let mut req = request();
        req.budget_min = 50000.0;
        let err = service.create_talent(req).await.unwrap_err();
        assert!(matches!(err, TalentError::Validation(_)));
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seed_inserts_all_samples_in_order() {
        let service = TalentService::new(MemoryTalentRepository::default(), HashedEmbedder::new(384));
        let report = service.seed_talents().await.unwrap();
        assert!(!report.skipped_existing);
        assert_eq!(report.inserted.len(), 6);
        assert!(report.failed.is_empty());

        let names: Vec<String> = service
            .list_talents()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        let expected: Vec<&str> = SAMPLE_TALENTS.iter().map(|s| s.name).collect();
        assert_eq!(names, expected);
    }

    #[tokio::test]
    async fn test_seed_is_skipped_when_store_has_talents() {
        let service = TalentService::new(MemoryTalentRepository::default(), HashedEmbedder::new(384));
        service.create_talent(request()).await.unwrap();

        let report = service.seed_talents().await.unwrap();
        assert!(report.skipped_existing);
        assert!(report.inserted.is_empty());
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_seed_skips_profiles_whose_embedding_fails() {
        let service = TalentService::new(
            MemoryTalentRepository::default(),
            SelectiveEmbedder {
                fail_on: "Goa",
                dimension: 384,
            },
        );
        let report = service.seed_talents().await.unwrap();
        assert_eq!(report.failed, vec!["Rahul Gupta".to_string()]);
        assert_eq!(report.inserted.len(), 5);
        assert!(
            service
                .list_talents()
                .await
                .unwrap()
                .iter()
                .all(|t| t.embedding.is_some())
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_surfaced() {
        let service = TalentService::new(MemoryTalentRepository::failing(), HashedEmbedder::new(384));
        assert!(matches!(
            service.list_talents().await.unwrap_err(),
            TalentError::StorageError(_)
        ));
        assert!(service.seed_talents().await.is_err());
    }
}
