//! In-memory repository and embedder doubles shared by service tests.

use std::sync::Mutex;

use briefmatch_types::brief::{Brief, BriefId};
use briefmatch_types::error::{EmbeddingError, RepositoryError};
use briefmatch_types::feedback::Feedback;
use briefmatch_types::talent::Talent;

use crate::embedding::embedder::Embedder;
use crate::repository::brief::BriefRepository;
use crate::repository::feedback::FeedbackRepository;
use crate::repository::talent::TalentRepository;

#[derive(Default)]
pub struct MemoryTalentRepository {
    pub talents: Mutex<Vec<Talent>>,
    pub fail: bool,
}

impl MemoryTalentRepository {
    pub fn with(talents: Vec<Talent>) -> Self {
        Self {
            talents: Mutex::new(talents),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            talents: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

impl TalentRepository for MemoryTalentRepository {
    async fn list_all(&self) -> Result<Vec<Talent>, RepositoryError> {
        if self.fail {
            return Err(RepositoryError::Connection);
        }
        Ok(self.talents.lock().unwrap().clone())
    }

    async fn create(&self, talent: &Talent) -> Result<Talent, RepositoryError> {
        if self.fail {
            return Err(RepositoryError::Connection);
        }
        self.talents.lock().unwrap().push(talent.clone());
        Ok(talent.clone())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        if self.fail {
            return Err(RepositoryError::Connection);
        }
        Ok(self.talents.lock().unwrap().len() as u64)
    }
}

#[derive(Default)]
pub struct MemoryBriefRepository {
    pub briefs: Mutex<Vec<Brief>>,
    pub fail: bool,
}

impl BriefRepository for MemoryBriefRepository {
    async fn create(&self, brief: &Brief) -> Result<Brief, RepositoryError> {
        if self.fail {
            return Err(RepositoryError::Query("disk full".to_string()));
        }
        self.briefs.lock().unwrap().push(brief.clone());
        Ok(brief.clone())
    }

    async fn get_by_id(&self, id: &BriefId) -> Result<Option<Brief>, RepositoryError> {
        Ok(self
            .briefs
            .lock()
            .unwrap()
            .iter()
            .find(|b| &b.id == id)
            .cloned())
    }
}

#[derive(Default)]
pub struct MemoryFeedbackRepository {
    pub feedback: Mutex<Vec<Feedback>>,
}

impl FeedbackRepository for MemoryFeedbackRepository {
    async fn create(&self, feedback: &Feedback) -> Result<(), RepositoryError> {
        self.feedback.lock().unwrap().push(feedback.clone());
        Ok(())
    }

    async fn list_for_brief(&self, brief_id: &BriefId) -> Result<Vec<Feedback>, RepositoryError> {
        Ok(self
            .feedback
            .lock()
            .unwrap()
            .iter()
            .filter(|f| &f.brief_id == brief_id)
            .cloned()
            .collect())
    }
}

/// Embedder that always fails, as an unreachable provider would.
pub struct DownEmbedder {
    pub dimension: usize,
}

impl Embedder for DownEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::Transport("connection refused".to_string()))
    }

    fn model_name(&self) -> &str {
        "down"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Embedder that fails for texts containing a marker word.
pub struct SelectiveEmbedder {
    pub fail_on: &'static str,
    pub dimension: usize,
}

impl Embedder for SelectiveEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text.contains(self.fail_on) {
            Err(EmbeddingError::Status(503))
        } else {
            Ok(crate::embedding::hashed::hashed_embedding(text, self.dimension))
        }
    }

    fn model_name(&self) -> &str {
        "selective"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
