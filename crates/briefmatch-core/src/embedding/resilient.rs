//! Embedder that never fails.
//!
//! Tries the wrapped provider once. Any error, or a vector of the wrong
//! length, is logged and replaced by the hashed embedding of the same text.

use briefmatch_types::error::EmbeddingError;

use super::embedder::Embedder;
use super::hashed::hashed_embedding;

/// Where an embedding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingSource {
    Provider,
    Fallback,
}

/// An embedding plus its provenance.
#[derive(Debug, Clone)]
pub struct Embedding {
    pub vector: Vec<f32>,
    pub source: EmbeddingSource,
}

/// Wraps a provider with the deterministic hashed fallback.
pub struct FallbackEmbedder<E: Embedder> {
    primary: E,
}

impl<E: Embedder> FallbackEmbedder<E> {
    pub fn new(primary: E) -> Self {
        Self { primary }
    }

    /// The wrapped provider, for callers that need strict (non-fallback) calls.
    pub fn primary(&self) -> &E {
        &self.primary
    }

    /// Embed `text`, degrading to the hashed vector on any provider failure.
    pub async fn embed_or_fallback(&self, text: &str) -> Embedding {
        let dimension = self.primary.dimension();
        let result = match self.primary.embed(text).await {
            Ok(vector) if vector.len() == dimension => Ok(vector),
            Ok(vector) => Err(EmbeddingError::Malformed(format!(
                "expected {dimension} dimensions, got {}",
                vector.len()
            ))),
            Err(e) => Err(e),
        };

        match result {
            Ok(vector) => Embedding {
                vector,
                source: EmbeddingSource::Provider,
            },
            Err(e) => {
                tracing::warn!(
                    model = %self.primary.model_name(),
                    error = %e,
                    "Embedding provider unavailable, using hashed fallback"
                );
                Embedding {
                    vector: hashed_embedding(text, dimension),
                    source: EmbeddingSource::Fallback,
                }
            }
        }
    }
}

impl<E: Embedder> Embedder for FallbackEmbedder<E> {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.embed_or_fallback(text).await.vector)
    }

    fn model_name(&self) -> &str {
        self.primary.model_name()
    }

    fn dimension(&self) -> usize {
        self.primary.dimension()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Provider stub returning a canned result.
    struct StubEmbedder {
        response: fn() -> Result<Vec<f32>, EmbeddingError>,
    }

    impl Embedder for StubEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
            (self.response)()
        }

        fn model_name(&self) -> &str {
            "stub"
        }

        fn dimension(&self) -> usize {
            4
        }
    }

    #[tokio::test]
    async fn test_provider_vector_is_passed_through() {
        let embedder = FallbackEmbedder::new(StubEmbedder {
            response: || Ok(vec![0.1, 0.2, 0.3, 0.4]),
        });
        let out = embedder.embed_or_fallback("anything").await;
        assert_eq!(out.source, EmbeddingSource::Provider);
        assert_eq!(out.vector, vec![0.1, 0.2, 0.3, 0.4]);
    }

    #[tokio::test]
    async fn test_provider_error_falls_back_to_hashed() {
        let embedder = FallbackEmbedder::new(StubEmbedder {
            response: || Err(EmbeddingError::Status(503)),
        });
        let out = embedder.embed_or_fallback("beach wedding").await;
        assert_eq!(out.source, EmbeddingSource::Fallback);
        assert_eq!(out.vector, hashed_embedding("beach wedding", 4));
    }

    #[tokio::test]
    async fn test_wrong_length_falls_back() {
        let embedder = FallbackEmbedder::new(StubEmbedder {
            response: || Ok(vec![1.0, 0.0]),
        });
        let out = embedder.embed_or_fallback("studio").await;
        assert_eq!(out.source, EmbeddingSource::Fallback);
        assert_eq!(out.vector.len(), 4);
    }

    #[tokio::test]
    async fn test_fallback_is_reproducible() {
        let embedder = FallbackEmbedder::new(StubEmbedder {
            response: || Err(EmbeddingError::Timeout(10_000)),
        });
        let a = embedder.embed("heritage royal").await.unwrap();
        let b = embedder.embed("heritage royal").await.unwrap();
        assert_eq!(a, b);
    }
}
