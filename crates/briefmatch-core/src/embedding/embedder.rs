//! Embedder trait for text-to-vector conversion.
//!
//! Implementations (e.g., the Hugging Face inference API client) live in
//! briefmatch-infra.

use briefmatch_types::error::EmbeddingError;

/// Trait for converting text into an embedding vector.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait Embedder: Send + Sync {
    /// Embed a single text into a vector of [`dimension`](Self::dimension) floats.
    fn embed(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Vec<f32>, EmbeddingError>> + Send;

    /// The model name used for embeddings (e.g., "BAAI/bge-small-en-v1.5").
    fn model_name(&self) -> &str;

    /// The dimensionality of the output vectors.
    fn dimension(&self) -> usize;
}
