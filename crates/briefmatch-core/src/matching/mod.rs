//! Brief-to-talent scoring.
//!
//! - [`rules`]: deterministic, explainable points from structured criteria
//! - [`similarity`]: cosine similarity between embeddings
//! - [`text_overlap`]: keyword overlap used when no embedding pair exists
//! - [`ranker`]: combines the above into a sorted, truncated list

pub mod ranker;
pub mod rules;
pub mod similarity;
pub mod text_overlap;
