//! Cosine similarity over embedding vectors.

use briefmatch_types::error::SimilarityError;

/// `dot(a, b) / (|a| * |b|)`, accumulated and returned in f64.
///
/// Vectors must have equal length. If either norm is exactly zero the
/// similarity is defined as 0 rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    let similarity = dot / (norm_a.sqrt() * norm_b.sqrt());
    if !similarity.is_finite() {
        return Err(SimilarityError::NonFinite);
    }
    Ok(similarity)
}
