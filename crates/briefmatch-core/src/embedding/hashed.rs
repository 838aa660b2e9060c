//! Deterministic hashed embedding.
//!
//! Spreads the characters of each word over a fixed number of buckets and
//! L2-normalizes the result. The vectors carry no semantics; they only keep
//! the scoring pipeline well-defined when the real provider is unreachable,
//! and give tests reproducible inputs without a network.

use briefmatch_types::error::EmbeddingError;

use super::embedder::Embedder;

/// Weight added to a bucket for every character that lands in it.
const CHAR_WEIGHT: f64 = 0.1;
const WORD_STRIDE: usize = 31;
const CHAR_STRIDE: usize = 17;

/// Compute the hashed embedding of `text` with `dimension` buckets.
///
/// For the character at word index `i` and UTF-16 index `j` the bucket is
/// `(code_unit + i * 31 + j * 17) % dimension`. The accumulator is divided by
/// its Euclidean norm; an all-zero accumulator is returned as is.
pub fn hashed_embedding(text: &str, dimension: usize) -> Vec<f32> {
    if dimension == 0 {
        return Vec::new();
    }

    let lower = text.to_lowercase();
    let mut acc = vec![0.0_f64; dimension];

    for (i, word) in whitespace_words(&lower).into_iter().enumerate() {
        for (j, unit) in word.encode_utf16().enumerate() {
            let idx = (unit as usize + i * WORD_STRIDE + j * CHAR_STRIDE) % dimension;
            acc[idx] += CHAR_WEIGHT;
        }
    }

    let norm = acc.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        acc.iter().map(|v| (v / norm) as f32).collect()
    } else {
        acc.into_iter().map(|v| v as f32).collect()
    }
}

/// Split on runs of whitespace, keeping an empty leading/trailing word when
/// the text starts/ends with whitespace.
///
/// Word positions feed the bucket index here, and the keyword overlap scorer
/// relies on the empty words too, so both tokenize the same way.
pub(crate) fn whitespace_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut in_gap = false;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if !in_gap {
                words.push(&text[start..idx]);
                in_gap = true;
            }
        } else if in_gap {
            start = idx;
            in_gap = false;
        }
    }
    words.push(if in_gap { "" } else { &text[start..] });
    words
}

/// [`Embedder`] backed by [`hashed_embedding`]. Never fails.
#[derive(Debug, Clone)]
pub struct HashedEmbedder {
    dimension: usize,
}

impl HashedEmbedder {
    pub const MODEL_NAME: &'static str = "hashed-fallback";

    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Embedder for HashedEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(hashed_embedding(text, self.dimension))
    }

    fn model_name(&self) -> &str {
        Self::MODEL_NAME
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn norm(v: &[f32]) -> f64 {
        v.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>().sqrt()
    }

    #[test]
    fn test_whitespace_words_keeps_edge_gaps() {
        assert_eq!(whitespace_words("a b"), vec!["a", "b"]);
        assert_eq!(whitespace_words("  a\t\nb "), vec!["", "a", "b", ""]);
        assert_eq!(whitespace_words(""), vec![""]);
    }

    #[test]
    fn test_single_char_lands_in_expected_bucket() {
        // 'a' = 97, word 0, char 0 -> bucket 97
        let v = hashed_embedding("A", 384);
        assert_eq!(v.len(), 384);
        assert_eq!(v[97], 1.0);
        assert_eq!(v.iter().filter(|x| **x != 0.0).count(), 1);
    }

    #[test]
    fn test_bucket_wraps_around_dimension() {
        // 'b' = 98 at word 1, char 1 -> 98 + 31 + 17 = 146 % 8 = 2
        let v = hashed_embedding("x yb", 8);
        let x_bucket = 120 % 8;
        let y_bucket = (121 + 31) % 8;
        let b_bucket = (98 + 31 + 17) % 8;
        assert!(v[x_bucket] > 0.0);
        assert!(v[y_bucket] > 0.0);
        assert!(v[b_bucket] > 0.0);
        assert_eq!(b_bucket, 2);
    }

    #[test]
    fn test_leading_whitespace_shifts_word_index() {
        assert_ne!(hashed_embedding("wedding", 384), hashed_embedding(" wedding", 384));
    }

    #[test]
    fn test_blank_text_is_zero_vector() {
        let v = hashed_embedding("   ", 384);
        assert_eq!(v.len(), 384);
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_zero_dimension_is_empty() {
        assert!(hashed_embedding("anything", 0).is_empty());
    }

    #[tokio::test]
    async fn test_embedder_reports_model_and_dimension() {
        let embedder = HashedEmbedder::new(384);
        assert_eq!(embedder.dimension(), 384);
        assert_eq!(embedder.model_name(), "hashed-fallback");
        let v = embedder.embed("Pastel beach wedding in Goa").await.unwrap();
        assert_eq!(v.len(), 384);
    }

    proptest! {
        #[test]
        fn prop_deterministic(text in ".{0,64}") {
            let a = hashed_embedding(&text, 384);
            let b = hashed_embedding(&text, 384);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_unit_norm_for_non_blank_text(text in "[a-zA-Z ]{0,32}[a-z][a-zA-Z ]{0,32}") {
            let v = hashed_embedding(&text, 384);
            prop_assert!((norm(&v) - 1.0).abs() < 1e-5);
        }

        #[test]
        fn prop_fixed_dimension(text in ".{0,64}", dim in 1usize..512) {
            prop_assert_eq!(hashed_embedding(&text, dim).len(), dim);
        }
    }
}
