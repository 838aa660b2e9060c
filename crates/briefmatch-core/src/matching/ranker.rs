//! Hybrid ranking: rule score plus vector similarity or keyword overlap.

use briefmatch_types::brief::BriefCriteria;
use briefmatch_types::error::SimilarityError;
use briefmatch_types::matching::ScoredTalent;
use briefmatch_types::talent::Talent;

use super::rules::rule_score;
use super::similarity::cosine_similarity;
use super::text_overlap::text_overlap_score;

/// Number of matches returned by [`rank`].
pub const MAX_MATCHES: usize = 3;
/// Multiplier applied to cosine similarity before adding the rule score.
pub const VECTOR_WEIGHT: f64 = 10.0;

/// Outcome of the vector half of scoring for one talent.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorOutcome {
    /// Both vectors were present and comparable.
    Scored(f64),
    /// Brief or talent has no embedding; keyword overlap is used instead.
    Missing,
    /// Both vectors were present but could not be compared; rule score only.
    Failed(SimilarityError),
}

/// Decide how the vector term is computed for `talent`.
pub fn assess_vector(brief_vector: Option<&[f32]>, talent: &Talent) -> VectorOutcome {
    let brief_vector = brief_vector.filter(|v| !v.is_empty());
    match (brief_vector, talent.usable_embedding()) {
        (Some(brief), Some(candidate)) => match cosine_similarity(candidate, brief) {
            Ok(similarity) => VectorOutcome::Scored(similarity),
            Err(e) => VectorOutcome::Failed(e),
        },
        _ => VectorOutcome::Missing,
    }
}

/// Score one talent. Never fails: an unusable vector lowers the
/// information content of the score, not the availability of the result.
pub fn score_talent(
    talent: &Talent,
    criteria: &BriefCriteria,
    brief_vector: Option<&[f32]>,
) -> ScoredTalent {
    let rules = rule_score(talent, criteria);
    let rule = rules.score as f64;

    let (vector_score, final_score) = match assess_vector(brief_vector, talent) {
        VectorOutcome::Scored(similarity) => (similarity, rule + similarity * VECTOR_WEIGHT),
        VectorOutcome::Failed(e) => {
            tracing::warn!(
                talent = %talent.name,
                error = %e,
                "Similarity failed, using rule score only"
            );
            (0.0, rule)
        }
        VectorOutcome::Missing => {
            tracing::debug!(
                talent = %talent.name,
                "No embedding pair, using keyword overlap"
            );
            (0.0, rule + text_overlap_score(criteria, talent))
        }
    };

    ScoredTalent {
        talent: talent.clone(),
        rule_score: rules.score,
        vector_score: round_to(vector_score, 3),
        final_score: round_to(final_score, 2),
        reasons: rules.reasons,
    }
}

/// Score every talent, sort by final score descending and keep the top
/// [`MAX_MATCHES`].
///
/// The sort is stable: talents with equal final scores keep the order in
/// which the store returned them.
pub fn rank(
    brief_vector: Option<&[f32]>,
    criteria: &BriefCriteria,
    talents: &[Talent],
) -> Vec<ScoredTalent> {
    let mut scored: Vec<ScoredTalent> = talents
        .iter()
        .map(|t| score_talent(t, criteria, brief_vector))
        .collect();

    scored.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    scored.truncate(MAX_MATCHES);
    scored
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
