//! Keyword overlap score used in place of vector similarity when no
//! embedding pair is available for a talent.

use briefmatch_types::brief::BriefCriteria;
use briefmatch_types::talent::Talent;

use crate::embedding::hashed::whitespace_words;

/// Points per matched brief token.
const POINTS_PER_MATCH: f64 = 1.5;
/// Cap on the overlap score.
pub const MAX_OVERLAP_SCORE: f64 = 5.0;
/// Brief tokens must be longer than this (in UTF-16 units) to count.
const MIN_TOKEN_LEN: usize = 2;

/// Compare `"<location> <tags>"` with `"<city> <tags>"`.
///
/// Both sides are lower-cased and split on whitespace runs. A brief token
/// longer than two characters matches when some talent token contains it or
/// is contained in it. Empty edge tokens are kept, so a talent without tags
/// (`"delhi "`) carries an empty token that every long brief token contains.
/// Returns `min(matches * 1.5, 5)`.
pub fn text_overlap_score(criteria: &BriefCriteria, talent: &Talent) -> f64 {
    let brief_text =
        format!("{} {}", criteria.location, criteria.style_tags.join(" ")).to_lowercase();
    let talent_text = format!("{} {}", talent.city, talent.style_tags.join(" ")).to_lowercase();

    let talent_tokens = whitespace_words(&talent_text);

    let matches = whitespace_words(&brief_text)
        .into_iter()
        .filter(|word| word.encode_utf16().count() > MIN_TOKEN_LEN)
        .filter(|word| {
            talent_tokens
                .iter()
                .any(|t| t.contains(*word) || word.contains(*t))
        })
        .count();

    (matches as f64 * POINTS_PER_MATCH).min(MAX_OVERLAP_SCORE)
}
