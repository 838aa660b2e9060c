//! Scoring result types.

use serde::{Deserialize, Serialize};

use crate::talent::Talent;

/// Reason emitted when the talent's city equals the brief location.
pub const REASON_LOCATION: &str = "Location matched";
/// Reason emitted when the brief budget falls inside the talent's range.
pub const REASON_BUDGET: &str = "Budget matched";
/// Reason emitted when at least one style tag overlaps.
pub const REASON_STYLE: &str = "Style tags matched";

/// Deterministic rule score and the reasons behind it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleScore {
    pub score: u32,
    pub reasons: Vec<String>,
}

/// A talent enriched with its scores for one ranking call.
///
/// The talent's own fields are flattened so the JSON shape matches the
/// talent record plus `ruleScore`, `vectorScore`, `finalScore`, `reasons`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTalent {
    #[serde(flatten)]
    pub talent: Talent,
    #[serde(rename = "ruleScore")]
    pub rule_score: u32,
    /// Cosine similarity rounded to 3 decimals, 0 when not computed.
    #[serde(rename = "vectorScore")]
    pub vector_score: f64,
    /// Combined score rounded to 2 decimals.
    #[serde(rename = "finalScore")]
    pub final_score: f64,
    pub reasons: Vec<String>,
}
