//! Rule-based scoring from structured brief criteria.

use briefmatch_types::brief::BriefCriteria;
use briefmatch_types::matching::{REASON_BUDGET, REASON_LOCATION, REASON_STYLE, RuleScore};
use briefmatch_types::talent::Talent;

pub const LOCATION_POINTS: u32 = 2;
pub const BUDGET_POINTS: u32 = 3;
pub const STYLE_POINTS: u32 = 3;

/// Highest score a talent can reach from the rules alone.
pub const MAX_RULE_SCORE: u32 = LOCATION_POINTS + BUDGET_POINTS + STYLE_POINTS;

/// Score a talent against the brief criteria.
///
/// Rules are evaluated in a fixed order and each one that fires adds its
/// points and exactly one reason:
///
/// 1. exact city match: +2
/// 2. budget inside `[budget_min, budget_max]`, inclusive: +3
/// 3. at least one style tag in common (case-sensitive): +3, regardless of
///    how many tags overlap
pub fn rule_score(talent: &Talent, criteria: &BriefCriteria) -> RuleScore {
    let mut score = 0;
    let mut reasons = Vec::new();

    if talent.city == criteria.location {
        score += LOCATION_POINTS;
        reasons.push(REASON_LOCATION.to_string());
    }

    if criteria.budget >= talent.budget_min && criteria.budget <= talent.budget_max {
        score += BUDGET_POINTS;
        reasons.push(REASON_BUDGET.to_string());
    }

    let style_overlap = talent
        .style_tags
        .iter()
        .any(|tag| criteria.style_tags.contains(tag));
    if style_overlap {
        score += STYLE_POINTS;
        reasons.push(REASON_STYLE.to_string());
    }

    RuleScore { score, reasons }
}

#[cfg(test)]
mod tests {
    use super::*;
    use briefmatch_types::talent::TalentId;
    use proptest::prelude::*;

    fn talent() -> Talent {
        Talent {
            id: TalentId::new(),
            name: "Priya Sharma".to_string(),
            city: "Mumbai".to_string(),
            budget_min: 15000.0,
            budget_max: 50000.0,
            style_tags: vec!["portrait".to_string(), "wedding".to_string()],
            embedding: None,
            created_at: chrono::Utc::now(),
        }
    }

    fn criteria(location: &str, budget: f64, tags: &[&str]) -> BriefCriteria {
        BriefCriteria {
            location: location.to_string(),
            budget,
            style_tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_all_rules_fire() {
        let result = rule_score(&talent(), &criteria("Mumbai", 30000.0, &["wedding", "bold"]));
        assert_eq!(result.score, 8);
        assert_eq!(
            result.reasons,
            vec!["Location matched", "Budget matched", "Style tags matched"]
        );
    }

    #[test]
    fn test_no_rules_fire() {
        let result = rule_score(&talent(), &criteria("Delhi", 100000.0, &["minimalist"]));
        assert_eq!(result.score, 0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_budget_bounds_are_inclusive() {
        assert_eq!(rule_score(&talent(), &criteria("x", 15000.0, &[])).score, 3);
        assert_eq!(rule_score(&talent(), &criteria("x", 50000.0, &[])).score, 3);
        assert_eq!(rule_score(&talent(), &criteria("x", 50000.01, &[])).score, 0);
    }

    #[test]
    fn test_style_reward_is_not_scaled_by_overlap() {
        let one = rule_score(&talent(), &criteria("x", 0.0, &["wedding"]));
        let two = rule_score(&talent(), &criteria("x", 0.0, &["wedding", "portrait"]));
        assert_eq!(one.score, 3);
        assert_eq!(two.score, 3);
        assert_eq!(two.reasons, vec!["Style tags matched"]);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let result = rule_score(&talent(), &criteria("mumbai", 0.0, &["Wedding"]));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_reasons_follow_rule_order() {
        let result = rule_score(&talent(), &criteria("Mumbai", 0.0, &["portrait"]));
        assert_eq!(result.score, 5);
        assert_eq!(result.reasons, vec!["Location matched", "Style tags matched"]);
    }

    #[test]
    fn test_max_rule_score_constant() {
        assert_eq!(MAX_RULE_SCORE, 8);
    }

    proptest! {
        #[test]
        fn prop_score_bounded_and_reason_per_point_group(
            location in "[A-C]",
            budget in 0.0f64..100000.0,
            tags in prop::collection::vec("[a-c]", 0..4),
        ) {
            let mut t = talent();
            t.city = "A".to_string();
            t.style_tags = vec!["a".to_string()];
            let tag_refs: Vec<&str> = tags.iter().map(String::as_str).collect();
            let result = rule_score(&t, &criteria(&location, budget, &tag_refs));
            prop_assert!(result.score <= MAX_RULE_SCORE);
            prop_assert!(result.reasons.len() <= 3);
        }

        #[test]
        fn prop_adding_a_matching_tag_never_decreases(
            budget in 0.0f64..100000.0,
            tags in prop::collection::vec("[a-z]{3,8}", 0..4),
        ) {
            let t = talent();
            let tag_refs: Vec<&str> = tags.iter().map(String::as_str).collect();
            let base = rule_score(&t, &criteria("Delhi", budget, &tag_refs));

            let mut with_match = tag_refs.clone();
            with_match.push("wedding");
            let richer = rule_score(&t, &criteria("Delhi", budget, &with_match));
            prop_assert!(richer.score >= base.score);

            let relocated = rule_score(&t, &criteria("Mumbai", budget, &tag_refs));
            prop_assert!(relocated.score >= base.score);
        }
    }
}
