use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::error::TalentError;

/// Unique identifier for a talent profile, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TalentId(pub Uuid);

impl TalentId {
    /// Create a new TalentId using UUID v7.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a TalentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for TalentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TalentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TalentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A talent profile that briefs are matched against.
///
/// Field names follow the `talents` table so JSON produced by the API stays
/// compatible with existing clients (`budget_min`, `budget_max`, `style_tags`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talent {
    pub id: TalentId,
    /// Display name.
    pub name: String,
    pub city: String,
    pub budget_min: f64,
    pub budget_max: f64,
    /// Ordered style tags. Duplicates are allowed but carry no extra weight.
    pub style_tags: Vec<String>,
    /// Profile embedding. Absent when the profile was stored without one.
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
    pub created_at: DateTime<Utc>,
}

impl Talent {
    /// The embedding, if present and non-empty.
    pub fn usable_embedding(&self) -> Option<&[f32]> {
        self.embedding.as_deref().filter(|v| !v.is_empty())
    }
}

/// Request to add a talent profile to the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTalentRequest {
    pub name: String,
    pub city: String,
    pub budget_min: f64,
    pub budget_max: f64,
    #[serde(default)]
    pub style_tags: Vec<String>,
    /// Free-text profile description used to compute the embedding.
    pub profile_text: Option<String>,
}

impl CreateTalentRequest {
    /// Check the structural invariants of a talent profile.
    pub fn validate(&self) -> Result<(), TalentError> {
        if self.name.trim().is_empty() {
            return Err(TalentError::Validation("name cannot be empty".to_string()));
        }
        if self.city.trim().is_empty() {
            return Err(TalentError::Validation("city cannot be empty".to_string()));
        }
        if !self.budget_min.is_finite() || !self.budget_max.is_finite() {
            return Err(TalentError::Validation(
                "budget bounds must be finite numbers".to_string(),
            ));
        }
        if self.budget_min < 0.0 {
            return Err(TalentError::Validation(
                "budget_min cannot be negative".to_string(),
            ));
        }
        if self.budget_min > self.budget_max {
            return Err(TalentError::Validation(format!(
                "budget_min ({}) exceeds budget_max ({})",
                self.budget_min, self.budget_max
            )));
        }
        Ok(())
    }

    /// Text to embed for this profile: the explicit profile text, or a
    /// synthesized description when none was given.
    pub fn embedding_text(&self) -> String {
        match &self.profile_text {
            Some(text) if !text.trim().is_empty() => text.clone(),
            _ => format!("{} {} {}", self.name, self.city, self.style_tags.join(" ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateTalentRequest {
        CreateTalentRequest {
            name: "Priya Sharma".to_string(),
            city: "Mumbai".to_string(),
            budget_min: 15000.0,
            budget_max: 50000.0,
            style_tags: vec!["portrait".to_string(), "wedding".to_string()],
            profile_text: None,
        }
    }

    #[test]
    fn test_talent_id_roundtrip() {
        let id = TalentId::new();
        let parsed: TalentId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_talent_serializes_wire_field_names() {
        let talent = Talent {
            id: TalentId::new(),
            name: "Priya Sharma".to_string(),
            city: "Mumbai".to_string(),
            budget_min: 15000.0,
            budget_max: 50000.0,
            style_tags: vec!["portrait".to_string()],
            embedding: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&talent).unwrap();
        assert_eq!(json["budget_min"], 15000.0);
        assert_eq!(json["budget_max"], 50000.0);
        assert_eq!(json["style_tags"][0], "portrait");
        assert!(json["id"].is_string());
    }

    #[test]
    fn test_usable_embedding_ignores_empty_vector() {
        let mut talent = Talent {
            id: TalentId::new(),
            name: "A".to_string(),
            city: "B".to_string(),
            budget_min: 0.0,
            budget_max: 1.0,
            style_tags: vec![],
            embedding: Some(vec![]),
            created_at: Utc::now(),
        };
        assert!(talent.usable_embedding().is_none());
        talent.embedding = Some(vec![0.5, 0.5]);
        assert_eq!(talent.usable_embedding(), Some(&[0.5, 0.5][..]));
    }

    #[test]
    fn test_validate_accepts_well_formed_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_budget() {
        let mut req = request();
        req.budget_min = 60000.0;
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds budget_max"));
    }

    #[test]
    fn test_validate_rejects_negative_budget_and_blank_city() {
        let mut req = request();
        req.budget_min = -1.0;
        assert!(req.validate().is_err());

        let mut req = request();
        req.city = "  ".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_embedding_text_falls_back_to_profile_fields() {
        let req = request();
        assert_eq!(req.embedding_text(), "Priya Sharma Mumbai portrait wedding");

        let mut req = request();
        req.profile_text = Some("Candid wedding photographer".to_string());
        assert_eq!(req.embedding_text(), "Candid wedding photographer");
    }
}
