//! Creative brief types.
//!
//! A brief is what a client submits: free text plus the structured criteria
//! (location, budget, style tags) that the rule scorer checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::error::BriefError;
use crate::matching::ScoredTalent;

/// Unique identifier for a stored brief.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BriefId(pub Uuid);

impl BriefId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for BriefId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BriefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BriefId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// The structured part of a brief, the only input the rule scorer sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefCriteria {
    /// Desired city, compared verbatim with `Talent::city`.
    pub location: String,
    /// Single budget figure checked against each talent's range.
    pub budget: f64,
    #[serde(default)]
    pub style_tags: Vec<String>,
}

/// A persisted brief with the embedding computed at submission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brief {
    pub id: BriefId,
    pub text: String,
    pub location: String,
    pub budget: f64,
    pub style_tags: Vec<String>,
    pub embedding: Vec<f32>,
    pub created_at: DateTime<Utc>,
}

impl Brief {
    pub fn criteria(&self) -> BriefCriteria {
        BriefCriteria {
            location: self.location.clone(),
            budget: self.budget,
            style_tags: self.style_tags.clone(),
        }
    }
}

/// Incoming brief submission (REST body or CLI arguments).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitBriefRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub style_tags: Vec<String>,
}

impl SubmitBriefRequest {
    /// Reject submissions with any required field missing or blank.
    pub fn validate(&self) -> Result<(), BriefError> {
        let mut missing = Vec::new();
        if self.text.trim().is_empty() {
            missing.push("text");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        if !(self.budget.is_finite() && self.budget > 0.0) {
            missing.push("budget");
        }
        if self.style_tags.is_empty() {
            missing.push("style_tags");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(BriefError::MissingFields(missing.join(", ")))
        }
    }

    pub fn criteria(&self) -> BriefCriteria {
        BriefCriteria {
            location: self.location.clone(),
            budget: self.budget,
            style_tags: self.style_tags.clone(),
        }
    }
}

/// Result of a brief submission: the stored brief id and its top matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitBriefResponse {
    pub brief_id: BriefId,
    pub matches: Vec<ScoredTalent>,
}
